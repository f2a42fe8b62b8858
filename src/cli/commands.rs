use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{ComboConfig, DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_MS};
use crate::filters::filter_options;
use crate::models::{ComboOption, builtin_countries};
use crate::parsers::parse_options_file;
use crate::tui::run_interactive;
use crate::utils::logging::{LogTarget, init_logging};
use crate::utils::sanitize_label;

#[derive(Parser)]
#[command(name = "omnibox")]
#[command(version = "0.1.0")]
#[command(about = "Address-bar style autocomplete picker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file with an array of {"label", "value"} records (default: built-in country list)
    #[arg(long, global = true, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Delay before the highlight follows a new query
    #[arg(long, env = "OMNIBOX_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Delay between losing focus and closing the dropdown
    #[arg(long, env = "OMNIBOX_BLUR_GRACE_MS", default_value_t = DEFAULT_BLUR_GRACE_MS)]
    pub blur_grace_ms: u64,

    /// Write logs to this file (filter with OMNIBOX_LOG, e.g. OMNIBOX_LOG=debug)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the options matching a query
    Filter {
        /// Case-insensitive substring to look for in option labels
        query: String,
        /// Print the matches as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print every option with its value
    List,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, &cli.command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Some(_)) => LogTarget::Stderr,
        // The picker owns the terminal
        (None, None) => LogTarget::Disabled,
    };
    init_logging(log_target)?;

    let options = load_options(cli.options.as_deref())?;

    match &cli.command {
        Some(Commands::Filter { query, json }) => show_matches(&options, query, *json)?,
        Some(Commands::List) => show_list(&options),
        None => {
            let config = ComboConfig::from_millis(cli.debounce_ms, cli.blur_grace_ms);
            if let Some(selection) = run_interactive(options, config)? {
                println!("{}", serde_json::to_string(&selection)?);
            }
        }
    }

    Ok(())
}

/// Options from a file, or the built-in country list
fn load_options(path: Option<&Path>) -> Result<Vec<ComboOption>> {
    let Some(path) = path else {
        let countries = builtin_countries()?;
        return Ok(countries.iter().map(|country| country.to_option()).collect());
    };

    let parsed = parse_options_file(path)
        .with_context(|| format!("Failed to load options from {}", path.display()))?;

    if !parsed.is_clean() {
        eprintln!(
            "Loaded options file: {} options ({} unrenderable)",
            parsed.options.len(),
            parsed.defects.len()
        );
    }

    Ok(parsed.options)
}

fn show_matches(options: &[ComboOption], query: &str, json: bool) -> Result<()> {
    let matches: Vec<ComboOption> =
        filter_options(options, query).into_iter().filter(|o| !o.is_placeholder()).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        println!("No options available");
    } else {
        for option in &matches {
            println!("{}", sanitize_label(&option.label));
        }
    }

    Ok(())
}

fn show_list(options: &[ComboOption]) {
    for option in options.iter().filter(|o| !o.is_placeholder()) {
        println!("{}\t{}", sanitize_label(&option.value), sanitize_label(&option.label));
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_subcommand() {
        let cli = Cli::try_parse_from(["omnibox", "filter", "uni", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Filter { query, json }) => {
                assert_eq!(query, "uni");
                assert!(json);
            }
            _ => panic!("expected filter subcommand"),
        }
    }

    #[test]
    fn test_parse_timing_flags() {
        let cli =
            Cli::try_parse_from(["omnibox", "--debounce-ms", "50", "--blur-grace-ms", "20"])
                .unwrap();
        assert_eq!(cli.debounce_ms, 50);
        assert_eq!(cli.blur_grace_ms, 20);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_load_builtin_options() {
        let options = load_options(None).unwrap();
        assert!(options.iter().any(|o| o.value == "MX" && o.label.contains("Mexico")));
    }

    #[test]
    fn test_load_missing_options_file() {
        let err = load_options(Some(Path::new("/nonexistent/options.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load options"));
    }
}
