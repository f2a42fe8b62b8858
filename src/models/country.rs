use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::option::ComboOption;

/// Offset from an ASCII uppercase letter to its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 127397;

const BUILTIN_COUNTRIES: &str = include_str!("../data/countries.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub label: String,
    pub phone: String,
    #[serde(default)]
    pub suggested: Option<bool>,
}

impl Country {
    /// Display label with flag and dialing code, keyed by the ISO code.
    pub fn to_option(&self) -> ComboOption {
        ComboOption::new(format_country(self), self.code.clone())
    }
}

/// Load the country table compiled into the binary
pub fn builtin_countries() -> Result<Vec<Country>> {
    serde_json::from_str(BUILTIN_COUNTRIES).context("Built-in country table is malformed")
}

/// Convert a two-letter ISO country code to its flag emoji.
///
/// Returns an empty string (and logs a warning) for anything that is not two
/// ASCII letters.
pub fn flag_emoji(code: &str) -> String {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        warn!(code, "Invalid country code");
        return String::new();
    }

    code.to_ascii_uppercase()
        .chars()
        .filter_map(|c| char::from_u32(REGIONAL_INDICATOR_OFFSET + c as u32))
        .collect()
}

/// Format a country for display: `"{flag} {label} (+{phone})"`
pub fn format_country(country: &Country) -> String {
    let flag = flag_emoji(&country.code);
    let phone = country.phone.trim_start_matches('+');
    format!("{} {} (+{})", flag, country.label, phone)
}
