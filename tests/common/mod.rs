//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use omnibox::ComboOption;
use tempfile::TempDir;

/// Debounce window used by `ComboConfig::default()`
pub const DEBOUNCE: Duration = Duration::from_millis(300);
/// Blur grace delay used by `ComboConfig::default()`
pub const BLUR_GRACE: Duration = Duration::from_millis(100);

/// The country fixture used throughout the behavioral tests
pub fn country_options() -> Vec<ComboOption> {
    [
        ("United States", "US"),
        ("Canada", "CA"),
        ("Mexico", "MX"),
        ("France", "FR"),
        ("Germany", "DE"),
        ("Russia", "RU"),
        ("Japan", "JP"),
        ("China", "CN"),
        ("India", "IN"),
    ]
    .into_iter()
    .map(|(label, value)| ComboOption::new(label, value))
    .collect()
}

/// Fixed starting instant plus an offset, for readable timelines
pub fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

/// Builder for options files in a temporary directory
pub struct OptionsFileBuilder {
    temp_dir: TempDir,
    records: Vec<String>,
}

impl OptionsFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, records: Vec::new() }
    }

    /// Add a well-formed record
    pub fn option(mut self, label: &str, value: &str) -> Self {
        self.records.push(
            serde_json::json!({ "label": label, "value": value }).to_string(),
        );
        self
    }

    /// Add a raw JSON record (for malformed input)
    pub fn raw_record(mut self, json: &str) -> Self {
        self.records.push(json.to_string());
        self
    }

    /// Write the records as `options.json` and return the directory and file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("options.json");
        let content = format!("[{}]", self.records.join(","));
        fs::write(&path, content).expect("Failed to write options.json");
        (self.temp_dir, path)
    }

    /// Write arbitrary content as `options.json`
    pub fn build_with_content(self, content: &str) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("options.json");
        fs::write(&path, content).expect("Failed to write options.json");
        (self.temp_dir, path)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for OptionsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
