use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::ComboOption;

/// Maximum options file size (10MB)
pub const MAX_OPTIONS_FILE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("options file too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
    #[error("options JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("options JSON must be an array of records, found {0}")]
    NotAnArray(&'static str),
}

/// Problem with a single record. Recorded, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordDefect {
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },
    #[error("record {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOptions {
    pub options: Vec<ComboOption>,
    pub defects: Vec<RecordDefect>,
}

impl ParsedOptions {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Read and parse an options file (JSON array of `{label, value}` records)
pub fn parse_options_file(path: &Path) -> Result<ParsedOptions, OptionsError> {
    let io_error = |source| OptionsError::Io { path: path.to_path_buf(), source };

    let size = fs::metadata(path).map_err(io_error)?.len();
    if size > MAX_OPTIONS_FILE_BYTES {
        return Err(OptionsError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_OPTIONS_FILE_BYTES,
        });
    }

    let content = fs::read_to_string(path).map_err(io_error)?;
    parse_options_str(&content)
}

/// Parse option records from JSON text
pub fn parse_options_str(json: &str) -> Result<ParsedOptions, OptionsError> {
    let document: Value = serde_json::from_str(json)?;

    let records = match document {
        Value::Array(records) => records,
        Value::Null => return Ok(ParsedOptions::default()),
        other => return Err(OptionsError::NotAnArray(json_kind(&other))),
    };

    let mut parsed = ParsedOptions { options: Vec::with_capacity(records.len()), defects: vec![] };
    for (index, record) in records.iter().enumerate() {
        match option_from_record(index, record) {
            Ok(option) => parsed.options.push(option),
            Err(defect) => {
                warn!(%defect, "Substituting placeholder for unrenderable option");
                parsed.defects.push(defect);
                parsed.options.push(ComboOption::placeholder());
            }
        }
    }

    Ok(parsed)
}

/// Convert one JSON record into an option.
///
/// `label` must be a string. `value` may be a string or a number.
pub fn option_from_record(index: usize, record: &Value) -> Result<ComboOption, RecordDefect> {
    let object = record.as_object().ok_or(RecordDefect::NotAnObject { index })?;

    let label = object
        .get("label")
        .and_then(Value::as_str)
        .ok_or(RecordDefect::MissingField { index, field: "label" })?;

    let value = match object.get("value") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(RecordDefect::MissingField { index, field: "value" }),
    };

    Ok(ComboOption::new(label, value))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
