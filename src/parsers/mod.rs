//! Loading caller-supplied option records
//!
//! # Error Handling Strategy
//!
//! - **Whole-file failures** (unreadable, oversized, invalid JSON, wrong top-level
//!   shape) are returned as [`OptionsError`].
//! - **Individual record defects** never fail the load. The record is logged with
//!   `tracing::warn!`, reported in [`ParsedOptions::defects`] and replaced by
//!   [`ComboOption::placeholder`](crate::models::ComboOption::placeholder), so one
//!   bad record cannot take the widget down.
//! - A `null` document is treated as an empty candidate list.

pub mod options;

pub use options::{
    OptionsError, ParsedOptions, RecordDefect, option_from_record, parse_options_file,
    parse_options_str,
};
