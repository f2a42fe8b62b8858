//! Data models for the combo box.
//!
//! - [`ComboOption`] - One selectable candidate (display label + identity value)
//! - [`Country`] - Record of the built-in country table, convertible to a [`ComboOption`]
//!
//! Both use serde so callers can supply them as JSON.

pub mod country;
pub mod option;

pub use country::{Country, builtin_countries, flag_emoji, format_country};
pub use option::ComboOption;
