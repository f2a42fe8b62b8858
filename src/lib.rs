//! Omnibox - address-bar style autocomplete for the terminal
//!
//! This library implements a combo box: an input that filters a candidate list
//! as the user types and lets them pick a result with the keyboard or mouse.
//! It provides:
//!
//! - Case-insensitive substring filtering of options ([`filter_options`])
//! - The selection state machine with debounced re-highlighting and a
//!   blur grace delay ([`ComboBox`])
//! - Scroll-into-view arithmetic for the dropdown ([`scroll_into_view`])
//! - Fail-soft loading of option records from JSON
//! - A ratatui front end hosting the widget
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use omnibox::{ComboBox, ComboOption, KeyOutcome, NavKey};
//!
//! let mut combo = ComboBox::with_defaults(vec![
//!     ComboOption::new("United States", "US"),
//!     ComboOption::new("Canada", "CA"),
//! ]);
//!
//! let now = Instant::now();
//! combo.set_query("can", now);
//! assert!(combo.is_open());
//!
//! combo.tick(now + Duration::from_millis(300));
//! assert_eq!(combo.highlighted_index(), Some(0));
//!
//! let outcome = combo.handle_key(NavKey::Enter, now);
//! assert_eq!(outcome, KeyOutcome::Committed(ComboOption::new("Canada", "CA")));
//! assert_eq!(combo.query(), "Canada");
//! ```

pub mod cli;
pub mod combobox;
pub mod config;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use combobox::{ComboBox, KeyOutcome, ListViewport, NavKey, Phase, Tick, scroll_into_view};
pub use config::ComboConfig;
pub use filters::filter_options;
pub use models::{ComboOption, Country};
pub use parsers::parse_options_file;
