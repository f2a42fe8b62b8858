//! Combo box core: selection state machine, deferred tasks, scrolling and
//! the accessible view.
//!
//! Control flow per keystroke:
//!
//! 1. Host calls [`ComboBox::set_query`] (or `push_char`/`pop_char`)
//! 2. Visibility and the filtered set update immediately
//! 3. The highlight reset runs once the debounce window elapses, on a later
//!    [`ComboBox::tick`]
//! 4. Host renders from [`ComboBox::view`] and keeps the highlighted row in
//!    view with [`ListViewport`]

pub mod scroll;
pub mod state;
pub mod timer;
pub mod view;

pub use scroll::{ListViewport, scroll_into_view};
pub use state::{ComboBox, KeyOutcome, NavKey, Phase, Tick};
pub use timer::Deferred;
pub use view::{ComboView, ItemView, ListView, NO_OPTIONS_TEXT};
