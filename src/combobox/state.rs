//! Selection state machine.
//!
//! Owns the dropdown visibility, the filtered candidates, the highlight cursor
//! and the two deferred tasks (debounced re-highlight, blur grace close).
//!
//! # Timing
//!
//! Nothing here runs on its own. Every operation that may start a timer takes
//! the current [`Instant`], and the host drives pending work with
//! [`ComboBox::tick`]. [`ComboBox::next_deadline`] tells the host how long it
//! may sleep before the next tick is needed.
//!
//! # Click-before-blur
//!
//! A pointer click on an option usually arrives right after the input lost
//! focus. Closing the list on blur would remove the clicked option before its
//! selection is processed, so blur only schedules the close after
//! [`ComboConfig::blur_grace`]. A commit inside that window cancels the
//! pending close.

use std::time::{Duration, Instant};

use tracing::debug;

use super::timer::Deferred;
use crate::config::ComboConfig;
use crate::filters::filter_options;
use crate::models::ComboOption;

/// Keys the state machine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Result of feeding a key to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not consumed; the host should run the key's default action
    Ignored,
    /// Consumed; default action suppressed
    Consumed,
    /// Escape closed the dropdown; default action not suppressed
    Dismissed,
    /// An option was committed; default action suppressed
    Committed(ComboOption),
}

impl KeyOutcome {
    pub fn default_prevented(&self) -> bool {
        matches!(self, KeyOutcome::Consumed | KeyOutcome::Committed(_))
    }

    pub fn into_selection(self) -> Option<ComboOption> {
        match self {
            KeyOutcome::Committed(option) => Some(option),
            _ => None,
        }
    }
}

/// Work done by one [`ComboBox::tick`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub rehighlighted: bool,
    pub closed: bool,
}

impl Tick {
    pub fn changed(&self) -> bool {
        self.rehighlighted || self.closed
    }
}

/// Observable state of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenNoHighlight,
    OpenHighlighted(usize),
}

#[derive(Debug, Clone)]
pub struct ComboBox {
    options: Vec<ComboOption>,
    query: String,
    filtered: Vec<ComboOption>,
    open: bool,
    highlighted: Option<usize>,
    rehighlight: Deferred,
    blur_close: Deferred,
    config: ComboConfig,
    disposed: bool,
}

impl ComboBox {
    pub fn new(options: Vec<ComboOption>, config: ComboConfig) -> Self {
        let filtered = filter_options(&options, "");
        Self {
            options,
            query: String::new(),
            filtered,
            open: false,
            highlighted: None,
            rehighlight: Deferred::new(config.debounce),
            blur_close: Deferred::new(config.blur_grace),
            config,
            disposed: false,
        }
    }

    pub fn with_defaults(options: Vec<ComboOption>) -> Self {
        Self::new(options, ComboConfig::default())
    }

    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered_options(&self) -> &[ComboOption] {
        &self.filtered
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlight as a signed position, `-1` meaning no highlight
    pub fn highlighted_position(&self) -> isize {
        self.highlighted.map_or(-1, |idx| idx as isize)
    }

    pub fn highlighted_option(&self) -> Option<&ComboOption> {
        self.highlighted.and_then(|idx| self.filtered.get(idx))
    }

    pub fn phase(&self) -> Phase {
        match (self.open, self.highlighted) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::OpenNoHighlight,
            (true, Some(idx)) => Phase::OpenHighlighted(idx),
        }
    }

    pub fn config(&self) -> &ComboConfig {
        &self.config
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn has_pending_rehighlight(&self) -> bool {
        self.rehighlight.is_pending()
    }

    pub fn has_pending_close(&self) -> bool {
        self.blur_close.is_pending()
    }

    /// Replace the candidate set. The filtered set follows immediately.
    pub fn set_options(&mut self, options: Vec<ComboOption>) {
        if self.disposed {
            return;
        }
        self.options = options;
        self.refilter();
    }

    /// Apply new query text.
    ///
    /// Visibility and the filtered set update now; the highlight reset is
    /// debounced and supersedes any reset still pending.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        if self.disposed {
            return;
        }
        self.query = text.into();
        self.open = !self.query.is_empty();
        self.refilter();
        self.rehighlight.schedule(now);
        debug!(query = %self.query, matches = self.filtered.len(), open = self.open, "Query changed");
    }

    /// Append a typed character. Returns false when the query is at its length limit.
    pub fn push_char(&mut self, c: char, now: Instant) -> bool {
        if self.disposed || self.query.chars().count() >= self.config.max_query_len {
            return false;
        }
        let mut text = self.query.clone();
        text.push(c);
        self.set_query(text, now);
        true
    }

    /// Remove the last character. Returns false when the query was already empty.
    pub fn pop_char(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let mut text = self.query.clone();
        if text.pop().is_none() {
            return false;
        }
        self.set_query(text, now);
        true
    }

    pub fn handle_key(&mut self, key: NavKey, now: Instant) -> KeyOutcome {
        if self.disposed || !self.open {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::ArrowDown => {
                let len = self.filtered.len();
                if len > 0 {
                    self.highlighted = match self.highlighted {
                        Some(idx) if idx + 1 < len => Some(idx + 1),
                        _ => Some(0),
                    };
                }
                KeyOutcome::Consumed
            }
            NavKey::ArrowUp => {
                let len = self.filtered.len();
                if len > 0 {
                    self.highlighted = match self.highlighted {
                        Some(idx) if idx > 0 => Some(idx - 1),
                        _ => Some(len - 1),
                    };
                }
                KeyOutcome::Consumed
            }
            NavKey::Enter => {
                let target = match self.highlighted {
                    Some(idx) => Some(idx),
                    None if !self.filtered.is_empty() => Some(0),
                    None => None,
                };
                match target.and_then(|idx| self.commit(idx, now)) {
                    Some(option) => KeyOutcome::Committed(option),
                    None => KeyOutcome::Consumed,
                }
            }
            NavKey::Escape => {
                self.open = false;
                debug!("Dropdown dismissed");
                KeyOutcome::Dismissed
            }
        }
    }

    /// Pointer selection of the rendered option at `index`
    pub fn select_index(&mut self, index: usize, now: Instant) -> Option<ComboOption> {
        if self.disposed || !self.open {
            return None;
        }
        self.commit(index, now)
    }

    /// Pointer selection by identity value
    pub fn select_value(&mut self, value: &str, now: Instant) -> Option<ComboOption> {
        let index = self.filtered.iter().position(|option| option.value == value)?;
        self.select_index(index, now)
    }

    /// Input regained focus: a pending blur close no longer applies.
    pub fn focus(&mut self) {
        if self.blur_close.cancel() {
            debug!("Blur close cancelled by focus");
        }
    }

    /// Input lost focus: close after the grace delay unless a click commits first.
    pub fn blur(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.blur_close.schedule(now);
    }

    /// Run deferred work that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let mut tick = Tick::default();
        if self.disposed {
            return tick;
        }

        if self.rehighlight.fire_if_due(now) {
            // Evaluated against the query current at firing time
            self.highlighted = if !self.query.is_empty() && !self.filtered.is_empty() {
                Some(0)
            } else {
                None
            };
            tick.rehighlighted = true;
            debug!(highlighted = self.highlighted_position(), "Highlight re-evaluated");
        }

        if self.blur_close.fire_if_due(now) && self.open {
            self.open = false;
            tick.closed = true;
            debug!("Dropdown closed after blur");
        }

        tick
    }

    /// Time until the earliest pending deferred task is due
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match (self.rehighlight.remaining(now), self.blur_close.remaining(now)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Tear down: cancel pending tasks and ignore every later event.
    pub fn dispose(&mut self) {
        self.rehighlight.cancel();
        self.blur_close.cancel();
        self.disposed = true;
    }

    fn commit(&mut self, index: usize, now: Instant) -> Option<ComboOption> {
        let option = self.filtered.get(index)?.clone();

        self.highlighted = Some(index);
        self.query = option.label.clone();
        self.open = false;
        self.blur_close.cancel();
        self.refilter();
        if let Some(position) = self.filtered.iter().position(|o| o.value == option.value) {
            self.highlighted = Some(position);
        }
        self.rehighlight.schedule(now);

        debug!(value = %option.value, label = %option.label, "Option committed");
        Some(option)
    }

    fn refilter(&mut self) {
        self.filtered = filter_options(&self.options, &self.query);
        self.highlighted = match self.highlighted {
            Some(_) if self.filtered.is_empty() => None,
            Some(idx) if idx >= self.filtered.len() => Some(self.filtered.len() - 1),
            other => other,
        };
    }
}
