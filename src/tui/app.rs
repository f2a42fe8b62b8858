//! Terminal host for the combo box.
//!
//! The `App` plays the role of the page around the widget: it feeds raw
//! keystrokes and clicks into [`ComboBox`], drives its deferred tasks from
//! the event loop, keeps the highlighted row scrolled into view and renders
//! from [`ComboBox::view`].
//!
//! Keys the widget leaves unconsumed get the host's default action: Enter
//! submits (exits with the last committed option), Escape exits.
//!
//! Focus is simulated with Tab: moving focus away from the input blurs the
//! widget, clicking the input or typing returns it.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::info;

use super::events::{Action, poll_event};
use super::layout::AppLayout;
use super::rendering::{RenderState, render_ui};
use crate::combobox::{ComboBox, KeyOutcome, ListViewport, NavKey};
use crate::config::ComboConfig;
use crate::models::ComboOption;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Longest sleep between loop iterations
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    StatusBar,
}

pub struct App {
    combo: ComboBox,
    focus: Focus,
    viewport: ListViewport,
    layout: Option<AppLayout>,
    selection: Option<ComboOption>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(options: Vec<ComboOption>, config: ComboConfig) -> Self {
        Self {
            combo: ComboBox::new(options, config),
            focus: Focus::Input,
            viewport: ListViewport::new(1, 0),
            layout: None,
            selection: None,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn combo(&self) -> &ComboBox {
        &self.combo
    }

    /// Last committed option
    pub fn selection(&self) -> Option<&ComboOption> {
        self.selection.as_ref()
    }

    pub fn into_selection(self) -> Option<ComboOption> {
        self.selection
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self, now: Instant) {
        let expired = self.status_message.as_ref().is_some_and(|msg| now >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.check_and_clear_expired_status(now);

            if self.combo.tick(now).changed() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= MAX_POLL_INTERVAL {
                terminal.draw(|f| {
                    let layout = AppLayout::new(f.area());
                    self.sync_viewport(layout.list_inner().height as usize);
                    let state = RenderState {
                        view: self.combo.view(),
                        viewport: self.viewport,
                        focus: self.focus,
                        total_count: self.combo.options().len(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                    self.layout = Some(layout);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            // Wake up in time for the next debounce or blur deadline
            let timeout = self
                .combo
                .next_deadline(Instant::now())
                .map_or(MAX_POLL_INTERVAL, |d| d.min(MAX_POLL_INTERVAL));
            let action = poll_event(timeout)?;
            self.handle_action(action, Instant::now());
        }

        self.combo.dispose();
        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Input(c) => {
                self.focus_input();
                if self.combo.push_char(c, now) {
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                self.focus_input();
                if self.combo.pop_char(now) {
                    self.needs_redraw = true;
                }
            }
            Action::Navigate(key) => self.navigate(key, now),
            Action::ToggleFocus => match self.focus {
                Focus::Input => {
                    self.focus = Focus::StatusBar;
                    self.combo.blur(now);
                    self.needs_redraw = true;
                }
                Focus::StatusBar => self.focus_input(),
            },
            Action::Click { column, row } => self.click(column, row, now),
            Action::None => {}
        }
    }

    fn navigate(&mut self, key: NavKey, now: Instant) {
        if self.focus != Focus::Input {
            return;
        }

        match self.combo.handle_key(key, now) {
            KeyOutcome::Committed(option) => self.record_selection(option),
            KeyOutcome::Consumed | KeyOutcome::Dismissed => self.needs_redraw = true,
            // Default actions of the host
            KeyOutcome::Ignored => match key {
                NavKey::Enter | NavKey::Escape => self.should_quit = true,
                NavKey::ArrowDown | NavKey::ArrowUp => {}
            },
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        let Some(layout) = &self.layout else {
            return;
        };

        if let Some(row_offset) = layout.list_row_at(column, row) {
            let index = self.viewport.first_visible() + row_offset;
            if let Some(option) = self.combo.select_index(index, now) {
                self.record_selection(option);
                self.focus_input();
            }
        } else if layout.input_contains(column, row) {
            self.focus_input();
        } else if self.focus == Focus::Input {
            self.focus = Focus::StatusBar;
            self.combo.blur(now);
            self.needs_redraw = true;
        }
    }

    fn focus_input(&mut self) {
        if self.focus != Focus::Input {
            self.focus = Focus::Input;
            self.needs_redraw = true;
        }
        self.combo.focus();
    }

    fn record_selection(&mut self, option: ComboOption) {
        info!(value = %option.value, "Selection committed");
        self.set_status(
            format!("✓ Selected {}", option.label),
            MessageType::Success,
            STATUS_SUCCESS_DURATION_MS,
        );
        self.selection = Some(option);
        self.viewport.reset();
    }

    /// Keep the highlighted row inside a list viewport of `height` rows
    fn sync_viewport(&mut self, height: usize) {
        self.viewport.set_viewport_height(height);
        self.viewport.clamp(self.combo.filtered_options().len());
        if self.combo.is_open()
            && let Some(idx) = self.combo.highlighted_index()
        {
            self.viewport.reveal(idx);
        }
    }
}
