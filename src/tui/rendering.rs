use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::combobox::{ComboView, ListView, ListViewport, NO_OPTIONS_TEXT};
use crate::utils::sanitize_label;

const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(63, 81, 181);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const STATUS_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the renderer needs for one frame
pub struct RenderState<'a> {
    pub view: ComboView<'a>,
    pub viewport: ListViewport,
    pub focus: Focus,
    pub total_count: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_input(frame, layout.input_area, state);
    render_dropdown(frame, layout.list_area, &state.view, &state.viewport);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Input;
    let border_color = if focused { ACCENT } else { MUTED };

    let input = Paragraph::new(sanitize_label(state.view.query)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Search "),
    );
    frame.render_widget(input, area);

    if focused {
        let query_width = state.view.query.chars().count() as u16;
        let x = (area.x + 1 + query_width).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_dropdown(frame: &mut Frame, area: Rect, view: &ComboView, viewport: &ListViewport) {
    match &view.list {
        ListView::Hidden => {}
        ListView::NoOptions => {
            let paragraph = Paragraph::new(NO_OPTIONS_TEXT)
                .style(Style::default().fg(MUTED))
                .block(dropdown_block(" Options "));
            frame.render_widget(paragraph, area);
        }
        ListView::Items(items) => {
            let range = viewport.visible_range(items.len());
            let rows: Vec<ListItem> = items[range]
                .iter()
                .map(|item| {
                    let label = if item.is_placeholder() {
                        String::new()
                    } else {
                        sanitize_label(&item.option.label)
                    };

                    let style = if item.selected {
                        Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(MUTED)
                    };

                    ListItem::new(label).style(style)
                })
                .collect();

            let title = format!(" Options ({}) ", items.len());
            frame.render_widget(List::new(rows).block(dropdown_block(&title)), area);
        }
    }
}

fn dropdown_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(title)
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let base = Style::default().fg(BRIGHT).bg(STATUS_BG);

    let line = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129),
            MessageType::Error => Color::Rgb(239, 68, 68),
        };
        Line::from(Span::styled(format!(" {} ", message.text), base.fg(color)))
    } else {
        let view = &state.view;
        let mut parts = vec![];

        parts.push(if view.expanded { "[OPEN]".to_string() } else { "[CLOSED]".to_string() });

        let matches = view.items().len();
        if view.expanded {
            parts.push(format!("{}/{} matches", matches, state.total_count));
            if let Some(position) = view.items().iter().position(|item| item.selected) {
                parts.push(format!("option {}/{}", position + 1, matches));
            }
            parts.push("↑↓: move | Enter: select | Esc: close".to_string());
        } else {
            parts.push(format!("{} options", state.total_count));
            parts.push("Enter: submit | Esc: quit".to_string());
        }

        if state.focus == Focus::StatusBar {
            parts.push("Tab: back to input".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        Line::from(Span::styled(format!(" {} ", parts.join(" | ")), base))
    };

    frame.render_widget(Paragraph::new(line).style(base), area);
}
