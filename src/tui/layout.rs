use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Stacked layout: input box, dropdown list, status bar
pub struct AppLayout {
    pub input_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box with border
                Constraint::Min(3),    // Dropdown (at least one row inside borders)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { input_area: chunks[0], list_area: chunks[1], status_area: chunks[2] }
    }

    /// List rows inside the dropdown border
    pub fn list_inner(&self) -> Rect {
        self.list_area.inner(Margin { horizontal: 1, vertical: 1 })
    }

    /// Row offset within the list for a click at `(column, row)`, if it hit a row
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.list_inner();
        if inner.contains(Position { x: column, y: row }) {
            Some((row - inner.y) as usize)
        } else {
            None
        }
    }

    pub fn input_contains(&self, column: u16, row: u16) -> bool {
        self.input_area.contains(Position { x: column, y: row })
    }
}
