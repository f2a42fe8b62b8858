use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::combobox::NavKey;

/// User actions from keyboard and mouse events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Input(char),
    DeleteChar,
    Navigate(NavKey),
    ToggleFocus,
    Click { column: u16, row: u16 },
    None,
}

/// Poll for input events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) => key_to_action(key),
            Event::Mouse(mouse) => mouse_to_action(mouse),
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Dropdown navigation (Emacs style aliases)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::Navigate(NavKey::ArrowUp),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::Navigate(NavKey::ArrowDown),
        (KeyCode::Up, _) => Action::Navigate(NavKey::ArrowUp),
        (KeyCode::Down, _) => Action::Navigate(NavKey::ArrowDown),
        (KeyCode::Enter, _) => Action::Navigate(NavKey::Enter),
        (KeyCode::Esc, _) => Action::Navigate(NavKey::Escape),

        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::ToggleFocus,

        // Query input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Action::Click { column: mouse.column, row: mouse.row }
        }
        _ => Action::None,
    }
}
