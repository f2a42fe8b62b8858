// TUI module for the interactive picker
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::config::ComboConfig;
use crate::models::ComboOption;

/// Run the interactive picker; returns the last committed option
pub fn run_interactive(options: Vec<ComboOption>, config: ComboConfig) -> Result<Option<ComboOption>> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(options, config);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res.map(|()| app.into_selection())
}
