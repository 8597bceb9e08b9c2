//! Terminal UI for the autocomplete widget
//!
//! Owns the terminal for the lifetime of the app: raw mode, alternate
//! screen and mouse capture on entry, full restore on exit.

pub mod app;
pub mod input;
pub mod panel;
pub mod ui;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use std::io;
use typeahead::{AppConfig, Result};

/// Run the autocomplete UI until the user quits.
pub fn run(config: AppConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(config);
    let result = app.run(&mut terminal);

    // Restore the terminal even when the event loop errored
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
