//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on exit and from a panic
//! hook, so a crash never leaves the shell unusable.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::error::GastosError;
use crate::storage::Storage;

use super::app::{App, GuestSnapshot};
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| GastosError::Tui(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| GastosError::Tui(format!("Failed to enter alternate screen: {}", e)))?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Load the cached guest snapshot, if a guest was named
fn load_guest(storage: &Storage, settings: &Settings, guest: Option<&str>) -> Result<Option<GuestSnapshot>> {
    let Some(username) = guest else {
        return Ok(None);
    };

    let snapshot = storage.guest(username)?;
    snapshot.load()?;

    Ok(Some(GuestSnapshot {
        label: settings.guest_label_for(None, Some(username)),
        records: snapshot.get_all()?,
    }))
}

/// Run the dashboard against the local snapshots
///
/// Nothing is fetched here; run `gastos sync` first for fresh data.
pub fn run_tui(storage: &Storage, settings: &Settings, guest: Option<&str>) -> Result<()> {
    let own = storage.own.get_all()?;
    let income = storage.income.get()?;
    let guest = load_guest(storage, settings, guest)?;

    let mut app = App::new(settings, own, income, guest);
    if !storage.own.is_synced()? {
        app.set_status("Local snapshot is empty; run 'gastos sync' to fetch expenses");
    }

    let mut terminal = init_terminal()?;
    let events = EventHandler::default();

    let outcome = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| super::views::render(frame, &app))?;
            handle_event(&mut app, events.next()?);
            if app.should_quit {
                return Ok(());
            }
        }
    })();

    restore_terminal()?;
    outcome
}
