//! Key handling for the TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Apply an incoming event to the app state
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => {}
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_view(),
        KeyCode::Char('[') | KeyCode::Left | KeyCode::Char('h') => app.prev_month(),
        KeyCode::Char(']') | KeyCode::Right | KeyCode::Char('l') => app.next_month(),
        KeyCode::Char('a') => app.toggle_all_months(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        _ => {}
    }
}
