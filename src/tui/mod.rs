//! Terminal user interface
//!
//! A read-only dashboard over the local snapshots built with ratatui: the
//! monthly view of the user's own expenses and the comparison with a guest.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
