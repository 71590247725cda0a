//! Layout definitions for the TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level regions
pub struct AppLayout {
    /// Title and period selector
    pub header: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Dashboard: income cards above the category groups
pub struct DashboardLayout {
    pub cards: [Rect; 3],
    pub groups: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(vertical[0]);

        Self {
            cards: [cards[0], cards[1], cards[2]],
            groups: vertical[1],
        }
    }
}

/// Comparison: bar chart above the two distributions
pub struct ComparisonLayout {
    pub chart: Rect,
    pub primary: Rect,
    pub secondary: Rect,
}

impl ComparisonLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            chart: vertical[0],
            primary: bottom[0],
            secondary: bottom[1],
        }
    }
}
