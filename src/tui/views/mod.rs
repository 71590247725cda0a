//! TUI views: the monthly dashboard and the two-party comparison

pub mod comparison;
pub mod dashboard;
pub mod status_bar;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_view {
        ActiveView::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveView::Comparison => comparison::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tabs: Vec<Span> = [ActiveView::Dashboard, ActiveView::Comparison]
        .iter()
        .flat_map(|view| {
            let style = if *view == app.active_view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(view.title(), style), Span::raw("  ")]
        })
        .collect();

    let mut spans = tabs;
    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        format!("◀ {} ▶", app.period_label()),
        Style::default().fg(Color::Yellow),
    ));

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" gastos ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

    frame.render_widget(header, area);
}

/// Bordered block with a centered message, for views without data
pub(crate) fn render_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}
