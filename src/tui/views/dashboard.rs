//! Dashboard view: income cards and the expenses of the period grouped by category

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::{format_amount, format_date, format_percentage, truncate};
use crate::reports::MonthlyReport;
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = app.monthly_report();
    let layout = DashboardLayout::new(area);
    let symbol = app.settings.currency_symbol.as_str();

    let income = report
        .summary
        .income
        .map(|v| format_amount(v, symbol))
        .unwrap_or_else(|| "not set".to_string());
    render_card(frame, layout.cards[0], "Income", income, None, Color::Green);

    let spent_note = report
        .summary
        .spent_percentage()
        .map(|pct| format!("{} of income", format_percentage(pct)));
    render_card(
        frame,
        layout.cards[1],
        "Spent",
        format_amount(report.summary.spent, symbol),
        spent_note,
        Color::Red,
    );

    let (remaining, remaining_color) = match report.summary.remaining() {
        Some(v) if v < 0.0 => (format_amount(v, symbol), Color::Red),
        Some(v) => (format_amount(v, symbol), Color::Cyan),
        None => ("-".to_string(), Color::DarkGray),
    };
    render_card(
        frame,
        layout.cards[2],
        "Remaining",
        remaining,
        Some(format!("invested {}", format_amount(report.summary.invested, symbol))),
        remaining_color,
    );

    render_groups(frame, app, &report, layout.groups);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    note: Option<String>,
    color: Color,
) {
    let mut lines = vec![Line::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(note) = note {
        lines.push(Line::styled(note, Style::default().fg(Color::DarkGray)));
    }

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(card, area);
}

/// Category header rows followed by their items, scrolled by `app.scroll`
fn render_groups(frame: &mut Frame, app: &App, report: &MonthlyReport, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ({}) ", report.title(), report.record_count))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if report.groups.is_empty() {
        let empty = Paragraph::new("No expenses recorded for this period.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let date_format = app.settings.date_format.as_str();
    let category_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut rows = Vec::new();
    for group in &report.groups {
        rows.push(
            Row::new(vec![
                Cell::from(group.category.clone()),
                Cell::from(format!("{} items", group.items.len())),
                Cell::from(format_amount(group.category_total, symbol)),
            ])
            .style(category_style),
        );
        for item in &group.items {
            let date = item
                .created_date()
                .map(|d| format_date(d, date_format))
                .unwrap_or_default();
            rows.push(Row::new(vec![
                Cell::from(format!("  {}", truncate(&item.description, 40))),
                Cell::from(date),
                Cell::from(format_amount(item.amount_value(), symbol)),
            ]));
        }
    }

    // Keep at least one row on screen
    let skip = app.scroll.min(rows.len().saturating_sub(1));
    let rows: Vec<Row> = rows.into_iter().skip(skip).collect();

    let header = Row::new(vec!["Description", "Date", "Amount"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
