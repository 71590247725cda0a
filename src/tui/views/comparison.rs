//! Comparison view: per-category bars for both parties and each side's distribution

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem},
    Frame,
};

use crate::aggregate::PieSlice;
use crate::display::{format_bar, format_percentage, truncate};
use crate::reports::ComparisonReport;
use crate::tui::app::App;
use crate::tui::layout::ComparisonLayout;

const PRIMARY_COLOR: Color = Color::Cyan;
const SECONDARY_COLOR: Color = Color::Magenta;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = app.comparison_report() else {
        super::render_placeholder(
            frame,
            area,
            "Comparison",
            "No guest loaded. Fetch one with 'gastos sync --guest <username>' and start with 'gastos tui --guest <username>'.",
        );
        return;
    };

    if report.comparison.rows.is_empty() {
        super::render_placeholder(
            frame,
            area,
            "Comparison",
            "No expenses on either side for this period.",
        );
        return;
    }

    let layout = ComparisonLayout::new(area);
    render_chart(frame, app, &report, layout.chart);
    render_distribution(
        frame,
        &report.primary_label,
        &report.primary_distribution,
        PRIMARY_COLOR,
        layout.primary,
    );
    render_distribution(
        frame,
        report.secondary_label(),
        &report.secondary_distribution,
        SECONDARY_COLOR,
        layout.secondary,
    );
}

/// Bars carry whole currency units; negative totals draw as empty bars
fn bar_value(total: f64) -> u64 {
    total.max(0.0).round() as u64
}

fn render_chart(frame: &mut Frame, app: &App, report: &ComparisonReport, area: Rect) {
    let groups: Vec<BarGroup> = report
        .comparison
        .rows
        .iter()
        .skip(app.scroll.min(report.comparison.rows.len().saturating_sub(1)))
        .map(|row| {
            BarGroup::default()
                .label(Line::from(truncate(&row.category, 14)))
                .bars(&[
                    Bar::default()
                        .value(bar_value(row.primary_total))
                        .style(Style::default().fg(PRIMARY_COLOR)),
                    Bar::default()
                        .value(bar_value(row.secondary_total))
                        .style(Style::default().fg(SECONDARY_COLOR)),
                ])
        })
        .collect();

    let title = format!(
        " {} ({}) vs {} ({}) ",
        report.primary_label,
        app.settings.currency_symbol,
        report.secondary_label(),
        app.settings.currency_symbol
    );

    let mut chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3);
    for group in groups {
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
}

fn render_distribution(frame: &mut Frame, label: &str, slices: &[PieSlice], color: Color, area: Rect) {
    let total: f64 = slices.iter().map(|s| s.total).sum();
    let block = Block::default()
        .title(format!(" Distribution - {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let items: Vec<ListItem> = if slices.is_empty() || total <= 0.0 {
        vec![ListItem::new("(no spending)").style(Style::default().fg(Color::DarkGray))]
    } else {
        slices
            .iter()
            .map(|slice| {
                ListItem::new(format!(
                    "{:<18} {} {:>6}",
                    truncate(&slice.category, 18),
                    format_bar(slice.total, total, 10),
                    format_percentage(slice.total / total * 100.0)
                ))
                .style(Style::default().fg(color))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
