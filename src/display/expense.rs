//! Expense listing tables

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_amount, format_date};
use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(record: &ExpenseRecord, symbol: &str, date_format: &str) -> Self {
        let amount = if record.amount.is_numeric() {
            format_amount(record.amount_value(), symbol)
        } else {
            // Keep malformed input visible as received
            format!("{} (invalid)", record.amount)
        };

        Self {
            id: record.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
            date: record
                .created_date()
                .map(|d| format_date(d, date_format))
                .unwrap_or_else(|| "-".into()),
            description: record.description.clone(),
            category: record.category.clone(),
            kind: record.kind.map(|k| k.to_string()).unwrap_or_default(),
            amount,
        }
    }
}

/// Render records as a table, or a short notice when there are none
pub fn format_expense_list(records: &[ExpenseRecord], symbol: &str, date_format: &str) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = records
        .iter()
        .map(|r| ExpenseRow::new(r, symbol, date_format))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
