//! Monthly dashboard report
//!
//! The user's own records for one month (or all time), grouped by category in
//! the configured reference order, with the income summary on top.

use std::io::Write;

use crate::aggregate::{filter_by_month, group_by_category, CategoryGroup, CategoryOrder};
use crate::config::Settings;
use crate::display::{format_amount, format_date, format_percentage, separator, truncate};
use crate::error::GastosResult;
use crate::models::{ExpenseRecord, Month, MonthlyIncome};

use super::summary::IncomeSummary;

/// Dashboard report
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// `None` for the all-time view
    pub month: Option<Month>,
    pub summary: IncomeSummary,
    pub groups: Vec<CategoryGroup>,
    pub record_count: usize,
    currency_symbol: String,
    date_format: String,
}

impl MonthlyReport {
    pub fn generate(
        records: &[ExpenseRecord],
        month: Option<Month>,
        income: Option<MonthlyIncome>,
        settings: &Settings,
    ) -> Self {
        let filtered = filter_by_month(records, month);
        let groups = group_by_category(&filtered, CategoryOrder::Reference(&settings.categories));

        Self {
            month,
            summary: IncomeSummary::compute(&filtered, income, &settings.investment_category),
            groups,
            record_count: filtered.len(),
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self.month {
            Some(month) => format!("Expenses for {}", month.long_name()),
            None => "All expenses".to_string(),
        }
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, &self.currency_symbol)
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        let income = self
            .summary
            .income
            .map(|v| self.amount(v))
            .unwrap_or_else(|| "not set".to_string());
        output.push_str(&format!("{:<24} {:>20}\n", "Monthly income", income));
        output.push_str(&format!("{:<24} {:>20}\n", "Spent", self.amount(self.summary.spent)));
        output.push_str(&format!("{:<24} {:>20}\n", "Saved (investments)", self.amount(self.summary.invested)));
        if let Some(remaining) = self.summary.remaining() {
            output.push_str(&format!("{:<24} {:>20}\n", "Remaining", self.amount(remaining)));
        }
        if let Some(pct) = self.summary.spent_percentage() {
            output.push_str(&format!("{:<24} {:>20}\n", "Share of income spent", format_percentage(pct)));
        }
        output.push('\n');

        if self.groups.is_empty() {
            output.push_str("No expenses recorded for this period.\n");
            return output;
        }

        for group in &self.groups {
            output.push_str(&format!("{} ({})\n", group.category.to_uppercase(), group.items.len()));
            for item in &group.items {
                let date = item
                    .created_date()
                    .map(|d| format_date(d, &self.date_format))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "  {:<36} {:<12} {:>18}\n",
                    truncate(&item.description, 36),
                    date,
                    self.amount(item.amount_value())
                ));
            }
            output.push_str(&format!(
                "  {:<49} {:>18}\n\n",
                "Category total:",
                self.amount(group.category_total)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<51} {:>18}\n",
            format!("TOTAL ({} expenses)", self.record_count),
            self.amount(self.summary.spent)
        ));

        output
    }

    /// One line per expense plus a closing total line
    pub fn export_csv<W: Write>(&self, writer: W) -> GastosResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let period = self.month.map(|m| m.to_string()).unwrap_or_else(|| "all".to_string());

        csv.write_record(["Month", "Category", "Description", "Kind", "Created At", "Amount"])?;
        for group in &self.groups {
            for item in &group.items {
                let kind = item.kind.map(|k| k.to_string()).unwrap_or_default();
                let amount = format!("{:.2}", item.amount_value());
                csv.write_record([
                    period.as_str(),
                    group.category.as_str(),
                    item.description.as_str(),
                    kind.as_str(),
                    item.created_at.as_deref().unwrap_or(""),
                    amount.as_str(),
                ])?;
            }
        }
        let total = format!("{:.2}", self.summary.spent);
        csv.write_record([period.as_str(), "TOTAL", "", "", "", total.as_str()])?;

        csv.flush()?;
        Ok(())
    }
}
