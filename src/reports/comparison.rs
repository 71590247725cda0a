//! Side-by-side comparison with another user

use crate::aggregate::{
    categories_union, compare_by_category, filter_by_month, pie_distribution, to_export_rows,
    CategoryComparison, ExportRow, PieSlice,
};
use crate::display::{format_amount, format_bar, format_percentage, separator, truncate};
use crate::models::{ExpenseRecord, Month};

const BAR_WIDTH: usize = 20;

/// Comparison of the user's records with a guest's for the same period
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub month: Option<Month>,
    pub primary_label: String,
    pub comparison: CategoryComparison,
    /// Distribution of the user's spending over the shared categories
    pub primary_distribution: Vec<PieSlice>,
    pub secondary_distribution: Vec<PieSlice>,
    primary: Vec<ExpenseRecord>,
    secondary: Vec<ExpenseRecord>,
    currency_symbol: String,
}

impl ComparisonReport {
    /// Filter both sides by `month` independently, then compare
    pub fn generate(
        primary: &[ExpenseRecord],
        secondary: &[ExpenseRecord],
        month: Option<Month>,
        primary_label: &str,
        secondary_label: &str,
        currency_symbol: &str,
    ) -> Self {
        let primary = filter_by_month(primary, month);
        let secondary = filter_by_month(secondary, month);
        let categories = categories_union(&primary, &secondary);

        Self {
            month,
            primary_label: primary_label.to_string(),
            comparison: compare_by_category(&primary, &secondary, secondary_label),
            primary_distribution: pie_distribution(&primary, &categories),
            secondary_distribution: pie_distribution(&secondary, &categories),
            primary,
            secondary,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn secondary_label(&self) -> &str {
        &self.comparison.secondary_label
    }

    /// Flat rows of both filtered sides for CSV export
    pub fn export_rows(&self) -> Vec<ExportRow> {
        to_export_rows(
            &self.primary,
            &self.primary_label,
            &self.secondary,
            self.secondary_label(),
        )
    }

    fn amount(&self, value: f64) -> String {
        format_amount(value, &self.currency_symbol)
    }

    fn format_distribution(&self, label: &str, slices: &[PieSlice], output: &mut String) {
        output.push_str(&format!("\nDistribution - {}\n", label));
        let total: f64 = slices.iter().map(|s| s.total).sum();
        if slices.is_empty() || total <= 0.0 {
            output.push_str("  (no spending)\n");
            return;
        }
        for slice in slices {
            output.push_str(&format!(
                "  {:<24} {} {:>6}\n",
                truncate(&slice.category, 24),
                format_bar(slice.total, total, BAR_WIDTH),
                format_percentage(slice.total / total * 100.0)
            ));
        }
    }

    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        let period = self
            .month
            .map(|m| m.long_name())
            .unwrap_or_else(|| "all time".to_string());
        let secondary = self.secondary_label();

        output.push_str(&format!(
            "Comparison: {} vs {} ({})\n",
            self.primary_label, secondary, period
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.comparison.rows.is_empty() {
            output.push_str("No expenses on either side for this period.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>20} {:>20}\n",
            "Category",
            truncate(&self.primary_label, 20),
            truncate(secondary, 20)
        ));
        output.push_str(&separator(72));
        output.push('\n');

        for row in &self.comparison.rows {
            output.push_str(&format!(
                "{:<28} {:>20} {:>20}\n",
                truncate(&row.category, 28),
                self.amount(row.primary_total),
                self.amount(row.secondary_total)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>20} {:>20}\n",
            "TOTAL",
            self.amount(self.comparison.primary_total()),
            self.amount(self.comparison.secondary_total())
        ));

        self.format_distribution(&self.primary_label, &self.primary_distribution, &mut output);
        self.format_distribution(secondary, &self.secondary_distribution, &mut output);

        output
    }
}
