//! Expense aggregation engine
//!
//! Pure functions that derive every report view from a snapshot of expense
//! records: the monthly subset, per-category groups and totals, grand totals,
//! chart series, the two-party comparison and flat export rows.
//!
//! Nothing here performs I/O, mutates its input or fails. Malformed amounts
//! count as zero and records without a parseable date never match a month.
//! Totals keep full `f64` precision; rounding happens where values are shown.

mod comparison;
mod grouping;
mod rows;

pub use comparison::{
    categories_union, compare_by_category, pie_distribution, CategoryComparison, ComparisonRow,
    PieSlice,
};
pub use grouping::{group_by_category, CategoryGroup, CategoryOrder};
pub use rows::{to_export_rows, ExportRow};

use crate::models::{ExpenseRecord, Month};

/// Records created in `reference`, or all records when `reference` is `None`
///
/// Relative order is preserved. Records whose `created_at` is missing or
/// unparseable are excluded from any specific month.
pub fn filter_by_month(records: &[ExpenseRecord], reference: Option<Month>) -> Vec<ExpenseRecord> {
    match reference {
        None => records.to_vec(),
        Some(month) => records
            .iter()
            .filter(|r| r.created_date().is_some_and(|d| month.contains(d)))
            .cloned()
            .collect(),
    }
}

/// Sum of coerced amounts; zero for an empty slice
pub fn grand_total(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(ExpenseRecord::amount_value).sum()
}

/// Sum of coerced amounts for one category
pub fn category_total(records: &[ExpenseRecord], category: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.category == category)
        .map(ExpenseRecord::amount_value)
        .sum()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{Amount, ExpenseRecord};

    pub fn record(description: &str, amount: f64, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord::new(description, amount, category).with_created_at(date)
    }

    pub fn undated(description: &str, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord::new(description, amount, category)
    }

    pub fn text_amount(description: &str, amount: &str, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord::new(description, Amount::Text(amount.to_string()), category)
            .with_created_at(date)
    }

    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}
