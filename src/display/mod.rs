//! Display formatting for terminal output
//!
//! Amount formatting shared by reports, CLI listings and the TUI, plus
//! table rendering for expense listings.

use std::fmt::Write;

use chrono::NaiveDate;

pub mod expense;
pub mod report;

pub use expense::format_expense_list;
pub use report::{format_bar, format_percentage, separator, truncate};

/// Format an amount with two decimal places and a currency symbol
///
/// Rounding only happens here; aggregation keeps full precision.
pub fn format_amount(value: f64, symbol: &str) -> String {
    // Avoid "-0.00" for tiny negative float residue
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    if symbol.is_empty() {
        format!("{:.2}", value)
    } else {
        format!("{} {:.2}", symbol, value)
    }
}

/// Format a date with a user-supplied strftime string
///
/// Falls back to ISO 8601 when chrono cannot render `format`.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date, "%d/%m/%Y"), "05/03/2024");
        assert_eq!(format_date(date, "%Q"), "2024-03-05");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1015.5, "R$"), "R$ 1015.50");
        assert_eq!(format_amount(0.1 + 0.2, ""), "0.30");
        assert_eq!(format_amount(-0.001, "R$"), "R$ 0.00");
    }
}
