//! Income vs. spending summary

use crate::aggregate::{category_total, grand_total};
use crate::models::{ExpenseRecord, MonthlyIncome};

/// The dashboard's headline figures for a set of records
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeSummary {
    /// Monthly income, if known
    pub income: Option<f64>,
    /// Sum of every record
    pub spent: f64,
    /// Sum of the investment category, included in `spent`
    pub invested: f64,
}

impl IncomeSummary {
    pub fn compute(
        records: &[ExpenseRecord],
        income: Option<MonthlyIncome>,
        investment_category: &str,
    ) -> Self {
        Self {
            income: income.map(|i| i.value()),
            spent: grand_total(records),
            invested: category_total(records, investment_category),
        }
    }

    /// Income left after spending
    pub fn remaining(&self) -> Option<f64> {
        self.income.map(|income| income - self.spent)
    }

    /// Share of income spent, as a percentage; `None` without a positive income
    pub fn spent_percentage(&self) -> Option<f64> {
        self.income
            .filter(|income| *income > 0.0)
            .map(|income| self.spent / income * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::test_support::*;

    fn records() -> Vec<ExpenseRecord> {
        vec![
            undated("ETF", 500.0, "Investimentos"),
            undated("Mercado", 300.0, "Alimentação"),
            text_amount("Quebrado", "x", "Lazer", "2024-03-01"),
        ]
    }

    #[test]
    fn test_summary_with_income() {
        let summary = IncomeSummary::compute(&records(), Some(MonthlyIncome::new(5000.0)), "Investimentos");

        assert!(approx_eq(summary.spent, 800.0));
        assert!(approx_eq(summary.invested, 500.0));
        assert!(approx_eq(summary.remaining().unwrap(), 4200.0));
        assert!(approx_eq(summary.spent_percentage().unwrap(), 16.0));
    }

    #[test]
    fn test_summary_without_income() {
        let summary = IncomeSummary::compute(&records(), None, "Investimentos");
        assert_eq!(summary.remaining(), None);
        assert_eq!(summary.spent_percentage(), None);

        let zero = IncomeSummary::compute(&[], Some(MonthlyIncome::new(0.0)), "Investimentos");
        assert_eq!(zero.spent, 0.0);
        assert_eq!(zero.spent_percentage(), None);
    }
}
