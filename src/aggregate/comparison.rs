//! Two-party comparison and chart series

use std::collections::{HashMap, HashSet};

use crate::config::DEFAULT_GUEST_LABEL;
use crate::models::ExpenseRecord;

/// Per-category totals of both parties
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub category: String,
    pub primary_total: f64,
    pub secondary_total: f64,
}

/// Result of comparing two record sets category by category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryComparison {
    /// Label of the secondary party after applying the default
    pub secondary_label: String,
    /// One row per category present on either side
    pub rows: Vec<ComparisonRow>,
}

impl CategoryComparison {
    /// Sum of the primary column
    pub fn primary_total(&self) -> f64 {
        self.rows.iter().map(|r| r.primary_total).sum()
    }

    /// Sum of the secondary column
    pub fn secondary_total(&self) -> f64 {
        self.rows.iter().map(|r| r.secondary_total).sum()
    }
}

/// One slice of a distribution chart
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub total: f64,
}

/// Distinct categories across both slices, first seen in `a` then `b`
pub fn categories_union(a: &[ExpenseRecord], b: &[ExpenseRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    a.iter()
        .chain(b)
        .filter(|r| seen.insert(r.category.as_str()))
        .map(|r| r.category.clone())
        .collect()
}

fn totals_by_category(records: &[ExpenseRecord]) -> HashMap<&str, f64> {
    let mut totals = HashMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0.0) += record.amount_value();
    }
    totals
}

/// Compare two independently filtered record sets
///
/// An empty (or blank) `secondary_label` falls back to `"Guest"`.
pub fn compare_by_category(
    primary: &[ExpenseRecord],
    secondary: &[ExpenseRecord],
    secondary_label: &str,
) -> CategoryComparison {
    let primary_totals = totals_by_category(primary);
    let secondary_totals = totals_by_category(secondary);

    let rows = categories_union(primary, secondary)
        .into_iter()
        .map(|category| ComparisonRow {
            primary_total: primary_totals.get(category.as_str()).copied().unwrap_or(0.0),
            secondary_total: secondary_totals.get(category.as_str()).copied().unwrap_or(0.0),
            category,
        })
        .collect();

    let secondary_label = if secondary_label.trim().is_empty() {
        DEFAULT_GUEST_LABEL.to_string()
    } else {
        secondary_label.to_string()
    };

    CategoryComparison {
        secondary_label,
        rows,
    }
}

/// Totals of `records` for each of `all_categories`, leaving out zero slices
pub fn pie_distribution(records: &[ExpenseRecord], all_categories: &[String]) -> Vec<PieSlice> {
    let totals = totals_by_category(records);
    let mut seen = HashSet::new();

    all_categories
        .iter()
        .filter(|c| seen.insert(c.as_str()))
        .filter_map(|category| {
            let total = totals.get(category.as_str()).copied().unwrap_or(0.0);
            (total != 0.0).then(|| PieSlice {
                category: category.clone(),
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_bob_example() {
        let primary = vec![undated("Lunch", 50.0, "Food")];
        let comparison = compare_by_category(&primary, &[], "Bob");

        assert_eq!(comparison.secondary_label, "Bob");
        assert_eq!(
            comparison.rows,
            vec![ComparisonRow {
                category: "Food".into(),
                primary_total: 50.0,
                secondary_total: 0.0,
            }]
        );
    }

    #[test]
    fn test_empty_label_falls_back_to_guest() {
        assert_eq!(compare_by_category(&[], &[], "").secondary_label, "Guest");
        assert_eq!(compare_by_category(&[], &[], "   ").secondary_label, "Guest");
        assert!(compare_by_category(&[], &[], "").rows.is_empty());
    }

    #[test]
    fn test_every_category_appears_exactly_once() {
        let primary = vec![
            undated("a", 1.0, "Food"),
            undated("b", 2.0, "Transport"),
            undated("c", 3.0, "Food"),
        ];
        let secondary = vec![
            undated("d", 4.0, "Leisure"),
            undated("e", 5.0, "Food"),
            undated("f", 6.0, "Gifts"),
        ];

        let comparison = compare_by_category(&primary, &secondary, "X");
        let cats: Vec<_> = comparison.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(cats, vec!["Food", "Transport", "Leisure", "Gifts"]);

        let food = &comparison.rows[0];
        assert!(approx_eq(food.primary_total, 4.0));
        assert!(approx_eq(food.secondary_total, 5.0));

        let gifts = &comparison.rows[3];
        assert_eq!(gifts.primary_total, 0.0);
        assert!(approx_eq(gifts.secondary_total, 6.0));

        assert!(approx_eq(comparison.primary_total(), 6.0));
        assert!(approx_eq(comparison.secondary_total(), 15.0));
    }

    #[test]
    fn test_categories_union_dedupes() {
        let a = vec![undated("a", 1.0, "Food"), undated("b", 1.0, "Food")];
        let b = vec![undated("c", 1.0, "Lazer"), undated("d", 1.0, "Food")];
        assert_eq!(categories_union(&a, &b), vec!["Food", "Lazer"]);
    }

    #[test]
    fn test_pie_never_contains_zero_slices() {
        let records = vec![
            undated("a", 10.0, "Food"),
            text_amount("b", "oops", "Transport", "2024-03-01"),
            undated("c", 0.0, "Leisure"),
        ];
        let all: Vec<String> = ["Food", "Transport", "Leisure", "Gifts"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let pie = pie_distribution(&records, &all);
        assert_eq!(
            pie,
            vec![PieSlice {
                category: "Food".into(),
                total: 10.0,
            }]
        );
        assert!(pie.iter().all(|s| s.total != 0.0));
    }

    #[test]
    fn test_pie_follows_category_order_and_dedupes() {
        let records = vec![undated("a", 1.0, "Food"), undated("b", 2.0, "Lazer")];
        let all: Vec<String> = ["Lazer", "Food", "Lazer"].iter().map(|s| s.to_string()).collect();

        let pie = pie_distribution(&records, &all);
        let cats: Vec<_> = pie.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(cats, vec!["Lazer", "Food"]);
    }

    #[test]
    fn test_pie_ignores_records_outside_category_list() {
        let records = vec![undated("a", 1.0, "Food"), undated("b", 2.0, "Other")];
        let pie = pie_distribution(&records, &["Food".to_string()]);
        assert_eq!(pie.len(), 1);
    }
}
