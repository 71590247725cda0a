//! Per-category grouping

use std::collections::HashMap;

use crate::models::ExpenseRecord;

/// How groups are ordered in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder<'a> {
    /// First-seen order in the data
    Occurrence,
    /// The caller's category list; categories outside it follow in first-seen order
    Reference(&'a [String]),
}

/// All records of one category with their total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// Category label
    pub category: String,
    /// Member records, in input order
    pub items: Vec<ExpenseRecord>,
    /// Sum of coerced amounts over `items`
    pub category_total: f64,
}

impl CategoryGroup {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            items: Vec::new(),
            category_total: 0.0,
        }
    }

    fn push(&mut self, record: &ExpenseRecord) {
        self.category_total += record.amount_value();
        self.items.push(record.clone());
    }
}

/// Group records by category
///
/// Only categories with at least one record are emitted, so a reference list
/// never produces empty groups.
pub fn group_by_category(records: &[ExpenseRecord], order: CategoryOrder<'_>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.category.as_str()).or_insert_with(|| {
            groups.push(CategoryGroup::new(&record.category));
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    match order {
        CategoryOrder::Occurrence => groups,
        CategoryOrder::Reference(reference) => {
            let mut slots: Vec<Option<CategoryGroup>> = groups.into_iter().map(Some).collect();
            let mut ordered = Vec::with_capacity(slots.len());

            for category in reference {
                if let Some(&slot) = index.get(category.as_str()) {
                    // `take` also skips duplicates in the reference list
                    if let Some(group) = slots[slot].take() {
                        ordered.push(group);
                    }
                }
            }

            ordered.extend(slots.into_iter().flatten());
            ordered
        }
    }
}
