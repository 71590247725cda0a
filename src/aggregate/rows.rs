//! Flat, origin-tagged rows for tabular export

use serde::Serialize;

use crate::models::{Amount, ExpenseRecord};

/// One exported record, tagged with the party it belongs to
///
/// Field declaration order is the serialization order: `origin` first, then
/// the record's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub origin: String,
    pub id: Option<i64>,
    pub description: String,
    pub amount: Amount,
    pub category: String,
    pub created_at: Option<String>,
}

impl ExportRow {
    fn tagged(origin: &str, record: &ExpenseRecord) -> Self {
        Self {
            origin: origin.to_string(),
            id: record.id,
            description: record.description.clone(),
            amount: record.amount.clone(),
            category: record.category.clone(),
            created_at: record.created_at.clone(),
        }
    }
}

/// Primary rows followed by secondary rows, each tagged with its label
pub fn to_export_rows(
    primary: &[ExpenseRecord],
    primary_label: &str,
    secondary: &[ExpenseRecord],
    secondary_label: &str,
) -> Vec<ExportRow> {
    primary
        .iter()
        .map(|r| ExportRow::tagged(primary_label, r))
        .chain(secondary.iter().map(|r| ExportRow::tagged(secondary_label, r)))
        .collect()
}
