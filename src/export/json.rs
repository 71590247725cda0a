//! JSON export of the local snapshot

use std::collections::BTreeSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aggregate::grand_total;
use crate::error::{GastosError, GastosResult};
use crate::models::ExpenseRecord;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything cached locally for the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    /// When the snapshot was last fetched from the store
    pub fetched_at: Option<DateTime<Utc>>,
    pub expenses: Vec<ExpenseRecord>,
    pub monthly_income: Option<f64>,
    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    /// Sum of all coerced amounts
    pub total: f64,
    /// Distinct categories, sorted
    pub categories: Vec<String>,
    pub earliest_expense: Option<String>,
    pub latest_expense: Option<String>,
}

impl SnapshotExport {
    pub fn from_storage(storage: &Storage) -> GastosResult<Self> {
        let expenses = storage.own.get_all()?;
        let monthly_income = storage.income.get()?.map(|i| i.value());

        let dates: Vec<_> = expenses.iter().filter_map(ExpenseRecord::created_date).collect();
        let categories: BTreeSet<_> = expenses.iter().map(|e| e.category.clone()).collect();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: grand_total(&expenses),
            categories: categories.into_iter().collect(),
            earliest_expense: dates.iter().min().map(|d| d.to_string()),
            latest_expense: dates.iter().max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            fetched_at: storage.own.fetched_at()?,
            expenses,
            monthly_income,
            metadata,
        })
    }
}

/// Export the local snapshot to JSON
pub fn export_snapshot_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> GastosResult<()> {
    let export = SnapshotExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| GastosError::Export(e.to_string()))
}
