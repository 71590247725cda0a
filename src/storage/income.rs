//! Cached monthly income

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GastosError, GastosResult};
use crate::models::MonthlyIncome;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncomeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    income: Option<MonthlyIncome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Repository for the last known monthly income
pub struct IncomeRepository {
    path: PathBuf,
    data: RwLock<IncomeData>,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(IncomeData::default()),
        }
    }

    pub fn load(&self) -> GastosResult<()> {
        let file_data: IncomeData = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data;
        Ok(())
    }

    pub fn save(&self) -> GastosResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    /// Cached income, `None` if it was never fetched or set
    pub fn get(&self) -> GastosResult<Option<MonthlyIncome>> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.income)
    }

    /// Store a new value, returning the previous one
    pub fn set(&self, income: MonthlyIncome) -> GastosResult<Option<MonthlyIncome>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.updated_at = Some(Utc::now());
        Ok(data.income.replace(income))
    }
}
