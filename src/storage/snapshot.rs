//! Local snapshot of one party's expense records
//!
//! A snapshot is the last list fetched from the remote store, kept in the
//! order the store returned it and patched in place after each successful
//! create/replace/delete so views work without refetching.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GastosError, GastosResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotData {
    /// Whose records the file holds; absent in files written before it was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fetched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

impl SnapshotData {
    fn empty(owner: &str) -> Self {
        Self {
            owner: Some(owner.to_string()),
            ..Self::default()
        }
    }
}

/// Repository for one snapshot file
#[derive(Debug)]
pub struct SnapshotRepository {
    path: PathBuf,
    owner: String,
    data: RwLock<SnapshotData>,
}

impl SnapshotRepository {
    /// Create an empty repository; call [`load`](Self::load) to read the file
    pub fn new(path: PathBuf, owner: impl Into<String>) -> Self {
        let owner = owner.into();
        Self {
            path,
            data: RwLock::new(SnapshotData::empty(&owner)),
            owner,
        }
    }

    /// Whose records these are
    pub fn owner(&self) -> &str {
        &self.owner
    }

    fn read(&self) -> GastosResult<RwLockReadGuard<'_, SnapshotData>> {
        self.data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> GastosResult<RwLockWriteGuard<'_, SnapshotData>> {
        self.data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Read the file; a file recorded for another owner counts as empty
    pub fn load(&self) -> GastosResult<()> {
        let mut file_data: SnapshotData = read_json(&self.path)?;
        let foreign = file_data
            .owner
            .as_deref()
            .is_some_and(|owner| owner != self.owner);
        if foreign {
            file_data = SnapshotData::empty(&self.owner);
        } else {
            file_data.owner = Some(self.owner.clone());
        }
        *self.write()? = file_data;
        Ok(())
    }

    pub fn save(&self) -> GastosResult<()> {
        let data = self.read()?;
        write_json_atomic(&self.path, &*data)
    }

    /// Whether a snapshot has ever been fetched
    pub fn is_synced(&self) -> GastosResult<bool> {
        Ok(self.read()?.fetched_at.is_some())
    }

    pub fn fetched_at(&self) -> GastosResult<Option<DateTime<Utc>>> {
        Ok(self.read()?.fetched_at)
    }

    /// Replace every record with a fresh fetch; returns the previous count
    pub fn replace_all(&self, records: Vec<ExpenseRecord>) -> GastosResult<usize> {
        let mut data = self.write()?;
        let previous = data.expenses.len();
        data.expenses = records;
        data.fetched_at = Some(Utc::now());
        Ok(previous)
    }

    /// Append a record the store just created
    pub fn insert(&self, record: ExpenseRecord) -> GastosResult<()> {
        self.write()?.expenses.push(record);
        Ok(())
    }

    /// Swap the record with `id` for `record`, keeping its position
    ///
    /// Returns the replaced record.
    pub fn replace(&self, id: i64, record: ExpenseRecord) -> GastosResult<ExpenseRecord> {
        let mut data = self.write()?;
        let slot = data
            .expenses
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;
        Ok(std::mem::replace(slot, record))
    }

    /// Drop the record with `id`, returning it
    pub fn remove(&self, id: i64) -> GastosResult<ExpenseRecord> {
        let mut data = self.write()?;
        let position = data
            .expenses
            .iter()
            .position(|r| r.id == Some(id))
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;
        Ok(data.expenses.remove(position))
    }

    pub fn get(&self, id: i64) -> GastosResult<Option<ExpenseRecord>> {
        Ok(self.read()?.expenses.iter().find(|r| r.id == Some(id)).cloned())
    }

    /// All records in store order
    pub fn get_all(&self) -> GastosResult<Vec<ExpenseRecord>> {
        Ok(self.read()?.expenses.clone())
    }

    pub fn count(&self) -> GastosResult<usize> {
        Ok(self.read()?.expenses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, SnapshotRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = SnapshotRepository::new(temp_dir.path().join("own.json"), "own");
        (temp_dir, repo)
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new("Aluguel", 1200.0, "Custos Fixos").with_id(1),
            ExpenseRecord::new("Mercado", 300.0, "Alimentação").with_id(2),
            ExpenseRecord::new("Ônibus", 4.4, "Transporte").with_id(3),
        ]
    }

    #[test]
    fn test_empty_repository() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        assert!(!repo.is_synced().unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_replace_all_and_persist() {
        let (temp_dir, repo) = create_test_repo();

        assert_eq!(repo.replace_all(sample()).unwrap(), 0);
        repo.save().unwrap();

        let reloaded = SnapshotRepository::new(temp_dir.path().join("own.json"), "own");
        reloaded.load().unwrap();

        assert!(reloaded.is_synced().unwrap());
        assert_eq!(reloaded.get_all().unwrap(), sample());
    }

    #[test]
    fn test_replace_keeps_position() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(sample()).unwrap();

        let updated = ExpenseRecord::new("Feira", 80.0, "Alimentação").with_id(2);
        let old = repo.replace(2, updated.clone()).unwrap();

        assert_eq!(old.description, "Mercado");
        assert_eq!(repo.get_all().unwrap()[1], updated);
    }

    #[test]
    fn test_remove_and_missing_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(sample()).unwrap();

        let removed = repo.remove(1).unwrap();
        assert_eq!(removed.description, "Aluguel");
        assert_eq!(repo.count().unwrap(), 2);
        assert!(repo.get(1).unwrap().is_none());

        assert!(repo.remove(1).unwrap_err().is_not_found());
        assert!(repo
            .replace(99, ExpenseRecord::new("X", 1.0, "Y"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_insert_appends() {
        let (_temp_dir, repo) = create_test_repo();
        repo.replace_all(sample()).unwrap();
        repo.insert(ExpenseRecord::new("Livro", 50.0, "Lazer").with_id(4))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.last().unwrap().id, Some(4));
    }

    #[test]
    fn test_file_of_another_owner_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shared.json");

        let ana = SnapshotRepository::new(path.clone(), "ana@x");
        ana.replace_all(sample()).unwrap();
        ana.save().unwrap();

        let other = SnapshotRepository::new(path.clone(), "ana+x");
        other.load().unwrap();
        assert_eq!(other.count().unwrap(), 0);
        assert!(!other.is_synced().unwrap());

        let same = SnapshotRepository::new(path, "ana@x");
        same.load().unwrap();
        assert_eq!(same.get_all().unwrap(), sample());
    }

    #[test]
    fn test_file_without_owner_is_accepted() {
        let (temp_dir, repo) = create_test_repo();
        repo.replace_all(sample()).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("own.json");
        let mut raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        raw.as_object_mut().unwrap().remove("owner");
        std::fs::write(&path, raw.to_string()).unwrap();

        let reloaded = SnapshotRepository::new(path, "own");
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 3);
    }
}
