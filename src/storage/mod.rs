//! Local storage for gastos
//!
//! Keeps the last fetched snapshots and the monthly income as JSON files
//! with atomic writes, and owns the audit log every change is recorded in.

pub mod file_io;
pub mod income;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use income::IncomeRepository;
pub use snapshot::SnapshotRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::GastosPaths;
use crate::error::{GastosError, GastosResult};

/// Owner name of the user's own snapshot
pub const OWN_SNAPSHOT: &str = "own";

/// Storage coordinator giving access to every repository
pub struct Storage {
    paths: GastosPaths,
    /// The authenticated user's records
    pub own: SnapshotRepository,
    pub income: IncomeRepository,
    audit: AuditLogger,
}

impl Storage {
    pub fn new(paths: GastosPaths) -> Result<Self, GastosError> {
        paths.ensure_directories()?;

        Ok(Self {
            own: SnapshotRepository::new(paths.own_snapshot_file(), OWN_SNAPSHOT),
            income: IncomeRepository::new(paths.income_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &GastosPaths {
        &self.paths
    }

    /// Load every local file from disk
    pub fn load_all(&self) -> GastosResult<()> {
        self.own.load()?;
        self.income.load()
    }

    /// Snapshot of another user's records, loaded from disk
    pub fn guest(&self, username: &str) -> GastosResult<SnapshotRepository> {
        let username = username.trim();
        if username.is_empty() {
            return Err(GastosError::Validation("Guest username cannot be empty".into()));
        }

        let repo = SnapshotRepository::new(self.paths.guest_snapshot_file(username), username);
        repo.load()?;
        Ok(repo)
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> GastosResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> GastosResult<()> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> GastosResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_sync(&self, owner: &str, previous: usize, fetched: usize) -> GastosResult<()> {
        self.audit.log(&AuditEntry::sync(owner, previous, fetched))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.own.owner(), OWN_SNAPSHOT);
    }

    #[test]
    fn test_guest_snapshots_are_separate_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let bob = storage.guest("bob").unwrap();
        bob.replace_all(vec![ExpenseRecord::new("X", 1.0, "Lazer").with_id(1)])
            .unwrap();
        bob.save().unwrap();

        assert_eq!(storage.guest("bob").unwrap().count().unwrap(), 1);
        assert_eq!(storage.guest("alice").unwrap().count().unwrap(), 0);
        assert!(storage.guest("  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_similar_guest_names_do_not_share_a_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let ana = storage.guest("ana@x").unwrap();
        ana.replace_all(vec![ExpenseRecord::new("Ana's rent", 900.0, "Custos Fixos").with_id(1)])
            .unwrap();
        ana.save().unwrap();

        assert!(storage.guest("ana+x").unwrap().get_all().unwrap().is_empty());
        assert_eq!(storage.guest("ana@x").unwrap().count().unwrap(), 1);
    }

    #[test]
    fn test_log_helpers_write_audit_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let record = ExpenseRecord::new("X", 1.0, "Lazer").with_id(1);
        storage
            .log_create(EntityType::Expense, "1", Some("X".into()), &record)
            .unwrap();
        storage.log_sync(OWN_SNAPSHOT, 0, 1).unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }
}
