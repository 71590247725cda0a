//! Expense service
//!
//! Forwards expense edits to the remote store and keeps the local snapshot in
//! step with what the store confirmed. Reads work offline from the snapshot.

use crate::aggregate::filter_by_month;
use crate::audit::{generate_diff, EntityType};
use crate::error::{GastosError, GastosResult};
use crate::models::{Amount, ExpenseKind, ExpenseRecord, Month};
use crate::remote::ExpenseStore;
use crate::storage::{Storage, OWN_SNAPSHOT};

/// Input for creating an expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub amount: Amount,
    pub category: String,
    pub kind: Option<ExpenseKind>,
}

impl NewExpense {
    fn into_record(self) -> ExpenseRecord {
        ExpenseRecord {
            kind: self.kind,
            ..ExpenseRecord::new(self.description.trim(), self.amount, self.category.trim())
        }
    }
}

/// Fields to change on an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub description: Option<String>,
    pub amount: Option<Amount>,
    pub category: Option<String>,
    pub kind: Option<ExpenseKind>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.kind.is_none()
    }

    fn apply_to(self, record: &mut ExpenseRecord) {
        if let Some(description) = self.description {
            record.description = description.trim().to_string();
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(category) = self.category {
            record.category = category.trim().to_string();
        }
        if let Some(kind) = self.kind {
            record.kind = Some(kind);
        }
    }
}

/// Outcome of refreshing a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    pub previous: usize,
    pub fetched: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    store: Option<&'a dyn ExpenseStore>,
}

impl<'a> ExpenseService<'a> {
    /// Read-only service working from the local snapshot
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            store: None,
        }
    }

    /// Service that can also reach the remote store
    pub fn online(storage: &'a Storage, store: &'a dyn ExpenseStore) -> Self {
        Self {
            storage,
            store: Some(store),
        }
    }

    fn remote(&self) -> GastosResult<&'a dyn ExpenseStore> {
        self.store.ok_or_else(|| {
            GastosError::Unauthorized(
                "This command talks to the remote store; pass --token or set GASTOS_TOKEN".into(),
            )
        })
    }

    /// Replace the own snapshot with the store's current list
    pub fn sync(&self) -> GastosResult<SyncOutcome> {
        let records = self.remote()?.list_expenses()?;
        let fetched = records.len();

        let previous = self.storage.own.replace_all(records)?;
        self.storage.own.save()?;
        self.storage.log_sync(OWN_SNAPSHOT, previous, fetched)?;

        Ok(SyncOutcome { previous, fetched })
    }

    /// Fetch another user's records and cache them
    pub fn sync_guest(&self, username: &str) -> GastosResult<Vec<ExpenseRecord>> {
        let username = username.trim();
        let guest = self.storage.guest(username)?;
        let records = self.remote()?.list_expenses_of(username)?;

        let previous = guest.replace_all(records.clone())?;
        guest.save()?;
        self.storage.log_sync(username, previous, records.len())?;

        Ok(records)
    }

    /// Cached records of a guest, without contacting the store
    pub fn guest_snapshot(&self, username: &str) -> GastosResult<Vec<ExpenseRecord>> {
        self.storage.guest(username)?.get_all()
    }

    /// Own records from the snapshot, optionally restricted to one month
    pub fn list(&self, month: Option<Month>) -> GastosResult<Vec<ExpenseRecord>> {
        Ok(filter_by_month(&self.storage.own.get_all()?, month))
    }

    pub fn get(&self, id: i64) -> GastosResult<ExpenseRecord> {
        self.storage
            .own
            .get(id)?
            .ok_or_else(|| GastosError::expense_not_found(id.to_string()))
    }

    /// Create an expense on the store and append the stored copy to the snapshot
    pub fn add(&self, input: NewExpense) -> GastosResult<ExpenseRecord> {
        let record = input.into_record();
        record
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        let created = self.remote()?.create_expense(&record)?;
        let id = created
            .id
            .ok_or_else(|| GastosError::Storage("Store returned an expense without an id".into()))?;

        self.storage.own.insert(created.clone())?;
        self.storage.own.save()?;

        self.storage.log_create(
            EntityType::Expense,
            id.to_string(),
            Some(created.description.clone()),
            &created,
        )?;

        Ok(created)
    }

    /// Replace an expense with its current values plus `changes`
    pub fn edit(&self, id: i64, changes: ExpenseChanges) -> GastosResult<ExpenseRecord> {
        if changes.is_empty() {
            return Err(GastosError::Validation("Nothing to change".into()));
        }

        let before = self.get(id)?;
        let mut updated = before.clone();
        changes.apply_to(&mut updated);
        updated
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        let stored = self.remote()?.replace_expense(id, &updated)?;
        self.storage.own.replace(id, stored.clone())?;
        self.storage.own.save()?;

        let diff = generate_diff(&serde_json::to_value(&before)?, &serde_json::to_value(&stored)?);
        self.storage.log_update(
            EntityType::Expense,
            id.to_string(),
            Some(stored.description.clone()),
            &before,
            &stored,
            diff,
        )?;

        Ok(stored)
    }

    /// Delete an expense from the store and the snapshot
    pub fn delete(&self, id: i64) -> GastosResult<ExpenseRecord> {
        let existing = self.get(id)?;

        self.remote()?.delete_expense(id)?;
        let removed = self.storage.own.remove(id)?;
        self.storage.own.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            id.to_string(),
            Some(existing.description.clone()),
            &existing,
        )?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::GastosPaths;
    use crate::remote::memory::MemoryStore;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GastosPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seeded_store() -> MemoryStore {
        MemoryStore::with_expenses(vec![
            ExpenseRecord::new("Aluguel", Amount::Text("1200.00".into()), "Custos Fixos")
                .with_id(1)
                .with_created_at("2024-03-01T10:00:00Z"),
            ExpenseRecord::new("Mercado", Amount::Text("310.40".into()), "Alimentação")
                .with_id(2)
                .with_created_at("2024-02-20T18:30:00Z"),
        ])
    }

    fn lunch() -> NewExpense {
        NewExpense {
            description: " Almoço ".into(),
            amount: Amount::Number(32.5),
            category: "Alimentação".into(),
            kind: Some(ExpenseKind::Variable),
        }
    }

    #[test]
    fn test_sync_replaces_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);

        let outcome = service.sync().unwrap();
        assert_eq!(outcome, SyncOutcome { previous: 0, fetched: 2 });
        assert_eq!(service.list(None).unwrap().len(), 2);
        assert_eq!(service.list(Month::new(2024, 3)).unwrap().len(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.last().unwrap().operation, Operation::Sync);
    }

    #[test]
    fn test_add_appends_stored_copy() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);
        service.sync().unwrap();

        let created = service.add(lunch()).unwrap();

        assert_eq!(created.id, Some(3));
        assert_eq!(created.description, "Almoço");
        assert!(created.created_at.is_some());
        assert_eq!(service.list(None).unwrap().last().unwrap(), &created);
        assert_eq!(store.own().len(), 3);
    }

    #[test]
    fn test_add_rejects_invalid_input_before_contacting_store() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        store.set_offline(true);
        let service = ExpenseService::online(&storage, &store);

        let mut bad = lunch();
        bad.amount = Amount::Number(-1.0);
        assert!(service.add(bad).unwrap_err().is_validation());

        let mut blank = lunch();
        blank.category = "  ".into();
        assert!(service.add(blank).unwrap_err().is_validation());
    }

    #[test]
    fn test_edit_patches_snapshot_in_place() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);
        service.sync().unwrap();

        let changes = ExpenseChanges {
            amount: Some(Amount::Number(1350.0)),
            ..ExpenseChanges::default()
        };
        let updated = service.edit(1, changes).unwrap();

        assert_eq!(updated.amount_value(), 1350.0);
        assert_eq!(updated.description, "Aluguel");
        assert_eq!(service.list(None).unwrap()[0], updated);

        let entry = storage.audit().read_all().unwrap().pop().unwrap();
        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.diff_summary.unwrap().contains("amount"));
    }

    #[test]
    fn test_edit_requires_changes_and_known_id() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);
        service.sync().unwrap();

        assert!(service.edit(1, ExpenseChanges::default()).unwrap_err().is_validation());

        let changes = ExpenseChanges {
            description: Some("X".into()),
            ..ExpenseChanges::default()
        };
        assert!(service.edit(99, changes).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_removes_from_both_sides() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);
        service.sync().unwrap();

        let removed = service.delete(2).unwrap();

        assert_eq!(removed.description, "Mercado");
        assert_eq!(service.list(None).unwrap().len(), 1);
        assert_eq!(store.own().len(), 1);
        assert!(service.delete(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_failed_store_call_leaves_snapshot_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        let service = ExpenseService::online(&storage, &store);
        service.sync().unwrap();
        let before = service.list(None).unwrap();

        store.set_offline(true);
        assert!(service.delete(1).unwrap_err().is_remote());
        assert!(service.add(lunch()).unwrap_err().is_remote());

        assert_eq!(service.list(None).unwrap(), before);
    }

    #[test]
    fn test_offline_service_reads_but_cannot_write() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.list(None).unwrap().is_empty());
        assert!(matches!(service.sync(), Err(GastosError::Unauthorized(_))));
    }

    #[test]
    fn test_sync_guest() {
        let (_temp_dir, storage) = create_test_storage();
        let store = seeded_store();
        store.add_user(
            "bob",
            vec![ExpenseRecord::new("Cinema", 40.0, "Lazer").with_id(10)],
        );
        let service = ExpenseService::online(&storage, &store);

        assert_eq!(service.sync_guest("bob").unwrap().len(), 1);
        assert_eq!(service.guest_snapshot("bob").unwrap().len(), 1);
        assert!(service.sync_guest("nobody").unwrap_err().is_not_found());
    }
}
