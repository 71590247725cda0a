//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created on the store
    Create,
    /// Entity was replaced on the store
    Update,
    /// Entity was deleted from the store
    Delete,
    /// Local snapshot was replaced by a fresh fetch
    Sync,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Sync => write!(f, "SYNC"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Income,
    Snapshot,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Income => write!(f, "Income"),
            EntityType::Snapshot => write!(f, "Snapshot"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Store id of the entity, or the snapshot owner for syncs
    pub entity_id: String,

    /// Human-readable description of the entity (e.g., expense description)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Entity before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Entity after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, entity_type: EntityType, entity_id: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name: None,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id.into())
        }
    }

    /// Entry for an update operation
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id.into())
        }
    }

    /// Entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            entity_name,
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id.into())
        }
    }

    /// Entry for a snapshot refresh; only counts are kept, not the records
    pub fn sync(owner: impl Into<String>, previous_count: usize, fetched_count: usize) -> Self {
        Self {
            diff_summary: Some(format!("{} -> {} records", previous_count, fetched_count)),
            ..Self::new(Operation::Sync, EntityType::Snapshot, owner.into())
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Sync.to_string(), "SYNC");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"description": "Rent", "amount": 1000});
        let entry = AuditEntry::create(EntityType::Expense, "12", Some("Rent".into()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.entity_id, "12");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_delete_entry() {
        let data = json!({"description": "Rent"});
        let entry = AuditEntry::delete(EntityType::Expense, "12", None, &data);

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_sync_entry() {
        let entry = AuditEntry::sync("own", 3, 5);
        assert_eq!(entry.entity_type, EntityType::Snapshot);
        assert_eq!(entry.diff_summary.as_deref(), Some("3 -> 5 records"));
        assert!(entry.before.is_none() && entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Income, "income", None, &json!(5000.0));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"income\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "7",
            Some("Café".into()),
            &json!({"amount": 5}),
            &json!({"amount": 6}),
            Some("amount: 5 -> 6".into()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Expense 7 (Café)"));
        assert!(formatted.contains("Changes: amount: 5 -> 6"));
    }
}
