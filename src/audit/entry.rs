//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entity was created
    Create,
    /// Entity was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    WageRecord,
    ExpenseProjection,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::WageRecord => write!(f, "Record"),
            EntityType::ExpenseProjection => write!(f, "Projection"),
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

    /// Short id of the affected entity ("rec-1a2b3c4d")
    pub entity_id: String,

    /// Human-readable name of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Create a new audit entry for a delete operation
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: serde_json::to_value(entity).ok(),
            after: None,
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

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_names() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::WageRecord.to_string(), "Record");
        assert_eq!(EntityType::ExpenseProjection.to_string(), "Projection");
    }

    #[test]
    fn test_create_and_delete_snapshots() {
        let data = json!({"name": "Downtown", "true_wage": 22.8});

        let created = AuditEntry::create(EntityType::WageRecord, "rec-12345678", None, &data);
        assert_eq!(created.operation, Operation::Create);
        assert!(created.before.is_none());
        assert_eq!(created.after, Some(data.clone()));

        let deleted = AuditEntry::delete(EntityType::WageRecord, "rec-12345678", None, &data);
        assert_eq!(deleted.operation, Operation::Delete);
        assert_eq!(deleted.before, Some(data));
        assert!(deleted.after.is_none());
    }

    #[test]
    fn test_serialized_entity_type_is_snake_case() {
        let entry = AuditEntry::create(EntityType::ExpenseProjection, "exp-1", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"entity_type\":\"expense_projection\""));

        let back: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(back.entity_type, EntityType::ExpenseProjection);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::WageRecord,
            "rec-12345678",
            Some("Downtown".to_string()),
            &json!({"name": "Downtown"}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Record rec-12345678 (Downtown)"));
    }
}
