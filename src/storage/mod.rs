//! Storage layer for TrueWage
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation and audit logging of every create and delete.

pub mod file_io;
pub mod init;
pub mod projections;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use projections::ProjectionRepository;
pub use records::RecordRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrueWagePaths;
use crate::error::TrueWageError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrueWagePaths,
    audit: AuditLogger,
    pub records: RecordRepository,
    pub projections: ProjectionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrueWagePaths) -> Result<Self, TrueWageError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            records: RecordRepository::new(paths.records_file()),
            projections: ProjectionRepository::new(paths.projections_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrueWagePaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrueWageError> {
        self.records.load()?;
        self.projections.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrueWageError> {
        self.records.save()?;
        self.projections.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Append a create entry to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrueWageError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Append a delete entry to the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), TrueWageError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrueWagePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        storage.load_all().unwrap();
        assert_eq!(storage.records.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers_append() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrueWagePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let entity = json!({"name": "Downtown"});
        storage
            .log_create(EntityType::WageRecord, "rec-12345678", Some("Downtown".into()), &entity)
            .unwrap();
        storage
            .log_delete(EntityType::WageRecord, "rec-12345678", Some("Downtown".into()), &entity)
            .unwrap();

        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }
}
