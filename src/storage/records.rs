//! Wage record repository for JSON storage
//!
//! Manages loading and saving saved calculations to records.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrueWageError;
use crate::models::{RecordId, WageRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable record data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RecordData {
    records: Vec<WageRecord>,
}

/// Repository for wage record persistence
pub struct RecordRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecordId, WageRecord>>,
}

impl RecordRepository {
    /// Create a new record repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), TrueWageError> {
        let file_data: RecordData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for record in file_data.records {
            data.insert(record.id, record);
        }

        Ok(())
    }

    /// Save records to disk, oldest first
    pub fn save(&self) -> Result<(), TrueWageError> {
        let records = self.get_all()?;
        write_json_atomic(&self.path, &RecordData { records })
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> Result<Option<WageRecord>, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// Get all records, oldest first
    pub fn get_all(&self) -> Result<Vec<WageRecord>, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut records: Vec<_> = data.values().cloned().collect();
        records.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(records)
    }

    /// Get a record by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<WageRecord>, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let name = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|r| r.name.trim().to_lowercase() == name)
            .cloned())
    }

    /// Find a record by user-typed id (full UUID or short form)
    pub fn get_by_identifier(&self, identifier: &str) -> Result<Option<WageRecord>, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.values().find(|r| r.id.matches(identifier)).cloned())
    }

    /// Insert or update a record
    pub fn upsert(&self, record: WageRecord) -> Result<(), TrueWageError> {
        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(record.id, record);
        Ok(())
    }

    /// Delete a record
    pub fn delete(&self, id: RecordId) -> Result<bool, TrueWageError> {
        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    /// Count records
    pub fn count(&self) -> Result<usize, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
