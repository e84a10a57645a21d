//! Expense projection repository for JSON storage
//!
//! Manages loading and saving projections to projections.json. Each
//! projection belongs to one wage record.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrueWageError;
use crate::models::{ProjectionId, ProjectionRecord, RecordId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable projection data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProjectionData {
    projections: Vec<ProjectionRecord>,
}

/// Repository for projection persistence
pub struct ProjectionRepository {
    path: PathBuf,
    data: RwLock<HashMap<ProjectionId, ProjectionRecord>>,
}

impl ProjectionRepository {
    /// Create a new projection repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load projections from disk
    pub fn load(&self) -> Result<(), TrueWageError> {
        let file_data: ProjectionData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for projection in file_data.projections {
            data.insert(projection.id, projection);
        }

        Ok(())
    }

    /// Save projections to disk
    pub fn save(&self) -> Result<(), TrueWageError> {
        let projections = self.get_all()?;
        write_json_atomic(&self.path, &ProjectionData { projections })
    }

    /// Get all projections, oldest first
    pub fn get_all(&self) -> Result<Vec<ProjectionRecord>, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut projections: Vec<_> = data.values().cloned().collect();
        projections.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(projections)
    }

    /// Get projections belonging to a record, oldest first
    pub fn get_by_record(&self, record_id: RecordId) -> Result<Vec<ProjectionRecord>, TrueWageError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| p.record_id == record_id)
            .collect())
    }

    /// Insert or update a projection
    pub fn upsert(&self, projection: ProjectionRecord) -> Result<(), TrueWageError> {
        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(projection.id, projection);
        Ok(())
    }

    /// Delete every projection belonging to a record, returning what was removed
    pub fn delete_by_record(&self, record_id: RecordId) -> Result<Vec<ProjectionRecord>, TrueWageError> {
        let mut data = self.data.write().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let ids: Vec<_> = data
            .values()
            .filter(|p| p.record_id == record_id)
            .map(|p| p.id)
            .collect();

        Ok(ids.into_iter().filter_map(|id| data.remove(&id)).collect())
    }

    /// Count projections
    pub fn count(&self) -> Result<usize, TrueWageError> {
        let data = self.data.read().map_err(|e| {
            TrueWageError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::engine::project;
    use crate::models::{Cadence, Money};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ProjectionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("projections.json");
        let repo = ProjectionRepository::new(path);
        (temp_dir, repo)
    }

    fn sample(record_id: RecordId, name: &str) -> ProjectionRecord {
        let projected = project(
            name,
            22.8,
            Money::from_dollars(1200),
            Cadence::Annual,
            &EngineConfig::default(),
        );
        ProjectionRecord::new(record_id, projected.projection)
    }

    #[test]
    fn test_filter_by_record() {
        let (_temp_dir, repo) = create_test_repo();
        let mine = RecordId::new();
        let other = RecordId::new();

        repo.upsert(sample(mine, "Insurance")).unwrap();
        repo.upsert(sample(mine, "Gym")).unwrap();
        repo.upsert(sample(other, "Laptop")).unwrap();

        assert_eq!(repo.get_by_record(mine).unwrap().len(), 2);
        assert_eq!(repo.get_by_record(other).unwrap().len(), 1);
    }

    #[test]
    fn test_delete_by_record_and_persist() {
        let (temp_dir, repo) = create_test_repo();
        let mine = RecordId::new();
        let other = RecordId::new();

        repo.upsert(sample(mine, "Insurance")).unwrap();
        repo.upsert(sample(other, "Laptop")).unwrap();

        let removed = repo.delete_by_record(mine).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].projection.name, "Insurance");
        repo.save().unwrap();

        let reloaded = ProjectionRepository::new(temp_dir.path().join("projections.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert!(reloaded.get_by_record(mine).unwrap().is_empty());
    }
}
