//! JSON Export functionality
//!
//! Exports every saved record and projection to JSON with schema versioning.

use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{ProjectionRecord, WageRecord};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub records: Vec<WageRecord>,

    pub projections: Vec<ProjectionRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub record_count: usize,
    pub projection_count: usize,
    /// When the oldest record was saved
    pub earliest_record: Option<DateTime<Utc>>,
    /// When the newest record was saved
    pub latest_record: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> TrueWageResult<Self> {
        let records = storage.records.get_all()?;
        let projections = storage.projections.get_all()?;

        let metadata = ExportMetadata {
            record_count: records.len(),
            projection_count: projections.len(),
            earliest_record: records.iter().map(|r| r.created_at).min(),
            latest_record: records.iter().map(|r| r.created_at).max(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            projections,
            metadata,
        })
    }
}

/// Export everything to pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> TrueWageResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrueWageError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrueWageError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrueWagePaths;
    use crate::config::EngineConfig;
    use crate::engine::project;
    use crate::models::{
        Cadence, CommuteProfile, Money, PayFrequency, PayInfo, TransportMode, WorkSchedule,
    };
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrueWagePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_json_export_contains_records_and_projections() {
        let (_temp_dir, storage) = create_test_storage();

        let record = WageRecord::new(
            "Downtown",
            PayInfo::new(Money::from_dollars(2000), PayFrequency::Biweekly),
            WorkSchedule::new(8.0, 5),
            CommuteProfile::new(30.0, 10.0, TransportMode::car(25.0, 3.5)),
            22.8,
        );
        let projected = project(
            "Insurance",
            22.8,
            Money::from_dollars(1200),
            Cadence::Annual,
            &EngineConfig::default(),
        );
        storage
            .projections
            .upsert(ProjectionRecord::new(record.id, projected.projection))
            .unwrap();
        storage.records.upsert(record).unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output).unwrap();

        let export: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.record_count, 1);
        assert_eq!(export.metadata.projection_count, 1);
        assert_eq!(export.records[0].name, "Downtown");
        assert_eq!(export.projections[0].record_id, export.records[0].id);
        assert!(export.metadata.earliest_record.is_some());
    }

    #[test]
    fn test_empty_export() {
        let (_temp_dir, storage) = create_test_storage();
        let export = FullExport::from_storage(&storage).unwrap();
        assert!(export.records.is_empty());
        assert!(export.metadata.latest_record.is_none());
    }
}
