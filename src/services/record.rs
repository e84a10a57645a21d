//! Record service
//!
//! Saves calculations and expense projections, looks them up by name or id,
//! and deletes them. Every create and delete is written to the audit log.

use crate::audit::EntityType;
use crate::engine::{Calculation, WageInputs};
use crate::error::{TrueWageError, TrueWageResult};
use crate::models::{ExpenseProjection, ProjectionRecord, RecordId, WageRecord};
use crate::storage::Storage;

/// Service for saved calculations
pub struct RecordService<'a> {
    storage: &'a Storage,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Save a finished calculation under a name
    pub fn save_calculation(
        &self,
        name: &str,
        inputs: &WageInputs,
        calculation: &Calculation,
        notes: Option<&str>,
    ) -> TrueWageResult<WageRecord> {
        let name = name.trim();

        if self.storage.records.get_by_name(name)?.is_some() {
            return Err(TrueWageError::Validation(format!(
                "A record named '{}' already exists",
                name
            )));
        }

        let mut record = WageRecord::new(
            name,
            inputs.pay,
            inputs.schedule,
            inputs.commute,
            calculation.result.true_wage,
        );
        if let Some(notes) = notes {
            record.set_notes(notes.trim());
        }

        record
            .validate()
            .map_err(|e| TrueWageError::Validation(e.to_string()))?;

        self.storage.records.upsert(record.clone())?;
        self.storage.records.save()?;

        self.storage.log_create(
            EntityType::WageRecord,
            record.id.to_string(),
            Some(record.name.clone()),
            &record,
        )?;

        tracing::info!(id = %record.id, name = %record.name, "record saved");
        Ok(record)
    }

    /// List all records, oldest first
    pub fn list(&self) -> TrueWageResult<Vec<WageRecord>> {
        self.storage.records.get_all()
    }

    /// Get a record by ID
    pub fn get(&self, id: RecordId) -> TrueWageResult<Option<WageRecord>> {
        self.storage.records.get(id)
    }

    /// Find a record by full UUID, short id ("rec-1a2b3c4d") or name
    pub fn find(&self, identifier: &str) -> TrueWageResult<Option<WageRecord>> {
        if let Some(record) = self.storage.records.get_by_name(identifier)? {
            return Ok(Some(record));
        }

        self.storage.records.get_by_identifier(identifier)
    }

    /// Find a record, failing with `NotFound` when nothing matches
    pub fn require(&self, identifier: &str) -> TrueWageResult<WageRecord> {
        self.find(identifier)?
            .ok_or_else(|| TrueWageError::record_not_found(identifier))
    }

    /// Delete a record together with its projections
    pub fn delete(&self, id: RecordId) -> TrueWageResult<WageRecord> {
        let record = self
            .storage
            .records
            .get(id)?
            .ok_or_else(|| TrueWageError::record_not_found(id.to_string()))?;

        let removed = self.storage.projections.delete_by_record(id)?;
        self.storage.records.delete(id)?;
        self.storage.save_all()?;

        for projection in &removed {
            self.storage.log_delete(
                EntityType::ExpenseProjection,
                projection.id.to_string(),
                Some(projection.projection.name.clone()),
                projection,
            )?;
        }
        self.storage.log_delete(
            EntityType::WageRecord,
            record.id.to_string(),
            Some(record.name.clone()),
            &record,
        )?;

        tracing::info!(
            id = %record.id,
            projections = removed.len(),
            "record deleted"
        );
        Ok(record)
    }

    /// Attach a projection to a saved record
    pub fn add_projection(
        &self,
        record_id: RecordId,
        projection: ExpenseProjection,
    ) -> TrueWageResult<ProjectionRecord> {
        if self.storage.records.get(record_id)?.is_none() {
            return Err(TrueWageError::record_not_found(record_id.to_string()));
        }
        if projection.name.trim().is_empty() {
            return Err(TrueWageError::Validation(
                "Expense name cannot be empty".into(),
            ));
        }

        let stored = ProjectionRecord::new(record_id, projection);
        self.storage.projections.upsert(stored.clone())?;
        self.storage.projections.save()?;

        self.storage.log_create(
            EntityType::ExpenseProjection,
            stored.id.to_string(),
            Some(stored.projection.name.clone()),
            &stored,
        )?;

        Ok(stored)
    }

    /// Projections saved against a record, oldest first
    pub fn projections_for(&self, record_id: RecordId) -> TrueWageResult<Vec<ProjectionRecord>> {
        self.storage.projections.get_by_record(record_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrueWagePaths;
    use crate::config::EngineConfig;
    use crate::engine::Calculator;
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

    fn car_commuter() -> (WageInputs, Calculation) {
        let inputs = WageInputs {
            pay: PayInfo::new(Money::from_dollars(2000), PayFrequency::Biweekly),
            schedule: WorkSchedule::new(8.0, 5),
            commute: CommuteProfile::new(30.0, 10.0, TransportMode::car(25.0, 3.50)),
        };
        let config = EngineConfig::default();
        let calculation = Calculator::new(&config).calculate(&inputs).unwrap();
        (inputs, calculation)
    }

    fn projection(name: &str, wage: f64) -> ExpenseProjection {
        Calculator::new(&EngineConfig::default())
            .project(name, wage, Money::from_dollars(1200), Cadence::Annual)
            .projection
    }

    #[test]
    fn test_save_and_find() {
        let (_temp, storage) = create_test_storage();
        let service = RecordService::new(&storage);
        let (inputs, calculation) = car_commuter();

        let record = service
            .save_calculation("  Downtown office ", &inputs, &calculation, Some("car pool later"))
            .unwrap();

        assert_eq!(record.name, "Downtown office");
        assert_eq!(record.notes, "car pool later");
        assert!((record.true_wage - 22.80).abs() < 0.005);

        assert_eq!(service.find("downtown OFFICE").unwrap().unwrap().id, record.id);
        assert_eq!(service.find(&record.id.to_string()).unwrap().unwrap().id, record.id);
        assert_eq!(
            service.find(&record.id.as_uuid().to_string()).unwrap().unwrap().id,
            record.id
        );
        assert!(service.find("nowhere").unwrap().is_none());
        assert!(service.require("nowhere").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_and_empty_names_rejected() {
        let (_temp, storage) = create_test_storage();
        let service = RecordService::new(&storage);
        let (inputs, calculation) = car_commuter();

        service.save_calculation("Job A", &inputs, &calculation, None).unwrap();
        let err = service
            .save_calculation("job a", &inputs, &calculation, None)
            .unwrap_err();
        assert!(err.is_validation());

        let err = service.save_calculation("   ", &inputs, &calculation, None).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_projections_attach_to_record() {
        let (_temp, storage) = create_test_storage();
        let service = RecordService::new(&storage);
        let (inputs, calculation) = car_commuter();
        let record = service.save_calculation("Job", &inputs, &calculation, None).unwrap();

        service
            .add_projection(record.id, projection("Insurance", record.true_wage))
            .unwrap();
        service.add_projection(record.id, projection("Gym", record.true_wage)).unwrap();

        let stored = service.projections_for(record.id).unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|p| p.record_id == record.id));

        let err = service
            .add_projection(RecordId::new(), projection("Orphan", 20.0))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_cascades_and_audits() {
        let (_temp, storage) = create_test_storage();
        let service = RecordService::new(&storage);
        let (inputs, calculation) = car_commuter();
        let record = service.save_calculation("Job", &inputs, &calculation, None).unwrap();
        service
            .add_projection(record.id, projection("Insurance", record.true_wage))
            .unwrap();

        service.delete(record.id).unwrap();

        assert!(service.get(record.id).unwrap().is_none());
        assert!(service.projections_for(record.id).unwrap().is_empty());
        assert!(service.delete(record.id).unwrap_err().is_not_found());

        let entries = storage.audit().read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| (e.operation, e.entity_type)).collect();
        assert_eq!(
            ops,
            vec![
                (Operation::Create, EntityType::WageRecord),
                (Operation::Create, EntityType::ExpenseProjection),
                (Operation::Delete, EntityType::ExpenseProjection),
                (Operation::Delete, EntityType::WageRecord),
            ]
        );
    }

    #[test]
    fn test_records_survive_reload() {
        let (temp, storage) = create_test_storage();
        let (inputs, calculation) = car_commuter();
        let record = RecordService::new(&storage)
            .save_calculation("Persisted", &inputs, &calculation, None)
            .unwrap();

        let paths = TrueWagePaths::with_base_dir(temp.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();

        let loaded = RecordService::new(&reopened).get(record.id).unwrap().unwrap();
        assert_eq!(loaded.pay, inputs.pay);
        assert_eq!(loaded.commute, inputs.commute);
    }
}
