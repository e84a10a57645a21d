//! Saved calculation snapshots
//!
//! A record keeps the inputs of one calculation together with the true wage
//! it produced. Everything else can be recomputed from the inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense::ExpenseProjection;
use super::ids::{ProjectionId, RecordId};
use super::pay::PayInfo;
use super::schedule::WorkSchedule;
use super::transport::CommuteProfile;

/// Validation errors for records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Record name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Record name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// A persisted calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageRecord {
    pub id: RecordId,
    pub name: String,
    pub pay: PayInfo,
    pub schedule: WorkSchedule,
    pub commute: CommuteProfile,
    pub true_wage: f64,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl WageRecord {
    pub fn new(
        name: impl Into<String>,
        pay: PayInfo,
        schedule: WorkSchedule,
        commute: CommuteProfile,
        true_wage: f64,
    ) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            pay,
            schedule,
            commute,
            true_wage,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if name.len() > 100 {
            return Err(RecordValidationError::NameTooLong(name.len()));
        }
        Ok(())
    }
}

/// An expense projection attached to a record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRecord {
    pub id: ProjectionId,
    pub record_id: RecordId,
    pub projection: ExpenseProjection,
    pub created_at: DateTime<Utc>,
}

impl ProjectionRecord {
    pub fn new(record_id: RecordId, projection: ExpenseProjection) -> Self {
        Self {
            id: ProjectionId::new(),
            record_id,
            projection,
            created_at: Utc::now(),
        }
    }
}
