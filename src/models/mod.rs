//! Core data models for TrueWage
//!
//! Value types for pay, schedules, commutes and the figures derived from
//! them, plus the persisted record snapshots.

pub mod expense;
pub mod ids;
pub mod money;
pub mod pay;
pub mod record;
pub mod schedule;
pub mod transport;
pub mod wage;

pub use expense::{Cadence, ExpenseProjection, LaborCost};
pub use ids::{ProjectionId, RecordId};
pub use money::{Money, MoneyParseError};
pub use pay::{PayFrequency, PayInfo, PayValidationError};
pub use record::{ProjectionRecord, RecordValidationError, WageRecord};
pub use schedule::{ScheduleValidationError, WorkSchedule};
pub use transport::{CommuteProfile, TransportMode};
pub use wage::{DailyCostBreakdown, DerivedDailyFigures, ImpactRatios, PaycheckImpact, WageResult};
