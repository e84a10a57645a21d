//! Engine constants
//!
//! Every calendar or convention constant the wage engine uses lives here so it
//! can be varied per user (through `config.json`) or per test.

use serde::{Deserialize, Serialize};

use crate::error::{TrueWageError, TrueWageResult};

/// Constants used by the wage/cost normalization engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Paid work weeks in a year (two weeks of vacation assumed)
    #[serde(default = "default_work_weeks_per_year")]
    pub work_weeks_per_year: u32,

    /// Average weeks in a month, used to spread a monthly transit pass
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: f64,

    /// Hours in one "day" of labor for affordability projections
    #[serde(default = "default_affordability_hours_per_day")]
    pub affordability_hours_per_day: f64,

    /// Days in one "week" of labor for affordability projections
    #[serde(default = "default_affordability_days_per_week")]
    pub affordability_days_per_week: f64,

    /// IRS standard mileage rate in dollars per mile (2024)
    #[serde(default = "default_irs_mileage_rate")]
    pub irs_mileage_rate: f64,

    /// Flat maintenance/depreciation estimate used by the quick calculator
    #[serde(default = "default_quick_maintenance_per_mile")]
    pub quick_maintenance_per_mile: f64,
}

fn default_work_weeks_per_year() -> u32 {
    50
}

fn default_weeks_per_month() -> f64 {
    4.33
}

fn default_affordability_hours_per_day() -> f64 {
    8.0
}

fn default_affordability_days_per_week() -> f64 {
    5.0
}

fn default_irs_mileage_rate() -> f64 {
    0.67
}

fn default_quick_maintenance_per_mile() -> f64 {
    0.30
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            work_weeks_per_year: default_work_weeks_per_year(),
            weeks_per_month: default_weeks_per_month(),
            affordability_hours_per_day: default_affordability_hours_per_day(),
            affordability_days_per_week: default_affordability_days_per_week(),
            irs_mileage_rate: default_irs_mileage_rate(),
            quick_maintenance_per_mile: default_quick_maintenance_per_mile(),
        }
    }
}

impl EngineConfig {
    /// Reject constants that would make the engine divide by zero
    pub fn validate(&self) -> TrueWageResult<()> {
        if self.work_weeks_per_year == 0 || self.work_weeks_per_year > 52 {
            return Err(TrueWageError::Config(format!(
                "work_weeks_per_year must be between 1 and 52, got {}",
                self.work_weeks_per_year
            )));
        }
        if !(self.weeks_per_month > 0.0) {
            return Err(TrueWageError::Config(format!(
                "weeks_per_month must be positive, got {}",
                self.weeks_per_month
            )));
        }
        if !(self.affordability_hours_per_day > 0.0) || !(self.affordability_days_per_week > 0.0) {
            return Err(TrueWageError::Config(
                "affordability hours per day and days per week must be positive".into(),
            ));
        }
        if self.irs_mileage_rate < 0.0 || self.quick_maintenance_per_mile < 0.0 {
            return Err(TrueWageError::Config(
                "mileage rates cannot be negative".into(),
            ));
        }
        Ok(())
    }

    /// Work weeks per year as a float, for rate arithmetic
    pub fn work_weeks(&self) -> f64 {
        f64::from(self.work_weeks_per_year)
    }
}
