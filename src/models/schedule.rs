//! Work schedule model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation errors for a work schedule
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleValidationError {
    DailyHoursOutOfRange(f64),
    DaysPerWeekOutOfRange(u8),
}

impl fmt::Display for ScheduleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DailyHoursOutOfRange(h) => {
                write!(f, "Daily work hours must be above 0 and at most 24, got {}", h)
            }
            Self::DaysPerWeekOutOfRange(d) => {
                write!(f, "Work days per week must be between 1 and 7, got {}", d)
            }
        }
    }
}

impl std::error::Error for ScheduleValidationError {}

/// Paid hours per day and days worked per week
///
/// The engine accepts any schedule, including a zero-hour one, and reports
/// degenerate results through advisories; `validate` is for input layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    /// Paid work hours per day, excluding lunch
    pub daily_hours: f64,
    pub days_per_week: u8,
}

impl WorkSchedule {
    pub fn new(daily_hours: f64, days_per_week: u8) -> Self {
        Self {
            daily_hours,
            days_per_week,
        }
    }

    pub fn validate(&self) -> Result<(), ScheduleValidationError> {
        if !(self.daily_hours > 0.0 && self.daily_hours <= 24.0) {
            return Err(ScheduleValidationError::DailyHoursOutOfRange(self.daily_hours));
        }
        if self.days_per_week == 0 || self.days_per_week > 7 {
            return Err(ScheduleValidationError::DaysPerWeekOutOfRange(self.days_per_week));
        }
        Ok(())
    }

    pub fn days(&self) -> f64 {
        f64::from(self.days_per_week)
    }

    pub fn weekly_hours(&self) -> f64 {
        self.daily_hours * self.days()
    }
}

impl Default for WorkSchedule {
    fn default() -> Self {
        Self::new(8.0, 5)
    }
}
