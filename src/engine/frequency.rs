//! Pay frequency normalization
//!
//! Converts a paycheck into annual income. Arithmetic is done in whole cents
//! so that annualizing is exactly linear in the paycheck amount.

use crate::config::EngineConfig;
use crate::models::{Money, PayFrequency};

use super::advisory::Advisory;

/// Annual income derived from a paycheck
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The frequency actually used (bi-weekly after a fallback)
    pub frequency: PayFrequency,
    pub annual_income: Money,
    pub advisory: Option<Advisory>,
}

/// Paychecks per year for a frequency
///
/// Daily pay is received on every work day of every work week; weekly pay on
/// every work week. The other frequencies are calendar based.
pub fn periods_per_year(frequency: PayFrequency, days_per_week: u8, config: &EngineConfig) -> i64 {
    let weeks = i64::from(config.work_weeks_per_year);
    match frequency {
        PayFrequency::Daily => i64::from(days_per_week) * weeks,
        PayFrequency::Weekly => weeks,
        PayFrequency::Biweekly => 26,
        PayFrequency::SemiMonthly => 24,
        PayFrequency::Monthly => 12,
    }
}

/// Convert a paycheck amount into annual income
pub fn annualize(
    amount: Money,
    frequency: PayFrequency,
    days_per_week: u8,
    config: &EngineConfig,
) -> Money {
    amount.times(periods_per_year(frequency, days_per_week, config))
}

/// Annualize from a raw frequency tag
///
/// An unrecognized tag is treated as bi-weekly and reported through an
/// `UnknownFrequencyFallback` advisory rather than rejected.
pub fn annualize_tag(
    amount: Money,
    tag: &str,
    days_per_week: u8,
    config: &EngineConfig,
) -> Normalized {
    let (frequency, advisory) = match PayFrequency::from_tag(tag) {
        Some(frequency) => (frequency, None),
        None => (
            PayFrequency::Biweekly,
            Some(Advisory::UnknownFrequencyFallback {
                tag: tag.to_string(),
            }),
        ),
    };

    Normalized {
        frequency,
        annual_income: annualize(amount, frequency, days_per_week, config),
        advisory,
    }
}
