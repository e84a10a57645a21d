//! Pay information model
//!
//! A paycheck amount and how often it arrives.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// How often a paycheck is received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Daily,
    Weekly,
    /// Every two weeks
    Biweekly,
    /// Twice a month
    SemiMonthly,
    Monthly,
}

impl PayFrequency {
    /// All frequencies in menu order
    pub const ALL: [PayFrequency; 5] = [
        PayFrequency::Daily,
        PayFrequency::Weekly,
        PayFrequency::Biweekly,
        PayFrequency::SemiMonthly,
        PayFrequency::Monthly,
    ];

    /// Parse a frequency tag
    ///
    /// Accepts menu numbers ("1" through "5") and names, ignoring case,
    /// spaces, hyphens and underscores ("bi-weekly", "Semi Monthly").
    /// Returns `None` for anything else; callers decide on a fallback.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "1" | "daily" | "day" => Some(Self::Daily),
            "2" | "weekly" | "week" => Some(Self::Weekly),
            "3" | "biweekly" | "fortnightly" => Some(Self::Biweekly),
            "4" | "semimonthly" | "twicemonthly" => Some(Self::SemiMonthly),
            "5" | "monthly" | "month" => Some(Self::Monthly),
            _ => None,
        }
    }

    /// Menu number shown by the interactive calculator
    pub fn menu_number(&self) -> u8 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 2,
            Self::Biweekly => 3,
            Self::SemiMonthly => 4,
            Self::Monthly => 5,
        }
    }

    /// Human description used in menus and reports
    pub fn description(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly (every 2 weeks)",
            Self::SemiMonthly => "Semi-monthly (twice a month)",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Daily => "per day",
            Self::Weekly => "per week",
            Self::Biweekly => "bi-weekly",
            Self::SemiMonthly => "semi-monthly",
            Self::Monthly => "per month",
        };
        write!(f, "{}", label)
    }
}

/// Validation errors for pay information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayValidationError {
    NonPositiveAmount,
    AmountTooLarge,
}

impl fmt::Display for PayValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Paycheck amount must be greater than zero"),
            Self::AmountTooLarge => {
                write!(f, "Paycheck amount must be at most {}", PayInfo::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for PayValidationError {}

/// A take-home paycheck and its frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInfo {
    pub amount: Money,
    pub frequency: PayFrequency,
}

impl PayInfo {
    /// Largest paycheck accepted as input
    pub const MAX_AMOUNT: Money = Money::from_dollars(1_000_000_000);

    pub fn new(amount: Money, frequency: PayFrequency) -> Self {
        Self { amount, frequency }
    }

    pub fn validate(&self) -> Result<(), PayValidationError> {
        if !self.amount.is_positive() {
            return Err(PayValidationError::NonPositiveAmount);
        }
        if self.amount > Self::MAX_AMOUNT {
            return Err(PayValidationError::AmountTooLarge);
        }
        Ok(())
    }

    /// "$2000.00 bi-weekly"
    pub fn describe(&self) -> String {
        format!("{} {}", self.amount, self.frequency)
    }
}
