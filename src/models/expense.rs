//! Expense affordability model
//!
//! Expresses the price of something in hours, days and weeks of work.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Billing period of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    #[default]
    OneTime,
    Monthly,
    Annual,
}

impl Cadence {
    /// Parse a cadence name ("one-time", "monthly", "annual"/"yearly")
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "onetime" | "once" | "1" => Some(Self::OneTime),
            "monthly" | "month" | "2" => Some(Self::Monthly),
            "annual" | "annually" | "yearly" | "year" | "3" => Some(Self::Annual),
            _ => None,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "one-time"),
            Self::Monthly => write!(f, "monthly"),
            Self::Annual => write!(f, "annual"),
        }
    }
}

/// Labor needed to pay a given amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborCost {
    pub cost: Money,
    pub hours: f64,
    pub days: f64,
    pub weeks: f64,
}

/// An expense converted into working time at a chosen hourly wage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseProjection {
    pub name: String,
    pub cost: Money,
    pub cadence: Cadence,
    /// The hourly wage the projection was made at
    pub hourly_wage: f64,
    pub hours_required: f64,
    pub days_required: f64,
    pub weeks_required: f64,
    /// Yearly total of a monthly expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annualized: Option<LaborCost>,
    /// Per-month share of an annual expense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_equivalent: Option<LaborCost>,
}

impl ExpenseProjection {
    /// The base projection as a `LaborCost`
    pub fn labor(&self) -> LaborCost {
        LaborCost {
            cost: self.cost,
            hours: self.hours_required,
            days: self.days_required,
            weeks: self.weeks_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_from_tag() {
        assert_eq!(Cadence::from_tag("one-time"), Some(Cadence::OneTime));
        assert_eq!(Cadence::from_tag("Monthly"), Some(Cadence::Monthly));
        assert_eq!(Cadence::from_tag("yearly"), Some(Cadence::Annual));
        assert_eq!(Cadence::from_tag("weekly"), None);
    }

    #[test]
    fn test_cadence_serialization() {
        assert_eq!(serde_json::to_string(&Cadence::OneTime).unwrap(), "\"one_time\"");
        let c: Cadence = serde_json::from_str("\"annual\"").unwrap();
        assert_eq!(c, Cadence::Annual);
    }

    #[test]
    fn test_optional_fields_skipped() {
        let projection = ExpenseProjection {
            name: "Laptop".into(),
            cost: Money::from_dollars(1200),
            cadence: Cadence::OneTime,
            hourly_wage: 22.8,
            hours_required: 52.63,
            days_required: 6.58,
            weeks_required: 1.32,
            annualized: None,
            monthly_equivalent: None,
        };
        let json = serde_json::to_string(&projection).unwrap();
        assert!(!json.contains("annualized"));
        let back: ExpenseProjection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, projection);
        assert_eq!(back.labor().hours, 52.63);
    }
}
