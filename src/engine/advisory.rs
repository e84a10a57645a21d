//! Non-fatal advisories
//!
//! The engine never fails on degenerate-but-valid numbers. It substitutes a
//! sentinel (usually zero) and attaches one of these so the caller can still
//! show a result and explain it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reportable irregularity attached to a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// The pay frequency tag was not recognized; bi-weekly was assumed
    UnknownFrequencyFallback { tag: String },
    /// No paid hours in the year; every wage figure is reported as 0
    ZeroWorkHours,
    /// The wage used for a projection was zero or negative; hours are 0
    NonPositiveWage { wage: f64 },
}

impl Advisory {
    /// Emit the advisory as a tracing warning
    pub fn log(&self) {
        tracing::warn!(advisory = ?self, "{}", self);
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFrequencyFallback { tag } => write!(
                f,
                "Unrecognized pay frequency '{}', defaulting to bi-weekly",
                tag
            ),
            Self::ZeroWorkHours => write!(
                f,
                "No paid work hours in the year; wage figures are reported as 0"
            ),
            Self::NonPositiveWage { wage } => write!(
                f,
                "Hourly wage {:.2} is not positive; labor time cannot be projected",
                wage
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let advisory = Advisory::UnknownFrequencyFallback { tag: "7".into() };
        assert_eq!(
            advisory.to_string(),
            "Unrecognized pay frequency '7', defaulting to bi-weekly"
        );
        assert!(Advisory::ZeroWorkHours.to_string().contains("reported as 0"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Advisory::NonPositiveWage { wage: -1.5 }).unwrap();
        assert_eq!(json, r#"{"kind":"non_positive_wage","wage":-1.5}"#);
    }
}
