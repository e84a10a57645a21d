//! Custom error types for TrueWage
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Degenerate-but-valid numeric inputs (zero work hours, a non-positive wage,
//! an unknown pay frequency tag) are never errors. They travel alongside
//! results as [`crate::engine::Advisory`] values instead.

use thiserror::Error;

/// The main error type for TrueWage operations
#[derive(Error, Debug)]
pub enum TrueWageError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for raw inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// A transport parameter that the cost model divides by or multiplies
    /// with is zero, negative or not finite
    #[error("Invalid transport parameter '{parameter}': {value}")]
    InvalidModeParameter { parameter: &'static str, value: f64 },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrueWageError {
    /// Create a "not found" error for wage records
    pub fn record_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Record",
            identifier: identifier.into(),
        }
    }

    /// Create an invalid transport parameter error
    pub fn invalid_mode_parameter(parameter: &'static str, value: f64) -> Self {
        Self::InvalidModeParameter { parameter, value }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid transport parameter error
    pub fn is_invalid_mode_parameter(&self) -> bool {
        matches!(self, Self::InvalidModeParameter { .. })
    }
}

impl From<std::io::Error> for TrueWageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrueWageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for TrueWage operations
pub type TrueWageResult<T> = Result<T, TrueWageError>;
