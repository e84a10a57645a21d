//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the engine and service layer.

pub mod audit;
pub mod calc;
pub mod export;
pub mod project;
pub mod quick;
pub mod record;

pub use audit::handle_audit_command;
pub use calc::{handle_calc_command, CalcArgs, CommuteArgs, ModeArg};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use project::{handle_project_command, ProjectArgs};
pub use quick::{handle_quick_command, QuickArgs};
pub use record::{handle_record_command, RecordCommands};

use crate::error::{TrueWageError, TrueWageResult};
use crate::models::Money;

/// Parse a user-entered amount ("2000", "$2,000.00")
pub(crate) fn parse_money(input: &str, what: &str) -> TrueWageResult<Money> {
    Money::parse(input).map_err(|e| {
        TrueWageError::Validation(format!(
            "Invalid {}: '{}'. Use a format like '2000.00' or '2000'. Error: {}",
            what, input, e
        ))
    })
}

/// Unwrap an option the chosen transport mode needs
pub(crate) fn required<T>(value: Option<T>, flag: &str, mode: &str) -> TrueWageResult<T> {
    value.ok_or_else(|| {
        TrueWageError::Validation(format!("{} is required for {} commutes", flag, mode))
    })
}
