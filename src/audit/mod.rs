//! Audit logging for TrueWage
//!
//! Every saved or deleted record and projection is appended to an audit log
//! so the history of stored calculations can be reviewed later.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information and a JSON snapshot of the entity.
//! - `AuditLogger`: appends entries to the log file using line-delimited
//!   JSON (JSONL) and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use truewage_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::WageRecord,
//!     record.id.to_string(),
//!     Some(record.name.clone()),
//!     &record,
//! );
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
