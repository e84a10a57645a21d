//! Append-only audit log
//!
//! One JSON object per line, flushed as soon as it is written so that the
//! log survives an abrupt exit.

use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{TrueWageError, TrueWageResult};

use super::entry::AuditEntry;

fn io_err<E: Display>(what: impl Display) -> impl FnOnce(E) -> TrueWageError {
    move |e| TrueWageError::Io(format!("{}: {}", what, e))
}

fn json_err<E: Display>(what: impl Display) -> impl FnOnce(E) -> TrueWageError {
    move |e| TrueWageError::Json(format!("{}: {}", what, e))
}

/// Appends to and reads back the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> TrueWageResult<()> {
        let line = serde_json::to_string(entry).map_err(json_err("Failed to serialize audit entry"))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(io_err("Failed to open audit log"))?;
        writeln!(file, "{}", line)
            .and_then(|()| file.flush())
            .map_err(io_err("Failed to write audit entry"))?;

        tracing::debug!(
            operation = %entry.operation,
            entity = %entry.entity_type,
            id = %entry.entity_id,
            "audit entry written"
        );
        Ok(())
    }

    /// Every entry in the log, oldest first; blank lines are skipped
    pub fn read_all(&self) -> TrueWageResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(io_err("Failed to open audit log"))?;
        let mut entries: Vec<AuditEntry> = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(io_err(format!("Failed to read audit log line {}", line_no)))?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(
                serde_json::from_str(&line)
                    .map_err(json_err(format!("Failed to parse audit entry at line {}", line_no)))?,
            );
        }
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> TrueWageResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn entry_count(&self) -> TrueWageResult<usize> {
        self.read_all().map(|entries| entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        (AuditLogger::new(log_path), temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(
            EntityType::WageRecord,
            "rec-12345678",
            Some("Downtown".to_string()),
            &json!({"name": "Downtown"}),
        );

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::WageRecord);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(
                EntityType::ExpenseProjection,
                format!("exp-{}", i),
                None,
                &json!({"index": i}),
            );
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].entity_id, "exp-7");
        assert_eq!(recent[2].entity_id, "exp-9");
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, temp) = create_test_logger();
        std::fs::write(temp.path().join("audit.log"), "\nnot json\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
