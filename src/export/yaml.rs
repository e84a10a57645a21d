//! YAML Export functionality
//!
//! The same content as the JSON export, in a human-readable form.

use crate::error::{TrueWageError, TrueWageResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export everything to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrueWageResult<()> {
    let export = FullExport::from_storage(storage)?;
    let io_err = |e: std::io::Error| TrueWageError::Export(e.to_string());

    writeln!(writer, "# TrueWage Records Export").map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrueWageError::Export(e.to_string()))?;

    Ok(())
}
