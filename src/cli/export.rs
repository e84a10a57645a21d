//! CLI command for data export

use crate::error::{TrueWageError, TrueWageResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per record)
    Csv,
    /// JSON format (everything)
    Json,
    /// YAML format (everything, human-readable)
    Yaml,
}

/// Export arguments
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export projections instead of records (CSV only)
    #[arg(long)]
    pub projections: bool,
}

fn write_export<W: Write>(storage: &Storage, args: &ExportArgs, writer: &mut W) -> TrueWageResult<()> {
    match (args.format, args.projections) {
        (ExportFormat::Csv, false) => csv::export_records_csv(storage, writer),
        (ExportFormat::Csv, true) => csv::export_projections_csv(storage, writer),
        (_, true) => Err(TrueWageError::Validation(
            "--projections only applies to CSV; JSON and YAML exports include projections".into(),
        )),
        (ExportFormat::Json, false) => json::export_full_json(storage, writer),
        (ExportFormat::Yaml, false) => yaml::export_full_yaml(storage, writer),
    }
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> TrueWageResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrueWageError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TrueWageError::Export(e.to_string()))?;

            let count = storage.records.count()?;
            eprintln!("Exported {} record(s) to {}", count, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(storage, &args, &mut handle)?;
        }
    }

    Ok(())
}
