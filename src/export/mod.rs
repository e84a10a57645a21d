//! Export module for TrueWage
//!
//! Exports saved records and projections in multiple formats:
//! - CSV: one row per record or projection (spreadsheet-compatible)
//! - JSON: machine-readable full export
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_projections_csv, export_records_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
