//! Storage initialization
//!
//! Handles first-run setup: directories plus empty data files, so a fresh
//! install has something to export and inspect.

use crate::config::paths::TrueWagePaths;
use crate::error::TrueWageError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &TrueWagePaths) -> Result<(), TrueWageError> {
    paths.ensure_directories()?;

    if !paths.records_file().exists() {
        write_json_atomic(paths.records_file(), &serde_json::json!({ "records": [] }))?;
    }
    if !paths.projections_file().exists() {
        write_json_atomic(
            paths.projections_file(),
            &serde_json::json!({ "projections": [] }),
        )?;
    }

    tracing::info!(base_dir = %paths.base_dir().display(), "storage initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_empty_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrueWagePaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        assert!(paths.records_file().exists());
        assert!(paths.projections_file().exists());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrueWagePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        fs::write(paths.records_file(), r#"{"records": [], "marker": 1}"#).unwrap();

        initialize_storage(&paths).unwrap();

        let contents = fs::read_to_string(paths.records_file()).unwrap();
        assert!(contents.contains("marker"));
    }
}
