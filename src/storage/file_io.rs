//! JSON file helpers
//!
//! Writes go to a sibling temp file that is synced and then renamed over the
//! target, so a crash never leaves a half-written data file.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrueWageError;

/// Map a lower-level error into a storage error naming what failed
fn storage_err<E: Display>(what: impl Display) -> impl FnOnce(E) -> TrueWageError {
    move |e| TrueWageError::Storage(format!("{}: {}", what, e))
}

/// Load a JSON document, or `T::default()` when the file is absent
pub fn read_json<T, P>(path: P) -> Result<T, TrueWageError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }

    let reader = File::open(path)
        .map(BufReader::new)
        .map_err(storage_err(format!("Failed to open {}", path.display())))?;
    serde_json::from_reader(reader).map_err(storage_err(format!("Failed to parse {}", path.display())))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrueWageError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(storage_err(format!("Failed to create directory {}", parent.display())))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut writer = File::create(&temp_path)
        .map(BufWriter::new)
        .map_err(storage_err(format!("Failed to create {}", temp_path.display())))?;
    serde_json::to_writer_pretty(&mut writer, data).map_err(storage_err("Failed to serialize data"))?;
    writer.flush().map_err(storage_err("Failed to flush data"))?;
    writer.get_ref().sync_all().map_err(storage_err("Failed to sync data"))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_err(format!("Failed to replace {}", path.display()))(e));
    }

    tracing::debug!(path = %path.display(), "wrote json file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Snapshot {
        label: String,
        cents: i64,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let data: Snapshot = read_json(&path).unwrap();
        assert_eq!(data, Snapshot::default());
    }

    #[test]
    fn test_write_then_read_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("records.json");

        let data = Snapshot {
            label: "downtown".into(),
            cents: 200_000,
        };
        write_json_atomic(&path, &data).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
        let loaded: Snapshot = read_json(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_json::<Snapshot, _>(&path).unwrap_err();
        assert!(matches!(err, TrueWageError::Storage(_)));
    }

    #[test]
    fn test_write_under_a_file_names_the_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("data");
        fs::write(&blocker, "").unwrap();

        let err = write_json_atomic(blocker.join("records.json"), &Snapshot::default()).unwrap_err();
        match err {
            TrueWageError::Storage(msg) => assert!(msg.starts_with("Failed to create directory")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
