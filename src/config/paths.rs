//! Path management for TrueWage
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `TRUEWAGE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/truewage` or `~/.config/truewage`
//! 3. Windows: `%APPDATA%\truewage`

use std::path::PathBuf;

use crate::error::TrueWageError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TRUEWAGE_DATA_DIR";

/// Manages all paths used by TrueWage
#[derive(Debug, Clone)]
pub struct TrueWagePaths {
    /// Base directory for all TrueWage data
    base_dir: PathBuf,
}

impl TrueWagePaths {
    /// Create a new TrueWagePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrueWageError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrueWagePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/truewage/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/truewage/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to records.json (saved calculations)
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Get the path to projections.json (expense projections per record)
    pub fn projections_file(&self) -> PathBuf {
        self.data_dir().join("projections.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TrueWageError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrueWageError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrueWageError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if TrueWage has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrueWageError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("truewage"));
    }

    let base = directories::BaseDirs::new()
        .ok_or_else(|| TrueWageError::Config("Could not determine home directory".into()))?;
    Ok(base.home_dir().join(".config").join("truewage"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrueWageError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrueWageError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("truewage"))
}
