//! User settings for TrueWage
//!
//! Manages user preferences and the engine constants stored in `config.json`.

use serde::{Deserialize, Serialize};

use super::engine::EngineConfig;
use super::paths::TrueWagePaths;
use crate::error::TrueWageError;
use crate::models::PayFrequency;

/// User settings for TrueWage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Pay frequency assumed when none is given on the command line
    #[serde(default = "default_frequency")]
    pub default_frequency: PayFrequency,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Engine constants
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_frequency() -> PayFrequency {
    PayFrequency::Biweekly
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_frequency: default_frequency(),
            currency_symbol: default_currency(),
            engine: EngineConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrueWagePaths) -> Result<Self, TrueWageError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrueWageError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrueWageError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.engine.validate()?;
            tracing::debug!(path = %settings_path.display(), "loaded settings");

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrueWagePaths) -> Result<(), TrueWageError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrueWageError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TrueWageError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
