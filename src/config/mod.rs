//! Configuration module for TrueWage
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Engine constants (work weeks per year, affordability conventions)

pub mod engine;
pub mod paths;
pub mod settings;

pub use engine::EngineConfig;
pub use paths::TrueWagePaths;
pub use settings::Settings;
