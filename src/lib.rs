//! TrueWage - what you really earn per hour once commuting is counted
//!
//! This library provides the core functionality for the `truewage` command-line
//! calculator. Take-home pay is normalized to an annual figure, commute costs
//! are netted out of it and commute time is added to the hours it pays for,
//! giving three hourly wages: nominal, cost-adjusted and true.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `engine`: Pure wage/cost computation (no I/O)
//! - `config`: Configuration, engine constants and path management
//! - `error`: Custom error types
//! - `models`: Core value types (money, pay, schedule, transport, results)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Plain-text report formatting
//! - `export`: JSON, CSV and YAML export
//! - `cli`: Command handlers
//! - `wizard`: Interactive console calculator
//!
//! # Example
//!
//! ```rust,ignore
//! use truewage_cli::config::EngineConfig;
//! use truewage_cli::engine::{Calculator, WageInputs};
//!
//! let config = EngineConfig::default();
//! let calculation = Calculator::new(&config).calculate(&inputs)?;
//! println!("{:.2}", calculation.result.true_wage);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod wizard;

pub use error::{TrueWageError, TrueWageResult};
