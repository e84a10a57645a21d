//! Service layer for TrueWage
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, cascading deletes, and audit logging.

pub mod record;

pub use record::RecordService;
