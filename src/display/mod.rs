//! Display formatting for terminal output
//!
//! Plain-text reports for calculations and projections, plus tables for
//! saved records.

pub mod projection;
pub mod record;
pub mod report;
pub mod wage;

pub use projection::format_projection;
pub use record::{format_projection_list, format_record_details, format_record_list};
pub use wage::{format_advisories, format_calculation, format_quick_summary};
