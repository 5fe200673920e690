//! Report text extraction
//!
//! This module turns the raw text of timing, utilization and power reports
//! into typed records using static label tables.

pub mod pattern;
pub mod power;
pub mod timing;
pub mod utilization;

// Re-export commonly used items
pub use pattern::{Delimiter, FieldRule, LabelPattern, TableRow, ValueShape};
pub use power::parse_power_report;
pub use timing::parse_timing_report;
pub use utilization::parse_utilization_report;
