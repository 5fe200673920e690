//! Report discovery and collection
//!
//! This module finds report files in a directory and aggregates
//! their parsed records by category.

pub mod collector;
pub mod path_utils;

// Re-export commonly used items
pub use collector::{Collector, ReportCollector};
pub use path_utils::{list_report_files, report_id};
