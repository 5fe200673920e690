//! Core types and foundational components
//!
//! This module contains the record types, metric classification, error
//! handling, and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod status;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{PerfDashError, Result};
pub use status::Status;
pub use types::{
    AggregatedResult, PowerRecord, ReportCategory, Resource, ResourceUsage, TimingRecord,
    UtilizationRecord,
};
