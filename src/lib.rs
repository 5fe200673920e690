//! perfdash turns FPGA/EDA timing, utilization and power reports into a
//! static dashboard (SVG charts plus an HTML page) and an optional JSON export.

pub mod config;
pub mod core;
pub mod discovery;
pub mod extraction;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use crate::core::{
    AggregatedResult, PerfDashError, PowerRecord, ReportCategory, Resource, ResourceUsage,
    Result, Status, TimingRecord, UtilizationRecord,
};
pub use discovery::{Collector, ReportCollector};
pub use extraction::{parse_power_report, parse_timing_report, parse_utilization_report};
pub use reporting::{ChartSet, HtmlDashboard, export_json, read_json, write_charts};
