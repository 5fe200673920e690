//! Charts, dashboard and export
//!
//! This module turns aggregated report metrics into SVG charts, the HTML
//! dashboard and the JSON export, and holds the structured logging helpers.

pub mod charts;
pub mod dashboard;
pub mod export;
pub mod logging;
pub mod markup;

// Re-export commonly used items
pub use charts::{ChartSet, write_charts};
pub use dashboard::{DashboardData, DashboardError, HtmlDashboard};
pub use export::{export_json, read_json};
