use crate::core::constants::{artifacts, display};
use crate::core::error::PerfDashError;
use crate::core::status::Status;
use crate::core::types::{AggregatedResult, ReportCategory};
use crate::reporting::charts::{ChartSet, chart_file_name};
use crate::reporting::logging;
use crate::reporting::markup::escape_markup;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Page title
    pub const TITLE: &str = "FPGA Performance Dashboard";

    /// CSS class for tiles that carry no classification
    pub const NEUTRAL_CLASS: &str = "neutral";

    /// Element id of the embedded JSON data block
    pub const DATA_ELEMENT_ID: &str = "perfdash-data";
}

/// Data structure containing all information needed for dashboard generation
#[derive(Debug, Clone)]
pub struct DashboardData<'a> {
    /// Aggregated report metrics
    pub result: &'a AggregatedResult,
    /// Charts already written to the output directory
    pub charts: &'a ChartSet,
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {e}"),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {e}"),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

impl From<DashboardError> for PerfDashError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::FileWrite(e) => PerfDashError::Io(e),
            DashboardError::Serialization(msg) => PerfDashError::Dashboard(msg),
        }
    }
}

/// One metric tile
struct Tile {
    label: String,
    value: String,
    detail: Option<String>,
    class: &'static str,
}

/// HTML dashboard generator for aggregated report metrics
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write `dashboard.html` into `output_dir`, returning its path
    pub fn generate_dashboard(
        data: &DashboardData<'_>,
        output_dir: &Path,
    ) -> Result<PathBuf, DashboardError> {
        let html_content = Self::generate_html_content(data)?;
        let path = output_dir.join(artifacts::DASHBOARD_HTML);
        fs::write(&path, html_content)?;
        logging::log_artifact_written("dashboard", &path);
        Ok(path)
    }

    /// Generate the complete HTML document content
    fn generate_html_content(data: &DashboardData<'_>) -> Result<String, DashboardError> {
        let css_styles = Self::generate_css();
        let body_content = Self::generate_body_content(data);
        let data_section = Self::generate_data_section(data.result)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
    {}
    {}
</body>
</html>"#,
            dashboard_constants::TITLE,
            css_styles,
            body_content,
            data_section
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --pass-color: #2e7d32;
            --warning-color: #ef6c00;
            --fail-color: #c62828;
            --unknown-color: #757575;
            --bg-color: #f5f5f5;
            --card-bg: #ffffff;
            --border-color: #e0e0e0;
            --text-primary: #212121;
            --text-secondary: #616161;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: Arial, Helvetica, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.5;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
        }

        .header {
            text-align: center;
            margin-bottom: 2rem;
            padding: 1.5rem;
            background: #263238;
            color: white;
            border-radius: 8px;
        }

        .header h1 {
            font-size: 2rem;
            margin-bottom: 0.25rem;
        }

        .section {
            background: var(--card-bg);
            padding: 1.5rem;
            border-radius: 8px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
        }

        .section h2 {
            font-size: 1.4rem;
            margin-bottom: 1rem;
        }

        .section .latest {
            color: var(--text-secondary);
            font-size: 0.9rem;
            margin-bottom: 1rem;
        }

        .section .empty {
            color: var(--text-secondary);
            font-style: italic;
        }

        .metrics {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
            margin-bottom: 1.5rem;
        }

        .metric {
            padding: 1rem;
            border-radius: 8px;
            border: 1px solid var(--border-color);
            border-left-width: 6px;
        }

        .metric-value {
            font-size: 1.6rem;
            font-weight: 700;
        }

        .metric-label {
            color: var(--text-secondary);
            font-size: 0.85rem;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .metric-detail {
            color: var(--text-secondary);
            font-size: 0.8rem;
        }

        .pass { color: var(--pass-color); border-left-color: var(--pass-color); }
        .warning { color: var(--warning-color); border-left-color: var(--warning-color); }
        .fail { color: var(--fail-color); border-left-color: var(--fail-color); }
        .unknown { color: var(--unknown-color); border-left-color: var(--unknown-color); }
        .neutral { border-left-color: #1565c0; }

        .chart {
            width: 100%;
            height: auto;
            margin-bottom: 1.5rem;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            font-size: 0.9rem;
        }

        th, td {
            padding: 0.5rem 0.75rem;
            border-bottom: 1px solid var(--border-color);
            text-align: right;
        }

        th:first-child, td:first-child { text-align: left; }

        th {
            background: var(--bg-color);
            color: var(--text-secondary);
            font-weight: 600;
        }

        @media (max-width: 768px) {
            .container { padding: 1rem; }
            .header h1 { font-size: 1.5rem; }
            .metrics { grid-template-columns: 1fr; }
        }
        "#
    }

    /// Generate the main body content of the dashboard
    fn generate_body_content(data: &DashboardData<'_>) -> String {
        let header_section = Self::generate_header_section(&data.result.timestamp);
        let timing_section = Self::generate_timing_section(data);
        let utilization_section = Self::generate_utilization_section(data);
        let power_section = Self::generate_power_section(data);

        format!(
            r#"
            <div class="container">
                {header_section}
                {timing_section}
                {utilization_section}
                {power_section}
            </div>
            "#
        )
    }

    /// Generate the dashboard header section
    fn generate_header_section(timestamp: &str) -> String {
        format!(
            r#"
            <div class="header">
                <h1>{}</h1>
                <p>Generated on: {}</p>
            </div>
            "#,
            dashboard_constants::TITLE,
            escape_markup(timestamp)
        )
    }

    fn generate_timing_section(data: &DashboardData<'_>) -> String {
        let result = data.result;
        let Some((report_id, latest)) = result.latest_timing() else {
            return Self::generate_empty_section(ReportCategory::Timing);
        };

        let tiles = [
            Self::slack_tile("WNS", latest.wns),
            Self::slack_tile("TNS", latest.tns),
            Self::slack_tile("WHS", latest.whs),
            Tile {
                label: "Failing Endpoints".to_string(),
                value: latest.failing_endpoints.to_string(),
                detail: None,
                class: Status::for_failing_endpoints(latest.failing_endpoints).css_class(),
            },
        ];

        let rows = result
            .timing
            .iter()
            .map(|(id, record)| {
                let endpoints = Status::for_failing_endpoints(record.failing_endpoints);
                format!(
                    "<tr><td>{}</td>{}{}{}{}<td class=\"{}\">{}</td></tr>",
                    escape_markup(id),
                    Self::slack_cell(record.wns),
                    Self::slack_cell(record.tns),
                    Self::slack_cell(record.whs),
                    Self::slack_cell(record.ths),
                    endpoints.css_class(),
                    record.failing_endpoints
                )
            })
            .collect::<Vec<_>>();

        Self::generate_section(
            ReportCategory::Timing,
            data.charts,
            report_id,
            &tiles,
            &[
                "Report",
                "WNS (ns)",
                "TNS (ns)",
                "WHS (ns)",
                "THS (ns)",
                "Failing Endpoints",
            ],
            &rows,
        )
    }

    fn generate_utilization_section(data: &DashboardData<'_>) -> String {
        let result = data.result;
        let Some((report_id, latest)) = result.latest_utilization() else {
            return Self::generate_empty_section(ReportCategory::Utilization);
        };

        let tiles = latest
            .iter()
            .map(|(resource, usage)| Tile {
                label: format!("{resource} Utilization"),
                value: format!("{:.1}%", usage.utilization),
                detail: Some(format!("{} / {}", usage.used, usage.available)),
                class: Status::for_utilization(usage.utilization).css_class(),
            })
            .collect::<Vec<_>>();

        let rows = result
            .utilization
            .iter()
            .map(|(id, record)| {
                let cells = record
                    .iter()
                    .map(|(_, usage)| {
                        format!(
                            "<td class=\"{}\">{:.1}% ({} / {})</td>",
                            Status::for_utilization(usage.utilization).css_class(),
                            usage.utilization,
                            usage.used,
                            usage.available
                        )
                    })
                    .collect::<String>();
                format!("<tr><td>{}</td>{cells}</tr>", escape_markup(id))
            })
            .collect::<Vec<_>>();

        Self::generate_section(
            ReportCategory::Utilization,
            data.charts,
            report_id,
            &tiles,
            &["Report", "LUT", "FF", "BRAM", "DSP"],
            &rows,
        )
    }

    fn generate_power_section(data: &DashboardData<'_>) -> String {
        let result = data.result;
        let Some((report_id, latest)) = result.latest_power() else {
            return Self::generate_empty_section(ReportCategory::Power);
        };

        let power_tile = |label: &str, watts: f64| Tile {
            label: label.to_string(),
            value: format!("{watts:.2} W"),
            detail: None,
            class: dashboard_constants::NEUTRAL_CLASS,
        };
        let tiles = [
            power_tile("Total Power", latest.total_power),
            power_tile("Dynamic Power", latest.dynamic_power),
            power_tile("Static Power", latest.static_power),
            Tile {
                label: "Confidence".to_string(),
                value: escape_markup(&latest.confidence),
                detail: None,
                class: dashboard_constants::NEUTRAL_CLASS,
            },
        ];

        let rows = result
            .power
            .iter()
            .map(|(id, record)| {
                format!(
                    "<tr><td>{}</td><td>{:.2}</td><td>{:.2}</td><td>{:.2}</td><td>{}</td></tr>",
                    escape_markup(id),
                    record.total_power,
                    record.dynamic_power,
                    record.static_power,
                    escape_markup(&record.confidence)
                )
            })
            .collect::<Vec<_>>();

        Self::generate_section(
            ReportCategory::Power,
            data.charts,
            report_id,
            &tiles,
            &[
                "Report",
                "Total (W)",
                "Dynamic (W)",
                "Static (W)",
                "Confidence",
            ],
            &rows,
        )
    }

    fn section_title(category: ReportCategory) -> &'static str {
        match category {
            ReportCategory::Timing => "Timing Analysis",
            ReportCategory::Utilization => "Resource Utilization",
            ReportCategory::Power => "Power Analysis",
        }
    }

    /// Heading only, for a category without reports
    fn generate_empty_section(category: ReportCategory) -> String {
        format!(
            r#"
            <div class="section" id="{category}">
                <h2>{}</h2>
                <p class="empty">No {category} reports found</p>
            </div>
            "#,
            Self::section_title(category)
        )
    }

    fn generate_section(
        category: ReportCategory,
        charts: &ChartSet,
        latest_id: &str,
        tiles: &[Tile],
        headers: &[&str],
        rows: &[String],
    ) -> String {
        let title = Self::section_title(category);
        let tiles_html = tiles
            .iter()
            .map(Self::generate_tile)
            .collect::<Vec<_>>()
            .join("");
        let chart_html = match charts.for_category(category) {
            Some(_) => format!(
                r#"<img class="chart" src="{}" alt="{title}">"#,
                chart_file_name(category)
            ),
            None => String::new(),
        };
        let header_html = headers
            .iter()
            .map(|h| format!("<th>{h}</th>"))
            .collect::<String>();

        format!(
            r#"
            <div class="section" id="{category}">
                <h2>{title}</h2>
                <p class="latest">Latest report: {}</p>
                <div class="metrics">{tiles_html}</div>
                {chart_html}
                <table>
                    <thead><tr>{header_html}</tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
            "#,
            escape_markup(latest_id),
            rows.join("")
        )
    }

    /// Generate a single metric tile
    fn generate_tile(tile: &Tile) -> String {
        let detail = tile
            .detail
            .as_ref()
            .map(|d| format!(r#"<div class="metric-detail">{d}</div>"#))
            .unwrap_or_default();

        format!(
            r#"
            <div class="metric {}">
                <div class="metric-value">{}</div>
                <div class="metric-label">{}</div>
                {}
            </div>
            "#,
            tile.class, tile.value, tile.label, detail
        )
    }

    fn slack_tile(label: &str, slack: Option<f64>) -> Tile {
        Tile {
            label: label.to_string(),
            value: Self::format_slack(slack),
            detail: None,
            class: Status::for_slack(slack).css_class(),
        }
    }

    fn slack_cell(slack: Option<f64>) -> String {
        format!(
            "<td class=\"{}\">{}</td>",
            Status::for_slack(slack).css_class(),
            slack.map_or_else(|| display::NOT_AVAILABLE.to_string(), |v| format!("{v:.3}"))
        )
    }

    fn format_slack(slack: Option<f64>) -> String {
        match slack {
            Some(value) => format!("{value:.3} ns"),
            None => display::NOT_AVAILABLE.to_string(),
        }
    }

    /// Embed the aggregated result as JSON for scripts that scrape the page
    fn generate_data_section(result: &AggregatedResult) -> Result<String, DashboardError> {
        let json = serde_json::to_string(result)
            .map_err(|e| DashboardError::Serialization(e.to_string()))?;

        Ok(format!(
            r#"<script type="application/json" id="{}">{}</script>"#,
            dashboard_constants::DATA_ELEMENT_ID,
            json.replace("</", "<\\/")
        ))
    }
}
