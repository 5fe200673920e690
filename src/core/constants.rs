/// Application-wide constants to avoid magic values throughout the codebase.
///
/// Report label text lives next to the parsers in `extraction`; everything else
/// that is a fixed literal (file names, thresholds, defaults) lives here.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful summary of the latest reports
    pub const TEXT: &str = "text";
    /// JSON output format - the aggregated result printed to stdout
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per metric
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Report discovery constants
pub mod reports {
    /// Extension every report file must carry
    pub const EXTENSION: &str = "rpt";
    /// File name keyword for timing summary reports
    pub const TIMING_KEYWORD: &str = "timing";
    /// File name keyword for utilization reports
    pub const UTILIZATION_KEYWORD: &str = "utilization";
    /// File name keyword for power reports
    pub const POWER_KEYWORD: &str = "power";
}

/// Output artifact names
pub mod artifacts {
    /// Default dashboard output directory
    pub const DEFAULT_OUTPUT_DIR: &str = "dashboard";
    /// Dashboard page written into the output directory
    pub const DASHBOARD_HTML: &str = "dashboard.html";
    /// Timing bar charts
    pub const TIMING_CHART: &str = "timing_analysis.svg";
    /// Utilization pie charts
    pub const UTILIZATION_CHART: &str = "utilization.svg";
    /// Power breakdown and trend charts
    pub const POWER_CHART: &str = "power_analysis.svg";
}

/// Pass/warning/fail classification thresholds. Fixed, not configurable.
pub mod thresholds {
    /// Utilization below this percentage passes
    pub const UTILIZATION_WARNING_PERCENT: f64 = 80.0;
    /// Utilization at or above this percentage fails
    pub const UTILIZATION_FAIL_PERCENT: f64 = 95.0;
    /// Slack below this value (ns) is a violation
    pub const SLACK_VIOLATION_NS: f64 = 0.0;
}

/// Default record values
pub mod defaults {
    /// Power confidence label; reports are not mined for it
    pub const POWER_CONFIDENCE: &str = "Low";
}

/// Configuration file lookup
pub mod config_files {
    /// Config file searched in the working directory and its parents
    pub const FILE_NAME: &str = ".perfdash.toml";
    /// How many parent directories are searched
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

/// Display constants
pub mod display {
    /// Marker for a passing metric
    pub const PASS_MARK: &str = "✔";
    /// Marker for a metric close to its limit
    pub const WARNING_MARK: &str = "▲";
    /// Marker for a failing metric
    pub const FAIL_MARK: &str = "✘";
    /// Marker for a metric the report did not contain
    pub const UNKNOWN_MARK: &str = "?";
    /// Placeholder text for an unknown value
    pub const NOT_AVAILABLE: &str = "n/a";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_report_constants() {
        assert_eq!(reports::EXTENSION, "rpt");
        assert_eq!(reports::TIMING_KEYWORD, "timing");
        assert_eq!(reports::UTILIZATION_KEYWORD, "utilization");
        assert_eq!(reports::POWER_KEYWORD, "power");
    }

    #[test]
    fn test_artifact_names() {
        assert_eq!(artifacts::DASHBOARD_HTML, "dashboard.html");
        assert_eq!(artifacts::TIMING_CHART, "timing_analysis.svg");
        assert_eq!(artifacts::UTILIZATION_CHART, "utilization.svg");
        assert_eq!(artifacts::POWER_CHART, "power_analysis.svg");
        assert_eq!(artifacts::DEFAULT_OUTPUT_DIR, "dashboard");
    }

    #[test]
    fn test_threshold_constants() {
        assert_eq!(thresholds::UTILIZATION_WARNING_PERCENT, 80.0);
        assert_eq!(thresholds::UTILIZATION_FAIL_PERCENT, 95.0);
        assert_eq!(thresholds::SLACK_VIOLATION_NS, 0.0);
    }
}
