//! Pass/warning/fail classification of metrics

use std::fmt;

use crate::core::constants::{display, thresholds};

/// Classification of a single metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Warning,
    Fail,
    /// The report did not contain the value
    Unknown,
}

impl Status {
    /// Negative slack is a violation; a missing slack is unknown
    pub fn for_slack(slack: Option<f64>) -> Self {
        match slack {
            Some(value) if value < thresholds::SLACK_VIOLATION_NS => Status::Fail,
            Some(_) => Status::Pass,
            None => Status::Unknown,
        }
    }

    /// `< 80` pass, `[80, 95)` warning, `>= 95` fail
    pub fn for_utilization(percent: f64) -> Self {
        if percent < thresholds::UTILIZATION_WARNING_PERCENT {
            Status::Pass
        } else if percent < thresholds::UTILIZATION_FAIL_PERCENT {
            Status::Warning
        } else {
            Status::Fail
        }
    }

    pub fn for_failing_endpoints(count: u64) -> Self {
        if count == 0 {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    /// CSS class used by the dashboard
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warning => "warning",
            Status::Fail => "fail",
            Status::Unknown => "unknown",
        }
    }

    /// Fill color used by the charts
    pub fn chart_color(&self) -> &'static str {
        match self {
            Status::Pass => "#2e7d32",
            Status::Warning => "#ef6c00",
            Status::Fail => "#c62828",
            Status::Unknown => "#9e9e9e",
        }
    }

    pub fn mark(&self) -> &'static str {
        match self {
            Status::Pass => display::PASS_MARK,
            Status::Warning => display::WARNING_MARK,
            Status::Fail => display::FAIL_MARK,
            Status::Unknown => display::UNKNOWN_MARK,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}
