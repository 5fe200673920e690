use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::core::constants::{defaults, reports};

/// Timing closure metrics extracted from one timing summary report.
///
/// Slack values are `None` when the report did not contain the label, which
/// keeps "unknown" distinct from a real `0.0` slack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Worst negative slack (ns)
    pub wns: Option<f64>,
    /// Total negative slack (ns)
    pub tns: Option<f64>,
    /// Worst hold slack (ns)
    pub whs: Option<f64>,
    /// Total hold slack (ns)
    pub ths: Option<f64>,
    /// Number of endpoints failing timing
    pub failing_endpoints: u64,
}

/// Used/available counts for one resource type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub used: u64,
    pub available: u64,
    /// Utilization as reported, in percent
    pub utilization: f64,
}

impl ResourceUsage {
    /// Capacity left over, never negative even for inconsistent reports
    pub fn remaining(&self) -> u64 {
        self.available.saturating_sub(self.used)
    }
}

/// Resource categories found in utilization reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Lut,
    Ff,
    Bram,
    Dsp,
}

impl Resource {
    pub const ALL: [Resource; 4] = [Resource::Lut, Resource::Ff, Resource::Bram, Resource::Dsp];

    /// Short name used in tiles and chart titles
    pub fn short_name(&self) -> &'static str {
        match self {
            Resource::Lut => "LUT",
            Resource::Ff => "FF",
            Resource::Bram => "BRAM",
            Resource::Dsp => "DSP",
        }
    }

    /// Key used in the JSON export
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Lut => "lut",
            Resource::Ff => "ff",
            Resource::Bram => "bram",
            Resource::Dsp => "dsp",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Resource utilization extracted from one utilization report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UtilizationRecord {
    pub lut: ResourceUsage,
    pub ff: ResourceUsage,
    pub bram: ResourceUsage,
    pub dsp: ResourceUsage,
}

impl UtilizationRecord {
    pub fn get(&self, resource: Resource) -> &ResourceUsage {
        match resource {
            Resource::Lut => &self.lut,
            Resource::Ff => &self.ff,
            Resource::Bram => &self.bram,
            Resource::Dsp => &self.dsp,
        }
    }

    pub fn get_mut(&mut self, resource: Resource) -> &mut ResourceUsage {
        match resource {
            Resource::Lut => &mut self.lut,
            Resource::Ff => &mut self.ff,
            Resource::Bram => &mut self.bram,
            Resource::Dsp => &mut self.dsp,
        }
    }

    /// Iterate resources in display order
    pub fn iter(&self) -> impl Iterator<Item = (Resource, &ResourceUsage)> {
        Resource::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// Power estimate extracted from one power report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    /// Total on-chip power (W)
    pub total_power: f64,
    /// Dynamic power (W)
    pub dynamic_power: f64,
    /// Device static power (W)
    pub static_power: f64,
    pub confidence: String,
}

impl Default for PowerRecord {
    fn default() -> Self {
        Self {
            total_power: 0.0,
            dynamic_power: 0.0,
            static_power: 0.0,
            confidence: defaults::POWER_CONFIDENCE.to_string(),
        }
    }
}

/// Report categories, each recognised by a keyword in the file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportCategory {
    Timing,
    Utilization,
    Power,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 3] = [
        ReportCategory::Timing,
        ReportCategory::Utilization,
        ReportCategory::Power,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            ReportCategory::Timing => reports::TIMING_KEYWORD,
            ReportCategory::Utilization => reports::UTILIZATION_KEYWORD,
            ReportCategory::Power => reports::POWER_KEYWORD,
        }
    }

    /// Whether a file name belongs to this category (case-sensitive keyword
    /// plus the report extension)
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        let Some((stem, extension)) = file_name.rsplit_once('.') else {
            return false;
        };
        !stem.is_empty() && extension == reports::EXTENSION && file_name.contains(self.keyword())
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Everything collected from one scan of a reports directory.
///
/// Maps are keyed by report identifier (file stem) and iterate in name order,
/// so the last entry of each map is the "latest" report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// ISO-8601 generation time
    pub timestamp: String,
    pub timing: BTreeMap<String, TimingRecord>,
    pub utilization: BTreeMap<String, UtilizationRecord>,
    pub power: BTreeMap<String, PowerRecord>,
}

impl AggregatedResult {
    /// Create an empty result stamped with the current local time
    pub fn new() -> Self {
        Self::with_timestamp(
            chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, false),
        )
    }

    pub fn with_timestamp(timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            ..Default::default()
        }
    }

    pub fn latest_timing(&self) -> Option<(&String, &TimingRecord)> {
        self.timing.iter().next_back()
    }

    pub fn latest_utilization(&self) -> Option<(&String, &UtilizationRecord)> {
        self.utilization.iter().next_back()
    }

    pub fn latest_power(&self) -> Option<(&String, &PowerRecord)> {
        self.power.iter().next_back()
    }

    /// Number of reports in a category
    pub fn count(&self, category: ReportCategory) -> usize {
        match category {
            ReportCategory::Timing => self.timing.len(),
            ReportCategory::Utilization => self.utilization.len(),
            ReportCategory::Power => self.power.len(),
        }
    }
}
