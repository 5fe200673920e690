//! Utilization report parsing

use once_cell::sync::Lazy;

use crate::core::error::Result;
use crate::core::types::{Resource, ResourceUsage, UtilizationRecord};
use crate::extraction::pattern::{FieldRule, LabelPattern};

/// Row labels exactly as the implementation tool prints them
pub const UTILIZATION_RULES: [(Resource, FieldRule); 4] = [
    (Resource::Lut, FieldRule::row("lut", "CLB LUTs")),
    (Resource::Ff, FieldRule::row("ff", "CLB Registers")),
    (Resource::Bram, FieldRule::row("bram", "Block RAM Tile")),
    (Resource::Dsp, FieldRule::row("dsp", "DSPs")),
];

static UTILIZATION_PATTERNS: Lazy<Vec<(Resource, LabelPattern)>> = Lazy::new(|| {
    UTILIZATION_RULES
        .iter()
        .map(|(resource, rule)| rule.compile().map(|pattern| (*resource, pattern)))
        .collect::<Result<_>>()
        .expect("Failed to compile utilization report patterns")
});

/// Parse one utilization report. Resources without a row stay all-zero.
pub fn parse_utilization_report(content: &str) -> Result<UtilizationRecord> {
    let mut record = UtilizationRecord::default();

    for (resource, pattern) in UTILIZATION_PATTERNS.iter() {
        if let Some(row) = pattern.extract_row(content)? {
            *record.get_mut(*resource) = ResourceUsage {
                used: row.used,
                available: row.available,
                utilization: row.percent,
            };
        }
    }

    Ok(record)
}
