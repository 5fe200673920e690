//! Power report parsing

use once_cell::sync::Lazy;

use crate::core::error::Result;
use crate::core::types::PowerRecord;
use crate::extraction::pattern::{Delimiter, FieldRule, LabelPattern, ValueShape, compile_table};

pub const POWER_RULES: [FieldRule; 3] = [
    FieldRule::new(
        "total_power",
        "Total On-Chip Power (W)",
        Delimiter::Pipe,
        ValueShape::UnsignedReal,
    ),
    FieldRule::new(
        "dynamic_power",
        "Dynamic (W)",
        Delimiter::Pipe,
        ValueShape::UnsignedReal,
    ),
    FieldRule::new(
        "static_power",
        "Device Static (W)",
        Delimiter::Pipe,
        ValueShape::UnsignedReal,
    ),
];

static POWER_PATTERNS: Lazy<Vec<LabelPattern>> =
    Lazy::new(|| compile_table(&POWER_RULES).expect("Failed to compile power report patterns"));

/// Parse one power report. The confidence label is left at its default.
pub fn parse_power_report(content: &str) -> Result<PowerRecord> {
    let [total, dynamic, device_static] = POWER_PATTERNS.as_slice() else {
        unreachable!("power table has three rules");
    };

    Ok(PowerRecord {
        total_power: total.extract_or(content, 0.0)?,
        dynamic_power: dynamic.extract_or(content, 0.0)?,
        static_power: device_static.extract_or(content, 0.0)?,
        ..Default::default()
    })
}
