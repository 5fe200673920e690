//! Timing summary report parsing

use once_cell::sync::Lazy;

use crate::core::error::Result;
use crate::core::types::TimingRecord;
use crate::extraction::pattern::{Delimiter, FieldRule, LabelPattern, ValueShape, compile_table};

/// Extraction table for timing summaries, in [`TimingRecord`] field order
pub const TIMING_RULES: [FieldRule; 5] = [
    FieldRule::new("wns", "WNS(ns)", Delimiter::Colon, ValueShape::SignedReal),
    FieldRule::new("tns", "TNS(ns)", Delimiter::Colon, ValueShape::SignedReal),
    FieldRule::new("whs", "WHS(ns)", Delimiter::Colon, ValueShape::SignedReal),
    FieldRule::new("ths", "THS(ns)", Delimiter::Colon, ValueShape::SignedReal),
    FieldRule::new(
        "failing_endpoints",
        "Failing Endpoints",
        Delimiter::Colon,
        ValueShape::Count,
    ),
];

static TIMING_PATTERNS: Lazy<Vec<LabelPattern>> = Lazy::new(|| {
    compile_table(&TIMING_RULES).expect("Failed to compile timing report patterns")
});

/// Parse one timing summary report. Missing labels leave defaults in place.
pub fn parse_timing_report(content: &str) -> Result<TimingRecord> {
    let [wns, tns, whs, ths, endpoints] = TIMING_PATTERNS.as_slice() else {
        unreachable!("timing table has five rules");
    };

    Ok(TimingRecord {
        wns: wns.extract(content)?,
        tns: tns.extract(content)?,
        whs: whs.extract(content)?,
        ths: ths.extract(content)?,
        failing_endpoints: endpoints.extract_or(content, 0)?,
    })
}
