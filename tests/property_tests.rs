//! Property-based tests for perfdash using proptest
//!
//! These tests generate random report values and layouts to check that
//! extraction, classification and export hold across a wide input range.

use perfdash::reporting::export::{from_json_str, to_json_string};
use perfdash::{
    AggregatedResult, PowerRecord, ResourceUsage, Status, TimingRecord, UtilizationRecord,
    parse_power_report, parse_timing_report, parse_utilization_report,
};
use proptest::prelude::*;

/// Decimal strings as they appear in reports: optional sign, digits, optional fraction
fn signed_decimal_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), 0u32..100_000, prop::option::of(0u32..1000)).prop_map(
        |(negative, whole, fraction)| {
            let sign = if negative { "-" } else { "" };
            match fraction {
                Some(fraction) => format!("{sign}{whole}.{fraction:03}"),
                None => format!("{sign}{whole}"),
            }
        },
    )
}

/// Text that never contains any of the labels the parsers look for
fn unlabeled_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(r"[a-z ]{0,40}", 0..20)
        .prop_map(|lines| lines.join("\n"))
}

fn slack_strategy() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(-1.0e6f64..1.0e6)
}

fn timing_strategy() -> impl Strategy<Value = TimingRecord> {
    (
        slack_strategy(),
        slack_strategy(),
        slack_strategy(),
        slack_strategy(),
        any::<u32>(),
    )
        .prop_map(|(wns, tns, whs, ths, endpoints)| TimingRecord {
            wns,
            tns,
            whs,
            ths,
            failing_endpoints: u64::from(endpoints),
        })
}

fn usage_strategy() -> impl Strategy<Value = ResourceUsage> {
    (any::<u32>(), any::<u32>(), 0.0f64..200.0).prop_map(|(used, available, utilization)| {
        ResourceUsage {
            used: u64::from(used),
            available: u64::from(available),
            utilization,
        }
    })
}

fn power_strategy() -> impl Strategy<Value = PowerRecord> {
    (0.0f64..1000.0, 0.0f64..1000.0, 0.0f64..1000.0).prop_map(
        |(total_power, dynamic_power, static_power)| PowerRecord {
            total_power,
            dynamic_power,
            static_power,
            ..Default::default()
        },
    )
}

fn report_id_strategy() -> impl Strategy<Value = String> {
    r"[a-z][a-z0-9_]{0,15}"
}

fn aggregated_strategy() -> impl Strategy<Value = AggregatedResult> {
    (
        prop::collection::btree_map(report_id_strategy(), timing_strategy(), 0..4),
        prop::collection::btree_map(
            report_id_strategy(),
            (
                usage_strategy(),
                usage_strategy(),
                usage_strategy(),
                usage_strategy(),
            )
                .prop_map(|(lut, ff, bram, dsp)| UtilizationRecord {
                    lut,
                    ff,
                    bram,
                    dsp,
                }),
            0..4,
        ),
        prop::collection::btree_map(report_id_strategy(), power_strategy(), 0..4),
    )
        .prop_map(|(timing, utilization, power)| AggregatedResult {
            timestamp: "2025-01-01T00:00:00.000000+00:00".to_string(),
            timing,
            utilization,
            power,
        })
}

proptest! {
    #[test]
    fn test_wns_extracts_literal_value(value in signed_decimal_strategy(), prefix in unlabeled_text_strategy()) {
        let content = format!("{prefix}\nWNS(ns): {value}\n");
        let record = parse_timing_report(&content).unwrap();
        prop_assert_eq!(record.wns, Some(value.parse::<f64>().unwrap()));
    }

    #[test]
    fn test_any_f64_round_trips_through_timing_report(value in -1.0e9f64..1.0e9) {
        // Display never uses exponent notation, so it fits the report pattern
        let content = format!("WNS(ns): {value}\nTNS(ns): {value}\n");
        let record = parse_timing_report(&content).unwrap();
        prop_assert_eq!(record.wns, Some(value));
        prop_assert_eq!(record.tns, Some(value));
    }

    #[test]
    fn test_unlabeled_text_yields_defaults(content in unlabeled_text_strategy()) {
        prop_assert_eq!(parse_timing_report(&content).unwrap(), TimingRecord::default());
        prop_assert_eq!(parse_utilization_report(&content).unwrap(), UtilizationRecord::default());
        prop_assert_eq!(parse_power_report(&content).unwrap(), PowerRecord::default());
    }

    #[test]
    fn test_utilization_row_extracts_columns(
        used in any::<u32>(),
        fixed in 0u32..1000,
        available in any::<u32>(),
        whole in 0u32..100,
        fraction in 0u32..10,
        padding in 0usize..8,
    ) {
        let pad = " ".repeat(padding);
        let content = format!(
            "|{pad}DSPs{pad}|{pad}{used}{pad}|{pad}{fixed}{pad}|{pad}{available}{pad}|{pad}{whole}.{fraction}{pad}|\n"
        );

        let record = parse_utilization_report(&content).unwrap();

        prop_assert_eq!(record.dsp.used, u64::from(used));
        prop_assert_eq!(record.dsp.available, u64::from(available));
        prop_assert_eq!(record.dsp.utilization, format!("{whole}.{fraction}").parse::<f64>().unwrap());
        prop_assert_eq!(record.lut, ResourceUsage::default());
    }

    #[test]
    fn test_power_total_extracts_value(whole in 0u32..10_000, fraction in 0u32..1000) {
        let literal = format!("{whole}.{fraction:03}");
        let content = format!("| Total On-Chip Power (W) | {literal} |\n");
        let record = parse_power_report(&content).unwrap();
        prop_assert_eq!(record.total_power, literal.parse::<f64>().unwrap());
        prop_assert_eq!(record.confidence, "Low");
    }

    #[test]
    fn test_utilization_classification_is_monotonic(a in 0.0f64..200.0, b in 0.0f64..200.0) {
        let rank = |status: Status| match status {
            Status::Pass => 0,
            Status::Warning => 1,
            Status::Fail => 2,
            Status::Unknown => unreachable!(),
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(Status::for_utilization(low)) <= rank(Status::for_utilization(high)));
    }

    #[test]
    fn test_slack_classification_follows_sign(value in -1.0e6f64..1.0e6) {
        let expected = if value < 0.0 { Status::Fail } else { Status::Pass };
        prop_assert_eq!(Status::for_slack(Some(value)), expected);
    }

    #[test]
    fn test_json_round_trip_reproduces_every_value(result in aggregated_strategy()) {
        let json = to_json_string(&result).unwrap();
        let restored = from_json_str(&json).unwrap();
        prop_assert_eq!(restored, result);
    }
}
