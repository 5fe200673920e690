//! Console summary output for perfdash

use std::fmt::Write;
use std::path::Path;

use crate::core::constants::{artifacts, display, output_formats};
use crate::core::error::Result;
use crate::core::status::Status;
use crate::core::types::{AggregatedResult, ReportCategory};
use crate::reporting::export;
use crate::ui::color::{Colors, colorize, heading, status_color};

/// Print the summary of the aggregated result in the requested format
pub fn display_summary(result: &AggregatedResult, output_format: &str, quiet: bool) -> Result<()> {
    match output_format {
        output_formats::MINIMAL => print!("{}", format_minimal_summary(result)),
        output_formats::JSON => println!("{}", export::to_json_string(result)?),
        _ => {
            if !quiet {
                print!("{}", format_text_summary(result));
            }
        }
    }
    Ok(())
}

/// Tell the user where the dashboard was written
pub fn display_completion_message(output_dir: &Path, output_format: &str, quiet: bool) {
    if quiet || output_format != output_formats::TEXT {
        return;
    }

    println!(
        "{}",
        colorize(
            &format!("Dashboard generated in: {}", output_dir.display()),
            Colors::BRIGHT_GREEN
        )
    );
    println!(
        "Open {} in your browser",
        output_dir.join(artifacts::DASHBOARD_HTML).display()
    );
}

/// Slack value with unit, or the not-available marker
fn format_slack(slack: Option<f64>) -> String {
    slack.map_or_else(
        || display::NOT_AVAILABLE.to_string(),
        |v| format!("{v:.3} ns"),
    )
}

fn metric_line(out: &mut String, status: Option<Status>, label: &str, value: &str) {
    match status {
        Some(status) => {
            let color = status_color(status);
            let _ = writeln!(
                out,
                "  {} {}: {}",
                colorize(status.mark(), color),
                label,
                colorize(value, color)
            );
        }
        None => {
            let _ = writeln!(
                out,
                "  {} {}: {}",
                colorize("•", Colors::BRIGHT_BLUE),
                label,
                value
            );
        }
    }
}

fn section_heading(
    out: &mut String,
    category: ReportCategory,
    latest: Option<&String>,
    count: usize,
) {
    let title = match category {
        ReportCategory::Timing => "Timing",
        ReportCategory::Utilization => "Utilization",
        ReportCategory::Power => "Power",
    };
    match latest {
        Some(id) => {
            let _ = writeln!(
                out,
                "{} {}",
                heading(title, Colors::BRIGHT_CYAN),
                colorize(&format!("({id}, {count} report(s))"), Colors::DIM)
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                heading(title, Colors::BRIGHT_CYAN),
                colorize(&format!("(no {category} reports)"), Colors::DIM)
            );
        }
    }
}

/// Colored summary of the latest report per category
pub fn format_text_summary(result: &AggregatedResult) -> String {
    let mut out = String::new();

    let latest = result.latest_timing();
    section_heading(
        &mut out,
        ReportCategory::Timing,
        latest.map(|(id, _)| id),
        result.timing.len(),
    );
    if let Some((_, timing)) = latest {
        for (label, slack) in [
            ("WNS", timing.wns),
            ("TNS", timing.tns),
            ("WHS", timing.whs),
            ("THS", timing.ths),
        ] {
            let status = Status::for_slack(slack);
            metric_line(&mut out, Some(status), label, &format_slack(slack));
        }
        metric_line(
            &mut out,
            Some(Status::for_failing_endpoints(timing.failing_endpoints)),
            "Failing Endpoints",
            &timing.failing_endpoints.to_string(),
        );
    }

    let latest = result.latest_utilization();
    section_heading(
        &mut out,
        ReportCategory::Utilization,
        latest.map(|(id, _)| id),
        result.utilization.len(),
    );
    if let Some((_, utilization)) = latest {
        for (resource, usage) in utilization.iter() {
            metric_line(
                &mut out,
                Some(Status::for_utilization(usage.utilization)),
                resource.short_name(),
                &format!(
                    "{:.1}% ({} / {})",
                    usage.utilization, usage.used, usage.available
                ),
            );
        }
    }

    let latest = result.latest_power();
    section_heading(
        &mut out,
        ReportCategory::Power,
        latest.map(|(id, _)| id),
        result.power.len(),
    );
    if let Some((_, power)) = latest {
        for (label, watts) in [
            ("Total", power.total_power),
            ("Dynamic", power.dynamic_power),
            ("Static", power.static_power),
        ] {
            metric_line(&mut out, None, label, &format!("{watts:.2} W"));
        }
        metric_line(&mut out, None, "Confidence", &power.confidence);
    }

    out
}

fn minimal_slack(slack: Option<f64>) -> String {
    slack.map_or_else(|| display::NOT_AVAILABLE.to_string(), |v| v.to_string())
}

/// One plain `category report metric value` line per metric, for every report
pub fn format_minimal_summary(result: &AggregatedResult) -> String {
    let mut out = String::new();

    for (id, timing) in &result.timing {
        let _ = writeln!(out, "timing {id} wns {}", minimal_slack(timing.wns));
        let _ = writeln!(out, "timing {id} tns {}", minimal_slack(timing.tns));
        let _ = writeln!(out, "timing {id} whs {}", minimal_slack(timing.whs));
        let _ = writeln!(out, "timing {id} ths {}", minimal_slack(timing.ths));
        let _ = writeln!(
            out,
            "timing {id} failing_endpoints {}",
            timing.failing_endpoints
        );
    }

    for (id, utilization) in &result.utilization {
        for (resource, usage) in utilization.iter() {
            let _ = writeln!(
                out,
                "utilization {id} {} {} {} {}",
                resource.key(),
                usage.used,
                usage.available,
                usage.utilization
            );
        }
    }

    for (id, power) in &result.power {
        let _ = writeln!(out, "power {id} total_power {}", power.total_power);
        let _ = writeln!(out, "power {id} dynamic_power {}", power.dynamic_power);
        let _ = writeln!(out, "power {id} static_power {}", power.static_power);
    }

    out
}
