//! SVG chart rendering for the dashboard.
//!
//! Each chart is a standalone SVG document built with `writeln!` into a
//! `String`. A category without reports produces no chart at all.

use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{artifacts, display};
use crate::core::status::Status;
use crate::core::types::{
    AggregatedResult, PowerRecord, ReportCategory, TimingRecord, UtilizationRecord,
};
use crate::reporting::dashboard::DashboardError;
use crate::reporting::logging;
use crate::reporting::markup::escape_markup;

/// Layout constants
mod chart_constants {
    pub const CANVAS_WIDTH: f64 = 1200.0;
    pub const TITLE_HEIGHT: f64 = 64.0;
    pub const PANEL_HEIGHT: f64 = 400.0;
    pub const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

    pub const AXIS_COLOR: &str = "#555555";
    pub const GRID_COLOR: &str = "#9e9e9e";
    pub const TEXT_COLOR: &str = "#333333";
    pub const AVAILABLE_COLOR: &str = "#90caf9";
    pub const DYNAMIC_COLOR: &str = "#ff7043";
    pub const STATIC_COLOR: &str = "#42a5f5";
    pub const TOTAL_COLOR: &str = "#5e35b1";
    pub const EMPTY_COLOR: &str = "#e0e0e0";

    /// Bars fill this share of their slot
    pub const BAR_FILL: f64 = 0.6;
    /// Headroom added above and below the data range
    pub const RANGE_PADDING: f64 = 0.1;
}

use chart_constants::*;

/// Chart files written for one dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSet {
    pub timing: Option<PathBuf>,
    pub utilization: Option<PathBuf>,
    pub power: Option<PathBuf>,
}

impl ChartSet {
    pub fn for_category(&self, category: ReportCategory) -> Option<&PathBuf> {
        match category {
            ReportCategory::Timing => self.timing.as_ref(),
            ReportCategory::Utilization => self.utilization.as_ref(),
            ReportCategory::Power => self.power.as_ref(),
        }
    }
}

/// Chart file name for a category
pub fn chart_file_name(category: ReportCategory) -> &'static str {
    match category {
        ReportCategory::Timing => artifacts::TIMING_CHART,
        ReportCategory::Utilization => artifacts::UTILIZATION_CHART,
        ReportCategory::Power => artifacts::POWER_CHART,
    }
}

/// Render and write every chart that has data. `output_dir` must exist.
pub fn write_charts(
    result: &AggregatedResult,
    output_dir: &Path,
) -> Result<ChartSet, DashboardError> {
    let mut charts = ChartSet::default();

    for category in ReportCategory::ALL {
        let svg = match category {
            ReportCategory::Timing => timing_chart(&result.timing),
            ReportCategory::Utilization => result
                .latest_utilization()
                .map(|(id, record)| utilization_chart(id, record)),
            ReportCategory::Power => power_chart(&result.power),
        };

        let Some(svg) = svg else {
            logging::log_chart_skipped(category);
            continue;
        };

        let path = output_dir.join(chart_file_name(category));
        fs::write(&path, svg)?;
        logging::log_artifact_written("chart", &path);

        match category {
            ReportCategory::Timing => charts.timing = Some(path),
            ReportCategory::Utilization => charts.utilization = Some(path),
            ReportCategory::Power => charts.power = Some(path),
        }
    }

    Ok(charts)
}

/// Bar charts of WNS, TNS, WHS and failing endpoints across all timing reports
pub fn timing_chart(timing: &BTreeMap<String, TimingRecord>) -> Option<String> {
    if timing.is_empty() {
        return None;
    }

    let endpoint_bars: Vec<Bar> = timing
        .iter()
        .map(|(id, record)| Bar {
            label: id,
            value: Some(record.failing_endpoints as f64),
            color: Status::for_failing_endpoints(record.failing_endpoints).chart_color(),
        })
        .collect();

    let mut svg = String::new();
    open_canvas(&mut svg, 2.0 * PANEL_HEIGHT, "Timing Analysis Dashboard");
    bar_panel(
        &mut svg,
        &Panel::grid(0),
        &BarSpec::slack("Worst Negative Slack (WNS)"),
        &slack_bars(timing, |r| r.wns),
    );
    bar_panel(
        &mut svg,
        &Panel::grid(1),
        &BarSpec::slack("Total Negative Slack (TNS)"),
        &slack_bars(timing, |r| r.tns),
    );
    bar_panel(
        &mut svg,
        &Panel::grid(2),
        &BarSpec::slack("Worst Hold Slack (WHS)"),
        &slack_bars(timing, |r| r.whs),
    );
    bar_panel(
        &mut svg,
        &Panel::grid(3),
        &BarSpec {
            title: "Failing Endpoints",
            y_label: "Count",
            zero_line: false,
            decimals: 0,
        },
        &endpoint_bars,
    );
    close_canvas(&mut svg);

    Some(svg)
}

/// Used vs. remaining pie for each resource of one utilization report
pub fn utilization_chart(report_id: &str, record: &UtilizationRecord) -> String {
    let mut svg = String::new();
    open_canvas(
        &mut svg,
        2.0 * PANEL_HEIGHT,
        &format!("Resource Utilization Dashboard ({report_id})"),
    );

    for (index, (resource, usage)) in record.iter().enumerate() {
        let used_color = Status::for_utilization(usage.utilization).chart_color();
        let used = usage.used as f64;
        let remaining = usage.remaining() as f64;
        let share = |value: f64| {
            let total = used + remaining;
            if total > 0.0 {
                value / total * 100.0
            } else {
                0.0
            }
        };

        pie_panel(
            &mut svg,
            &Panel::grid(index),
            &format!("{resource} Utilization"),
            &format!("({:.1}%)", usage.utilization),
            &[
                Slice {
                    label: "Used",
                    value: used,
                    text: format!("{:.1}%", share(used)),
                    color: used_color,
                },
                Slice {
                    label: "Available",
                    value: remaining,
                    text: format!("{:.1}%", share(remaining)),
                    color: AVAILABLE_COLOR,
                },
            ],
        );
    }

    close_canvas(&mut svg);
    svg
}

/// Dynamic/static breakdown of the latest power report plus a trend of all
/// power reports
pub fn power_chart(power: &BTreeMap<String, PowerRecord>) -> Option<String> {
    let (_, latest) = power.iter().next_back()?;

    let mut svg = String::new();
    open_canvas(&mut svg, PANEL_HEIGHT, "Power Analysis Dashboard");

    pie_panel(
        &mut svg,
        &Panel::grid(0),
        "Power Breakdown",
        &format!("Total: {:.2} W", latest.total_power),
        &[
            Slice {
                label: "Dynamic",
                value: latest.dynamic_power,
                text: format!("{:.2} W", latest.dynamic_power),
                color: DYNAMIC_COLOR,
            },
            Slice {
                label: "Static",
                value: latest.static_power,
                text: format!("{:.2} W", latest.static_power),
                color: STATIC_COLOR,
            },
        ],
    );

    let labels: Vec<&str> = power.keys().map(String::as_str).collect();
    line_panel(
        &mut svg,
        &Panel::grid(1),
        "Power Trend",
        &labels,
        &[
            Series {
                label: "Total Power",
                values: power.values().map(|r| r.total_power).collect(),
                color: TOTAL_COLOR,
                marker: Marker::Circle,
            },
            Series {
                label: "Dynamic Power",
                values: power.values().map(|r| r.dynamic_power).collect(),
                color: DYNAMIC_COLOR,
                marker: Marker::Square,
            },
            Series {
                label: "Static Power",
                values: power.values().map(|r| r.static_power).collect(),
                color: STATIC_COLOR,
                marker: Marker::Triangle,
            },
        ],
    );

    close_canvas(&mut svg);
    Some(svg)
}

struct Bar<'a> {
    label: &'a str,
    value: Option<f64>,
    color: &'static str,
}

struct BarSpec {
    title: &'static str,
    y_label: &'static str,
    zero_line: bool,
    decimals: usize,
}

impl BarSpec {
    fn slack(title: &'static str) -> Self {
        Self {
            title,
            y_label: "Slack (ns)",
            zero_line: true,
            decimals: 3,
        }
    }
}

struct Slice<'a> {
    label: &'a str,
    value: f64,
    text: String,
    color: &'static str,
}

#[derive(Clone, Copy)]
enum Marker {
    Circle,
    Square,
    Triangle,
}

struct Series<'a> {
    label: &'a str,
    values: Vec<f64>,
    color: &'static str,
    marker: Marker,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Panel {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Panel {
    /// Cell `index` of a two-column grid below the canvas title
    fn grid(index: usize) -> Self {
        let width = CANVAS_WIDTH / 2.0;
        Self {
            x: (index % 2) as f64 * width,
            y: TITLE_HEIGHT + (index / 2) as f64 * PANEL_HEIGHT,
            width,
            height: PANEL_HEIGHT,
        }
    }

    /// Inner plotting area, leaving room for title, axis and rotated labels
    fn plot_area(&self) -> Panel {
        Panel {
            x: self.x + 80.0,
            y: self.y + 50.0,
            width: self.width - 110.0,
            height: self.height - 140.0,
        }
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

fn slack_bars<'a>(
    timing: &'a BTreeMap<String, TimingRecord>,
    select: fn(&TimingRecord) -> Option<f64>,
) -> Vec<Bar<'a>> {
    timing
        .iter()
        .map(|(id, record)| {
            let value = select(record);
            Bar {
                label: id,
                value,
                color: Status::for_slack(value).chart_color(),
            }
        })
        .collect()
}

fn open_canvas(svg: &mut String, content_height: f64, title: &str) {
    let height = TITLE_HEIGHT + content_height;
    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{CANVAS_WIDTH:.0}' height='{height:.0}' viewBox='0 0 {CANVAS_WIDTH:.0} {height:.0}' font-family='{FONT_FAMILY}' role='img'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{CANVAS_WIDTH:.0}' height='{height:.0}' fill='#ffffff'/>"
    );
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='40' text-anchor='middle' font-size='24' font-weight='700' fill='{TEXT_COLOR}'>{}</text>",
        CANVAS_WIDTH / 2.0,
        escape_markup(title)
    );
}

fn close_canvas(svg: &mut String) {
    let _ = writeln!(svg, "</svg>");
}

fn panel_title(svg: &mut String, panel: &Panel, title: &str) {
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-size='16' font-weight='600' fill='{TEXT_COLOR}'>{}</text>",
        panel.center_x(),
        panel.y + 24.0,
        escape_markup(title)
    );
}

/// Value range including zero, padded so bars never touch the frame
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = 0.0_f64;
    let mut max = 0.0_f64;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }
    let pad = (max - min) * RANGE_PADDING;
    if max > 0.0 {
        max += pad;
    }
    if min < 0.0 {
        min -= pad;
    }
    (min, max)
}

fn x_label(svg: &mut String, x: f64, y: f64, label: &str) {
    let _ = writeln!(
        svg,
        "  <text transform='translate({x:.1} {y:.1}) rotate(-35)' text-anchor='end' font-size='11' fill='{TEXT_COLOR}'>{}</text>",
        escape_markup(label)
    );
}

fn y_axis(
    svg: &mut String,
    panel: &Panel,
    plot: &Panel,
    y_label: &str,
    ticks: &[(f64, String)],
) {
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
        plot.x,
        plot.y,
        plot.x,
        plot.bottom()
    );
    let _ = writeln!(
        svg,
        "  <text transform='translate({:.1} {:.1}) rotate(-90)' text-anchor='middle' font-size='12' fill='{TEXT_COLOR}'>{}</text>",
        panel.x + 20.0,
        plot.y + plot.height / 2.0,
        escape_markup(y_label)
    );
    for (y, text) in ticks {
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' text-anchor='end' font-size='10' fill='{TEXT_COLOR}'>{}</text>",
            plot.x - 6.0,
            y + 3.0,
            escape_markup(text)
        );
    }
}

fn bar_panel(svg: &mut String, panel: &Panel, spec: &BarSpec, bars: &[Bar<'_>]) {
    panel_title(svg, panel, spec.title);

    let plot = panel.plot_area();
    let (min, max) = value_range(bars.iter().filter_map(|bar| bar.value));
    let y_of = |v: f64| plot.y + (max - v) / (max - min) * plot.height;
    let zero_y = y_of(0.0);

    let mut ticks = vec![(y_of(max), format!("{max:.prec$}", prec = spec.decimals))];
    ticks.push((zero_y, format!("{:.prec$}", 0.0, prec = spec.decimals)));
    if min < 0.0 {
        ticks.push((y_of(min), format!("{min:.prec$}", prec = spec.decimals)));
    }
    y_axis(svg, panel, &plot, spec.y_label, &ticks);

    let slot = plot.width / bars.len().max(1) as f64;
    let bar_width = slot * BAR_FILL;

    for (index, bar) in bars.iter().enumerate() {
        let center = plot.x + slot * (index as f64 + 0.5);

        match bar.value {
            Some(value) => {
                let top = y_of(value.max(0.0));
                let bottom = y_of(value.min(0.0));
                let _ = writeln!(
                    svg,
                    "  <rect x='{:.1}' y='{top:.1}' width='{bar_width:.1}' height='{:.1}' fill='{}'/>",
                    center - bar_width / 2.0,
                    (bottom - top).max(1.0),
                    bar.color
                );
                let label_y = if value < 0.0 {
                    bottom + 12.0
                } else {
                    top - 4.0
                };
                let _ = writeln!(
                    svg,
                    "  <text x='{center:.1}' y='{label_y:.1}' text-anchor='middle' font-size='10' fill='{TEXT_COLOR}'>{value:.prec$}</text>",
                    prec = spec.decimals
                );
            }
            None => {
                let _ = writeln!(
                    svg,
                    "  <text x='{center:.1}' y='{:.1}' text-anchor='middle' font-size='11' font-style='italic' fill='{}'>{}</text>",
                    zero_y - 4.0,
                    bar.color,
                    display::NOT_AVAILABLE
                );
            }
        }

        x_label(svg, center, plot.bottom() + 14.0, bar.label);
    }

    if spec.zero_line {
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{zero_y:.1}' x2='{:.1}' y2='{zero_y:.1}' stroke='#000000' stroke-opacity='0.5' stroke-dasharray='6 4'/>",
            plot.x,
            plot.x + plot.width
        );
    } else {
        let _ = writeln!(
            svg,
            "  <line x1='{:.1}' y1='{zero_y:.1}' x2='{:.1}' y2='{zero_y:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
            plot.x,
            plot.x + plot.width
        );
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

fn pie_panel(svg: &mut String, panel: &Panel, title: &str, subtitle: &str, slices: &[Slice<'_>]) {
    panel_title(svg, panel, title);
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-size='13' fill='{TEXT_COLOR}'>{}</text>",
        panel.center_x(),
        panel.y + 44.0,
        escape_markup(subtitle)
    );

    let radius = ((panel.width.min(panel.height - 100.0)) / 2.0) * 0.8;
    let cx = panel.center_x();
    let cy = panel.y + 70.0 + (panel.height - 70.0) / 2.0;
    let total: f64 = slices.iter().map(|slice| slice.value.max(0.0)).sum();

    if total <= 0.0 {
        let _ = writeln!(
            svg,
            "  <circle cx='{cx:.1}' cy='{cy:.1}' r='{radius:.1}' fill='{EMPTY_COLOR}'/>"
        );
        let _ = writeln!(
            svg,
            "  <text x='{cx:.1}' y='{cy:.1}' text-anchor='middle' font-size='13' fill='{TEXT_COLOR}'>no data</text>"
        );
        return;
    }

    // Start at twelve o'clock and sweep clockwise
    let mut start = -PI / 2.0;
    for slice in slices.iter().filter(|slice| slice.value > 0.0) {
        let sweep = slice.value / total * TAU;
        let end = start + sweep;

        if sweep >= TAU - 1e-9 {
            let _ = writeln!(
                svg,
                "  <circle cx='{cx:.1}' cy='{cy:.1}' r='{radius:.1}' fill='{}' stroke='#ffffff' stroke-width='2'/>",
                slice.color
            );
        } else {
            let (x1, y1) = polar(cx, cy, radius, start);
            let (x2, y2) = polar(cx, cy, radius, end);
            let large_arc = u8::from(sweep > PI);
            let _ = writeln!(
                svg,
                "  <path d='M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z' fill='{}' stroke='#ffffff' stroke-width='2'/>",
                slice.color
            );
        }

        let mid = start + sweep / 2.0;
        let (tx, ty) = polar(cx, cy, radius * 0.6, mid);
        let _ = writeln!(
            svg,
            "  <text x='{tx:.1}' y='{:.1}' text-anchor='middle' font-size='12' font-weight='600' fill='#ffffff'>{}</text>",
            ty + 4.0,
            escape_markup(&slice.text)
        );
        let (lx, ly) = polar(cx, cy, radius * 1.15, mid);
        let anchor = if mid.cos() >= 0.0 { "start" } else { "end" };
        let _ = writeln!(
            svg,
            "  <text x='{lx:.1}' y='{:.1}' text-anchor='{anchor}' font-size='12' fill='{TEXT_COLOR}'>{}</text>",
            ly + 4.0,
            escape_markup(slice.label)
        );

        start = end;
    }
}

fn marker(svg: &mut String, marker: Marker, x: f64, y: f64, color: &str) {
    match marker {
        Marker::Circle => {
            let _ = writeln!(
                svg,
                "  <circle cx='{x:.1}' cy='{y:.1}' r='4' fill='{color}'/>"
            );
        }
        Marker::Square => {
            let _ = writeln!(
                svg,
                "  <rect x='{:.1}' y='{:.1}' width='8' height='8' fill='{color}'/>",
                x - 4.0,
                y - 4.0
            );
        }
        Marker::Triangle => {
            let _ = writeln!(
                svg,
                "  <path d='M {x:.1} {:.1} L {:.1} {:.1} L {:.1} {:.1} Z' fill='{color}'/>",
                y - 5.0,
                x + 5.0,
                y + 4.0,
                x - 5.0,
                y + 4.0
            );
        }
    }
}

fn line_panel(
    svg: &mut String,
    panel: &Panel,
    title: &str,
    labels: &[&str],
    series: &[Series<'_>],
) {
    panel_title(svg, panel, title);

    let plot = panel.plot_area();
    let (_, max) = value_range(series.iter().flat_map(|s| s.values.iter().copied()));
    let y_of = |v: f64| plot.y + (max - v) / max * plot.height;
    let slot = plot.width / labels.len().max(1) as f64;
    let x_of = |index: usize| plot.x + slot * (index as f64 + 0.5);

    y_axis(
        svg,
        panel,
        &plot,
        "Power (W)",
        &[
            (y_of(max), format!("{max:.2}")),
            (y_of(0.0), "0.00".to_string()),
        ],
    );
    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{AXIS_COLOR}' stroke-width='1'/>",
        plot.x,
        plot.bottom(),
        plot.x + plot.width,
        plot.bottom()
    );

    for s in series {
        let points: Vec<String> = s
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{:.1},{:.1}", x_of(index), y_of(*value)))
            .collect();
        let _ = writeln!(
            svg,
            "  <polyline points='{}' fill='none' stroke='{}' stroke-width='2'/>",
            points.join(" "),
            s.color
        );
        for (index, value) in s.values.iter().enumerate() {
            marker(svg, s.marker, x_of(index), y_of(*value), s.color);
        }
    }

    for (index, label) in labels.iter().enumerate() {
        x_label(svg, x_of(index), plot.bottom() + 14.0, label);
    }
    let _ = writeln!(
        svg,
        "  <text x='{:.1}' y='{:.1}' text-anchor='middle' font-size='12' fill='{TEXT_COLOR}'>Report</text>",
        plot.x + plot.width / 2.0,
        panel.bottom() - 8.0
    );

    // Legend, top right of the plot
    for (index, s) in series.iter().enumerate() {
        let y = plot.y + 8.0 + index as f64 * 16.0;
        let x = plot.x + plot.width - 120.0;
        let _ = writeln!(
            svg,
            "  <line x1='{x:.1}' y1='{y:.1}' x2='{:.1}' y2='{y:.1}' stroke='{}' stroke-width='2'/>",
            x + 18.0,
            s.color
        );
        marker(svg, s.marker, x + 9.0, y, s.color);
        let _ = writeln!(
            svg,
            "  <text x='{:.1}' y='{:.1}' font-size='11' fill='{TEXT_COLOR}'>{}</text>",
            x + 24.0,
            y + 4.0,
            escape_markup(s.label)
        );
    }

    let _ = writeln!(
        svg,
        "  <line x1='{:.1}' y1='{:.1}' x2='{:.1}' y2='{:.1}' stroke='{GRID_COLOR}' stroke-opacity='0.4' stroke-dasharray='2 3'/>",
        plot.x,
        y_of(max / 2.0),
        plot.x + plot.width,
        y_of(max / 2.0)
    );
}
