use log::debug;

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::types::{AggregatedResult, ReportCategory};
use crate::discovery::path_utils::{list_report_files, report_id};
use crate::extraction::{parse_power_report, parse_timing_report, parse_utilization_report};
use crate::reporting::logging;

pub trait ReportCollector {
    fn collect(&self, reports_dir: &Path) -> Result<AggregatedResult>;
}

/// Scans one reports directory and parses every timing, utilization and
/// power report it finds.
#[derive(Default, Debug)]
pub struct Collector {
    recursive: bool,
}

impl ReportCollector for Collector {
    fn collect(&self, reports_dir: &Path) -> Result<AggregatedResult> {
        let report_files = list_report_files(reports_dir, self.recursive)?;
        logging::log_file_info(report_files.len(), &report_files);

        let mut result = AggregatedResult::new();

        for category in ReportCategory::ALL {
            for path in Self::files_in_category(&report_files, category) {
                Self::collect_file(&mut result, category, path)?;
            }
            logging::log_category_summary(category, result.count(category));
        }

        Ok(result)
    }
}

impl Collector {
    pub fn new(recursive: bool) -> Self {
        Self { recursive }
    }

    /// Files whose name carries the category keyword, in enumeration order
    fn files_in_category(
        report_files: &[PathBuf],
        category: ReportCategory,
    ) -> impl Iterator<Item = &PathBuf> {
        report_files.iter().filter(move |path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| category.matches_file_name(name))
        })
    }

    /// Parse one report into its category map. A repeated identifier
    /// replaces the earlier entry.
    fn collect_file(
        result: &mut AggregatedResult,
        category: ReportCategory,
        path: &Path,
    ) -> Result<()> {
        let Some(id) = report_id(path) else {
            return Ok(());
        };
        debug!("Parsing {category} report '{id}' from {}", path.display());

        let content = Self::read_report(path)?;

        let replaced = match category {
            ReportCategory::Timing => result
                .timing
                .insert(id.clone(), parse_timing_report(&content)?)
                .is_some(),
            ReportCategory::Utilization => result
                .utilization
                .insert(id.clone(), parse_utilization_report(&content)?)
                .is_some(),
            ReportCategory::Power => result
                .power
                .insert(id.clone(), parse_power_report(&content)?)
                .is_some(),
        };

        if replaced {
            logging::log_warning(&format!(
                "Duplicate {category} report identifier '{id}', keeping {}",
                path.display()
            ));
        }

        Ok(())
    }

    /// Read report text, replacing invalid UTF-8 so extraction stays best-effort
    fn read_report(path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
