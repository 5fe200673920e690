use crate::config::Config;
use crate::core::error::PerfDashError;
use crate::core::types::ReportCategory;
use log::{debug, info, warn};
use std::path::Path;

/// Log level for the given verbosity flags; warnings show unless quiet
pub fn log_level(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = log_level(verbose, quiet);

    // A second initialization in the same process keeps the first logger
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, reports_dir: &Path) {
    let recursive = config.recursive.unwrap_or(false);
    let json_output = config.json_output.as_deref().unwrap_or("none");

    info!(
        "Configuration: reports_dir={}, recursive={recursive}",
        reports_dir.display()
    );
    info!(
        "Outputs: dashboard={}, json={json_output}",
        config.output_dir_path().display()
    );
}

/// Log report file discovery
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Found {file_count} report file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log how many reports of a category were parsed
pub fn log_category_summary(category: ReportCategory, count: usize) {
    if count == 0 {
        info!("No {category} reports found");
    } else {
        info!("Parsed {count} {category} report(s)");
    }
}

/// Log a discovered config file that could not be loaded
pub fn log_config_skipped(err: &PerfDashError) {
    warn!("Ignoring config file. {err}");
}

/// Log a written artifact
pub fn log_artifact_written(kind: &str, path: &Path) {
    info!("Wrote {kind}: {}", path.display());
}

/// Log a skipped chart
pub fn log_chart_skipped(category: ReportCategory) {
    debug!("Skipping {category} chart: no reports");
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
