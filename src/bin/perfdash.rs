use clap::{CommandFactory, Parser};
use perfdash::PerfDashError;
use perfdash::config::{CliConfig, Config};
use perfdash::core::constants::output_formats;
use perfdash::core::types::AggregatedResult;
use perfdash::discovery::{Collector, ReportCollector};
use perfdash::reporting::logging;
use perfdash::reporting::{DashboardData, HtmlDashboard, export_json, write_charts};
use perfdash::ui::completion::print_completions;
use perfdash::ui::output;
use perfdash::ui::{Cli, Commands, cli_to_config};

use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_perfdash_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main dashboard generation logic extracted from main() for testing
pub fn run_perfdash_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let (config, skipped_configs) = load_and_merge_config(&cli_config)?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    for err in &skipped_configs {
        logging::log_config_skipped(err);
    }

    let reports_dir = PathBuf::from(&cli_config.reports_dir);
    logging::log_config_info(&config, &reports_dir);

    let collector = Collector::new(config.recursive.unwrap_or(false));
    let result = collector.collect(&reports_dir)?;

    let output_dir = config.output_dir_path();
    generate_dashboard(&result, &output_dir)?;

    if let Some(json_path) = config.json_output_path() {
        export_json(&result, &json_path)?;
    }

    output::display_summary(
        &result,
        &output_settings.output_format,
        output_settings.quiet,
    )?;
    output::display_completion_message(
        &output_dir,
        &output_settings.output_format,
        output_settings.quiet,
    );

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config.
///
/// Also returns the errors of discovered config files that were skipped.
pub fn load_and_merge_config(
    cli_config: &CliConfig,
) -> Result<(Config, Vec<PerfDashError>), Box<dyn std::error::Error>> {
    let (mut config, skipped) = if cli_config.no_config {
        (Config::default(), Vec::new())
    } else if let Some(ref config_file) = cli_config.config_file {
        (Config::load_from_file(config_file)?, Vec::new())
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok((config, skipped))
}

/// Settings for console output
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    OutputSettings {
        quiet: cli_config.quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format: config
            .output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
            .to_string(),
    }
}

/// Write the charts and the HTML page into `output_dir`, creating it if needed
pub fn generate_dashboard(
    result: &AggregatedResult,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let charts = write_charts(result, output_dir)?;
    let data = DashboardData {
        result,
        charts: &charts,
    };

    Ok(HtmlDashboard::generate_dashboard(&data, output_dir)?)
}
