// Command-line interface definitions and parsing for perfdash

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Core Options
    /// Directory containing the *.rpt report files
    #[arg(long, value_name = "DIR", required = true, help_heading = "Core Options")]
    pub reports_dir: Option<String>,

    /// Directory the dashboard and charts are written to (default: dashboard)
    #[arg(long, value_name = "DIR", help_heading = "Core Options")]
    pub output_dir: Option<String>,

    /// Also export the aggregated metrics as JSON to this file
    #[arg(long, value_name = "FILE", help_heading = "Core Options")]
    pub json_output: Option<String>,

    /// Scan subdirectories of the reports directory
    #[arg(short = 'r', long, help_heading = "Core Options")]
    pub recursive: bool,

    // Output & Verbosity
    /// Suppress console output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Console summary format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert the parsed CLI into the configuration overrides it carries
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let non_empty = |value: &Option<String>| {
        value
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    CliConfig {
        reports_dir: cli.reports_dir.clone().unwrap_or_default(),
        output_dir: non_empty(&cli.output_dir),
        json_output: non_empty(&cli.json_output),
        recursive: cli.recursive,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        config_file: non_empty(&cli.config),
        no_config: cli.no_config,
    }
}
