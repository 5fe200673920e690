//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{artifacts, config_files, output_formats};
use crate::core::error::{PerfDashError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the dashboard page and charts are written to
    pub output_dir: Option<String>,

    /// Optional JSON export path
    pub json_output: Option<String>,

    /// Scan subdirectories of the reports directory
    pub recursive: Option<bool>,

    /// Console summary format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: Some(artifacts::DEFAULT_OUTPUT_DIR.to_string()),
            json_output: None,
            recursive: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PerfDashError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            PerfDashError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations.
    ///
    /// Returns the errors of config files that exist but could not be loaded
    /// alongside the config that was used.
    pub fn load_from_standard_locations() -> (Self, Vec<PerfDashError>) {
        Self::search_from(Path::new("."))
    }

    /// Load the first loadable config file in `dir` or its parent directories
    pub fn search_from(dir: &Path) -> (Self, Vec<PerfDashError>) {
        let mut skipped = Vec::new();

        for depth in 0..=config_files::PARENT_SEARCH_DEPTH {
            let mut path = dir.to_path_buf();
            for _ in 0..depth {
                path.push("..");
            }
            path.push(config_files::FILE_NAME);

            if !path.is_file() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return (config, skipped),
                Err(e) => skipped.push(e),
            }
        }

        (Self::default(), skipped)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(ref json_output) = cli_config.json_output {
            self.json_output = Some(json_output.clone());
        }
        if cli_config.recursive {
            self.recursive = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Output directory, falling back to the default
    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .as_deref()
                .unwrap_or(artifacts::DEFAULT_OUTPUT_DIR),
        )
    }

    pub fn json_output_path(&self) -> Option<PathBuf> {
        self.json_output.as_ref().map(PathBuf::from)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref output_dir) = self.output_dir
            && output_dir.trim().is_empty()
        {
            return Err(PerfDashError::Config(
                "Output directory cannot be empty. Expected a directory path.".to_string(),
            ));
        }

        if let Some(ref json_output) = self.json_output
            && json_output.trim().is_empty()
        {
            return Err(PerfDashError::Config(
                "JSON output path cannot be empty. Expected a file path.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(PerfDashError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub reports_dir: String,           // --reports-dir
    pub output_dir: Option<String>,    // --output-dir
    pub json_output: Option<String>,   // --json-output
    pub recursive: bool,               // --recursive
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub config_file: Option<String>,   // --config
    pub no_config: bool,               // --no-config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir, Some("dashboard".to_string()));
        assert_eq!(config.json_output, None);
        assert_eq!(config.recursive, Some(false));
        assert_eq!(
            config.output_format,
            Some(output_formats::DEFAULT.to_string())
        );
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            b"output_dir = \"out/dash\"\njson_output = \"out/metrics.json\"\nrecursive = true",
        )?;

        let config = Config::load_from_file(file.path())?;
        assert_eq!(config.output_dir, Some("out/dash".to_string()));
        assert_eq!(config.json_output, Some("out/metrics.json".to_string()));
        assert_eq!(config.recursive, Some(true));
        // Unset keys stay unset rather than taking defaults
        assert_eq!(config.output_format, None);

        Ok(())
    }

    #[test]
    fn test_config_load_from_file_invalid_toml() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"output_dir = [unclosed")?;

        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(PerfDashError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_config_load_from_missing_file() {
        let result = Config::load_from_file("/no/such/perfdash.toml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Could not read config file")
        );
    }

    #[test]
    fn test_search_from_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c/d");
        fs::create_dir_all(&nested).unwrap();

        let (config, skipped) = Config::search_from(&nested);

        assert_eq!(config.output_dir, Config::default().output_dir);
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_search_from_finds_parent_config() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("build");
        fs::create_dir(&nested).unwrap();
        fs::write(
            dir.path().join(config_files::FILE_NAME),
            "output_dir = \"site\"\n",
        )
        .unwrap();

        let (config, skipped) = Config::search_from(&nested);

        assert_eq!(config.output_dir, Some("site".to_string()));
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_search_from_reports_broken_config() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("build");
        fs::create_dir(&nested).unwrap();
        fs::write(
            nested.join(config_files::FILE_NAME),
            "output_dir = [unclosed",
        )
        .unwrap();
        fs::write(
            dir.path().join(config_files::FILE_NAME),
            "output_format = \"minimal\"\n",
        )
        .unwrap();

        let (config, skipped) = Config::search_from(&nested);

        assert_eq!(config.output_format, Some("minimal".to_string()));
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].to_string().contains("Invalid TOML in config file"));
    }

    #[test]
    fn test_config_merge_with_cli() {
        let mut config = Config::default();
        let cli_config = CliConfig {
            output_dir: Some("site".to_string()),
            json_output: Some("metrics.json".to_string()),
            recursive: true,
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli_config);

        assert_eq!(config.output_dir, Some("site".to_string()));
        assert_eq!(config.json_output, Some("metrics.json".to_string()));
        assert_eq!(config.recursive, Some(true));
        assert_eq!(config.verbose, Some(true));
    }

    #[test]
    fn test_config_merge_keeps_file_values_when_cli_silent() {
        let mut config = Config {
            output_dir: Some("from_file".to_string()),
            recursive: Some(true),
            ..Default::default()
        };

        config.merge_with_cli(&CliConfig::default());

        assert_eq!(config.output_dir, Some("from_file".to_string()));
        assert_eq!(config.recursive, Some(true));
    }

    #[test]
    fn test_output_dir_path_fallback() {
        let config = Config {
            output_dir: None,
            ..Default::default()
        };
        assert_eq!(config.output_dir_path(), PathBuf::from("dashboard"));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let config = Config {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid output format 'yaml'"));
    }

    #[test]
    fn test_validate_rejects_empty_output_dir() {
        let config = Config {
            output_dir: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
