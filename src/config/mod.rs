//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{charts, config_files, output_formats};
use crate::core::error::{NoiseGapError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory the chart images are written to
    pub output_dir: Option<String>,

    /// Chart resolution in dots per inch
    pub dpi: Option<u32>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Render the two chart images
    pub render_charts: Option<bool>,

    /// TTF/OTF font used for chart text
    pub font_path: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: Some(config_files::DEFAULT_OUTPUT_DIR.to_string()),
            dpi: Some(charts::DEFAULT_DPI),
            output_format: Some(output_formats::DEFAULT.to_string()),
            render_charts: Some(true),
            font_path: None, // Discovered from standard system locations
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NoiseGapError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            NoiseGapError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Look for the config file in `dir` and up to three parent directories,
    /// falling back to defaults when none exists. The first file found must
    /// be valid.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut candidates = std::iter::once(dir.join(config_files::FILE_NAME)).chain(
            (1..=config_files::PARENT_SEARCH_DEPTH).map(|depth| {
                let mut path = dir.to_path_buf();
                for _ in 0..depth {
                    path.push("..");
                }
                path.join(config_files::FILE_NAME)
            }),
        );

        match candidates.find(|path| path.is_file()) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                log::debug!("Loaded configuration from {}", path.display());
                Ok(Self::default().overlaid_with(config))
            }
            None => Ok(Self::default()),
        }
    }

    /// Fill unset fields of `other` from `self`
    pub fn overlaid_with(self, other: Config) -> Config {
        Config {
            output_dir: other.output_dir.or(self.output_dir),
            dpi: other.dpi.or(self.dpi),
            output_format: other.output_format.or(self.output_format),
            render_charts: other.render_charts.or(self.render_charts),
            font_path: other.font_path.or(self.font_path),
            verbose: other.verbose.or(self.verbose),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Output location & quality
        if let Some(ref output_dir) = cli_config.output_dir {
            self.output_dir = Some(output_dir.clone());
        }
        if let Some(dpi) = cli_config.dpi {
            self.dpi = Some(dpi);
        }
        if let Some(ref font_path) = cli_config.font_path {
            self.font_path = Some(font_path.clone());
        }
        if cli_config.no_charts {
            self.render_charts = Some(false);
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Chart output directory
    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(
            self.output_dir
                .as_deref()
                .unwrap_or(config_files::DEFAULT_OUTPUT_DIR),
        )
    }

    pub fn dpi_or_default(&self) -> u32 {
        self.dpi.unwrap_or(charts::DEFAULT_DPI)
    }

    pub fn output_format_or_default(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn should_render_charts(&self) -> bool {
        self.render_charts.unwrap_or(true)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(dpi) = self.dpi
            && !(charts::MIN_DPI..=charts::MAX_DPI).contains(&dpi)
        {
            return Err(NoiseGapError::Config(format!(
                "DPI of {dpi} is out of range. Expected a value between {}-{}.",
                charts::MIN_DPI,
                charts::MAX_DPI
            )));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(NoiseGapError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref dir) = self.output_dir
            && dir.trim().is_empty()
        {
            return Err(NoiseGapError::Config(
                "Output directory cannot be empty.".to_string(),
            ));
        }

        if let Some(ref font) = self.font_path
            && font.trim().is_empty()
        {
            return Err(NoiseGapError::Config(
                "Font path cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliConfig {
    // Output location & quality
    pub output_dir: Option<String>, // --output-dir
    pub dpi: Option<u32>,           // --dpi
    pub font_path: Option<String>,  // --font
    pub no_charts: bool,            // --no-charts

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
