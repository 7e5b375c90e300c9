// Command-line interface definitions and parsing for noisegap

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "noisegap", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Charts
    /// Directory for chart images (default: current directory)
    #[arg(short = 'o', long, value_name = "DIR", help_heading = "Charts")]
    pub output_dir: Option<String>,

    /// Chart resolution, 300-1200 (default: 300)
    #[arg(long, value_name = "DPI", help_heading = "Charts")]
    pub dpi: Option<u32>,

    /// Skip chart rendering
    #[arg(long, help_heading = "Charts")]
    pub no_charts: bool,

    /// TrueType/OpenType font file for chart text
    #[arg(long, value_name = "FILE", help_heading = "Charts")]
    pub font: Option<String>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format (default: text)
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable progress bars
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        output_dir: cli.output_dir.clone(),
        dpi: cli.dpi,
        font_path: cli.font.clone(),
        no_charts: cli.no_charts,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
