use clap::{CommandFactory, Parser};
use noisegap::analysis::{Scenario, analyze};
use noisegap::config::{CliConfig, Config};
use noisegap::core::constants::output_formats;
use noisegap::core::error::Result;
use noisegap::core::types::ReductionAnalysis;
use noisegap::reporting::ChartRenderer;
use noisegap::reporting::logging;
use noisegap::ui::ProgressReporter;
use noisegap::ui::output;
use noisegap::ui::{Cli, Commands, cli_to_config, print_completions};

use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    if let Err(e) = run_noisegap_logic(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
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

/// Compute, print and render; extracted from main() for testing
pub fn run_noisegap_logic(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    let scenario = Scenario::variant_31().inspect_err(|e| {
        logging::log_error("Dataset rejected", Some(e));
    })?;
    let analysis = analyze(&scenario);
    logging::log_analysis(&analysis);

    if output_settings.output_format == output_formats::JSON {
        // The JSON report lists the chart paths, so it waits for rendering
        let charts = render_charts(&config, &output_settings, &scenario, &analysis)?;
        output::display_json_report(&analysis, &charts)?;
    } else {
        output::display_report(&analysis, &output_settings.output_format);
        let charts = render_charts(&config, &output_settings, &scenario, &analysis)?;
        output::display_chart_notices(&charts, &output_settings.output_format);
    }

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        let loaded = Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?;
        Config::default().overlaid_with(loaded)
    } else {
        Config::load_from_standard_locations().inspect_err(|e| {
            logging::log_error("Could not load discovered config file", Some(e));
        })?
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config.output_format_or_default().to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

/// Render both figures unless charts are disabled
pub fn render_charts(
    config: &Config,
    output_settings: &OutputSettings,
    scenario: &Scenario,
    analysis: &ReductionAnalysis,
) -> Result<Vec<PathBuf>> {
    if !config.should_render_charts() {
        return Ok(Vec::new());
    }

    let renderer = ChartRenderer::new(
        config.output_dir_path(),
        config.dpi_or_default(),
        config.font_path.clone(),
    );
    let mut progress = ProgressReporter::new(output_settings.show_progress);

    renderer
        .render_all(scenario, analysis, &mut progress)
        .inspect_err(|e| logging::log_error("Chart rendering failed", Some(e)))
}
