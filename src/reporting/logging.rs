use crate::config::Config;
use crate::core::types::ReductionAnalysis;
use log::{debug, error, info};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
///
/// `RUST_LOG` can raise the level unless `quiet` is set.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if !quiet {
        builder.parse_default_env();
    }

    // try_init: a second initialization in the same process is a no-op
    let _ = builder.try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: output_dir={}, dpi={}, format={}",
        config.output_dir_path().display(),
        config.dpi_or_default(),
        config.output_format_or_default()
    );
    info!(
        "Charts: enabled={}, font={}",
        config.should_render_charts(),
        config.font_path.as_deref().unwrap_or("<system>")
    );
}

/// Log the computed reductions
pub fn log_analysis(analysis: &ReductionAnalysis) {
    info!(
        "Scenario '{}': {} bands, {} exceed the limit",
        analysis.scenario,
        analysis.len(),
        analysis.exceeding_count()
    );
    for entry in &analysis.bands {
        if entry.requires_reduction() {
            debug!(
                "✗ {} Hz: {} dB > {} dB, reduce by {:.2} dB",
                entry.band.frequency_hz,
                entry.band.measured_db,
                entry.band.limit_db,
                entry.reduction_db
            );
        } else {
            debug!(
                "✓ {} Hz: {} dB <= {} dB",
                entry.band.frequency_hz, entry.band.measured_db, entry.band.limit_db
            );
        }
    }
}

/// Log a written chart
pub fn log_chart_written(path: &Path, dimensions: (u32, u32), duration_ms: u128) {
    info!(
        "Chart written: {} ({}x{} px, {}ms)",
        path.display(),
        dimensions.0,
        dimensions.1,
        duration_ms
    );
}

/// Log font selection
pub fn log_font_selected(path: &Path) {
    debug!("Chart font: {}", path.display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
