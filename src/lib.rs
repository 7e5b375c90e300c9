//! noisegap: required noise reduction per octave band.
//!
//! Compares calculated sound pressure levels with their permitted limits,
//! prints the per-band reduction as a summary and a table, and renders two
//! PNG charts of the comparison.

pub mod analysis;
pub mod config;
pub mod core;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use analysis::{Scenario, analyze, required_reduction};
pub use config::{CliConfig, Config};
pub use crate::core::{BandReduction, FrequencyBand, NoiseGapError, ReductionAnalysis, Result};
pub use reporting::ChartRenderer;
