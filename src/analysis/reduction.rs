//! Required noise reduction per band

use super::dataset::Scenario;
use crate::core::types::{BandReduction, ReductionAnalysis};

/// Reduction needed to bring `measured_db` down to `limit_db`.
///
/// Returns exactly `0.0` (never `-0.0` or a negative rounding artifact)
/// when the measured level is at or below the limit.
///
/// # Examples
/// ```
/// use noisegap::analysis::required_reduction;
///
/// assert!((required_reduction(76.48, 55.0) - 21.48).abs() < 1e-9);
/// assert_eq!(required_reduction(71.06, 74.0), 0.0);
/// ```
pub fn required_reduction(measured_db: f64, limit_db: f64) -> f64 {
    let difference = measured_db - limit_db;
    if difference > 0.0 { difference } else { 0.0 }
}

/// Apply [`required_reduction`] to every band, preserving band order.
pub fn analyze(scenario: &Scenario) -> ReductionAnalysis {
    let bands = scenario
        .bands()
        .iter()
        .map(|band| BandReduction {
            band: *band,
            reduction_db: required_reduction(band.measured_db, band.limit_db),
        })
        .collect();

    ReductionAnalysis {
        scenario: scenario.label().to_string(),
        bands,
    }
}
