//! The baked-in measurement dataset and its shape validation

use crate::core::constants::scenario;
use crate::core::error::{NoiseGapError, Result};
use crate::core::types::FrequencyBand;

/// Octave-band center frequencies for variant 31, Hz
pub const VARIANT_31_FREQUENCIES: [u32; 8] = [63, 125, 250, 500, 1000, 2000, 4000, 8000];

/// Calculated sound pressure levels for variant 31, dB
pub const VARIANT_31_MEASURED: [f64; 8] = [67.19, 71.06, 69.37, 71.32, 69.78, 67.28, 76.48, 78.35];

/// Permitted sound pressure levels for variant 31, dB
pub const VARIANT_31_LIMITS: [f64; 8] = [83.0, 74.0, 68.0, 63.0, 60.0, 57.0, 55.0, 54.0];

/// An ordered, validated set of frequency bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    label: String,
    bands: Vec<FrequencyBand>,
}

impl Scenario {
    /// The variant 31 dataset.
    pub fn variant_31() -> Result<Self> {
        Self::from_columns(
            scenario::LABEL,
            &VARIANT_31_FREQUENCIES,
            &VARIANT_31_MEASURED,
            &VARIANT_31_LIMITS,
        )
    }

    /// Zip three parallel columns into bands.
    ///
    /// Fails with `ShapeMismatch` when the columns differ in length and with
    /// `InvalidBand` when the scenario is empty, a level is not finite, or
    /// frequencies are not positive and strictly ascending.
    pub fn from_columns(
        label: &str,
        frequencies: &[u32],
        measured: &[f64],
        limits: &[f64],
    ) -> Result<Self> {
        if frequencies.len() != measured.len() || frequencies.len() != limits.len() {
            return Err(NoiseGapError::ShapeMismatch {
                frequencies: frequencies.len(),
                measured: measured.len(),
                limits: limits.len(),
            });
        }

        if frequencies.is_empty() {
            return Err(NoiseGapError::InvalidBand(
                "scenario contains no bands".to_string(),
            ));
        }

        let bands: Vec<FrequencyBand> = frequencies
            .iter()
            .zip(measured)
            .zip(limits)
            .map(|((&f, &m), &l)| FrequencyBand::new(f, m, l))
            .collect();

        for band in &bands {
            if band.frequency_hz == 0 {
                return Err(NoiseGapError::InvalidBand(
                    "frequency must be positive".to_string(),
                ));
            }
            if !band.measured_db.is_finite() || !band.limit_db.is_finite() {
                return Err(NoiseGapError::InvalidBand(format!(
                    "levels at {} Hz must be finite",
                    band.frequency_hz
                )));
            }
        }

        if let Some(pair) = bands
            .windows(2)
            .find(|pair| pair[0].frequency_hz >= pair[1].frequency_hz)
        {
            return Err(NoiseGapError::InvalidBand(format!(
                "frequencies must be strictly ascending ({} Hz followed by {} Hz)",
                pair[0].frequency_hz, pair[1].frequency_hz
            )));
        }

        Ok(Self {
            label: label.to_string(),
            bands,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bands(&self) -> &[FrequencyBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
