use serde::Serialize;
use std::fmt;

/// One octave band of the scenario: center frequency plus the measured
/// (calculated) and permitted sound pressure levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrequencyBand {
    /// Center frequency in Hz
    pub frequency_hz: u32,
    /// Calculated sound pressure level, dB
    pub measured_db: f64,
    /// Regulatory limit, dB
    pub limit_db: f64,
}

impl FrequencyBand {
    /// Create a new band.
    ///
    /// # Examples
    /// ```
    /// use noisegap::core::types::FrequencyBand;
    ///
    /// let band = FrequencyBand::new(1000, 69.78, 60.0);
    /// assert_eq!(band.frequency_hz, 1000);
    /// assert!(band.exceeds_limit());
    /// ```
    pub fn new(frequency_hz: u32, measured_db: f64, limit_db: f64) -> Self {
        Self {
            frequency_hz,
            measured_db,
            limit_db,
        }
    }

    /// True when the measured level is strictly above the limit.
    pub fn exceeds_limit(&self) -> bool {
        self.measured_db > self.limit_db
    }

    /// Frequency as a chart coordinate.
    pub fn frequency(&self) -> f64 {
        f64::from(self.frequency_hz)
    }
}

impl fmt::Display for FrequencyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz (measured {} dB, limit {} dB)",
            self.frequency_hz, self.measured_db, self.limit_db
        )
    }
}

/// A band together with the noise reduction it requires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandReduction {
    #[serde(flatten)]
    pub band: FrequencyBand,
    /// Required reduction ΔL, dB; never negative
    pub reduction_db: f64,
}

impl BandReduction {
    pub fn requires_reduction(&self) -> bool {
        self.reduction_db > 0.0
    }
}

/// Per-band reductions for a whole scenario, in band order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReductionAnalysis {
    /// Scenario label, e.g. "variant 31"
    pub scenario: String,
    pub bands: Vec<BandReduction>,
}

impl ReductionAnalysis {
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Number of bands where the measured level exceeds the limit
    pub fn exceeding_count(&self) -> usize {
        self.bands.iter().filter(|b| b.requires_reduction()).count()
    }

    /// Largest required reduction, 0.0 when no band exceeds its limit
    pub fn max_reduction(&self) -> f64 {
        self.reductions().fold(0.0, f64::max)
    }

    /// Required reductions in band order
    pub fn reductions(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|b| b.reduction_db)
    }
}
