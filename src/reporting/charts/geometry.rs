//! Chart geometry: what gets shaded, labelled and annotated, independent of
//! the drawing backend.

use crate::core::constants::charts;
use crate::core::types::{FrequencyBand, ReductionAnalysis};

/// Pixel dimensions of a figure given in inches.
pub fn figure_pixels(inches: (f64, f64), dpi: u32) -> (u32, u32) {
    let dpi = f64::from(dpi);
    (
        (inches.0 * dpi).round() as u32,
        (inches.1 * dpi).round() as u32,
    )
}

/// Typographic points to pixels at `dpi`.
pub fn points_to_pixels(points: f64, dpi: u32) -> f64 {
    points * f64::from(dpi) / charts::POINTS_PER_INCH
}

/// Raw value label as it appears next to a data point ("67.19", "83").
pub fn value_label(value: f64) -> String {
    format!("{value}")
}

/// Shaded region drawn around a single exceeding band.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceedanceBox {
    pub frequency_hz: u32,
    pub x_start: f64,
    pub x_end: f64,
    pub measured_db: f64,
    pub limit_db: f64,
}

/// One box per band whose measured level exceeds the limit, spanning
/// `[0.9 f, 1.1 f]` between the two levels.
pub fn exceedance_boxes(bands: &[FrequencyBand]) -> Vec<ExceedanceBox> {
    bands
        .iter()
        .filter(|band| band.exceeds_limit())
        .map(|band| ExceedanceBox {
            frequency_hz: band.frequency_hz,
            x_start: band.frequency() * (1.0 - charts::EXCEEDANCE_BOX_SPREAD),
            x_end: band.frequency() * (1.0 + charts::EXCEEDANCE_BOX_SPREAD),
            measured_db: band.measured_db,
            limit_db: band.limit_db,
        })
        .collect()
}

/// Region between the two curves over one pair of adjacent bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExceedanceSegment {
    pub start: FrequencyBand,
    pub end: FrequencyBand,
}

impl ExceedanceSegment {
    /// Closed outline: along the measured curve, back along the limit curve.
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        vec![
            (self.start.frequency(), self.start.measured_db),
            (self.end.frequency(), self.end.measured_db),
            (self.end.frequency(), self.end.limit_db),
            (self.start.frequency(), self.start.limit_db),
        ]
    }
}

/// Adjacent-band segments where at least one endpoint exceeds its limit.
pub fn exceedance_segments(bands: &[FrequencyBand]) -> Vec<ExceedanceSegment> {
    bands
        .windows(2)
        .filter(|pair| pair[0].exceeds_limit() || pair[1].exceeds_limit())
        .map(|pair| ExceedanceSegment {
            start: pair[0],
            end: pair[1],
        })
        .collect()
}

/// Inline `ΔL = x.x dB` note placed midway between the curves.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaAnnotation {
    pub frequency: f64,
    pub level_db: f64,
    pub text: String,
}

pub fn delta_annotations(bands: &[FrequencyBand]) -> Vec<DeltaAnnotation> {
    bands
        .iter()
        .filter(|band| band.exceeds_limit())
        .map(|band| DeltaAnnotation {
            frequency: band.frequency(),
            level_db: (band.measured_db + band.limit_db) / 2.0,
            text: format!("ΔL = {:.1} dB", band.measured_db - band.limit_db),
        })
        .collect()
}

/// Label above a reduction bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub index: usize,
    pub height_db: f64,
    pub text: String,
}

/// Labels only for bars with a positive reduction.
pub fn bar_labels(analysis: &ReductionAnalysis) -> Vec<BarLabel> {
    analysis
        .bands
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.requires_reduction())
        .map(|(index, entry)| BarLabel {
            index,
            height_db: entry.reduction_db + charts::BAR_LABEL_OFFSET_DB,
            text: format!("{:.1} dB", entry.reduction_db),
        })
        .collect()
}

/// Upper bound of the reduction axis, leaving room for bar labels.
pub fn reduction_axis_top(analysis: &ReductionAnalysis) -> f64 {
    (analysis.max_reduction() * 1.15).ceil().max(1.0)
}
