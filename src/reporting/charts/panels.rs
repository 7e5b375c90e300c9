//! Panel drawing on top of plotters.
//!
//! Everything positional comes from [`super::geometry`]; this module only
//! maps those shapes onto chart elements and styles them.

use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::RangedCoordusize;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::geometry::{
    bar_labels, delta_annotations, exceedance_boxes, exceedance_segments, points_to_pixels,
    reduction_axis_top, value_label,
};
use crate::core::constants::charts;
use crate::core::error::Result;
use crate::core::types::{FrequencyBand, ReductionAnalysis};

const MEASURED_COLOR: RGBColor = RGBColor(0, 0, 255);
const LIMIT_COLOR: RGBColor = RGBColor(255, 0, 0);
const EXCEEDANCE_COLOR: RGBColor = RGBColor(255, 0, 0);
const BAR_COLOR: RGBColor = RGBColor(255, 165, 0);
const ANNOTATION_BOX_COLOR: RGBColor = RGBColor(255, 255, 0);

const EXCEEDANCE_ALPHA: f64 = 0.3;
const BAR_ALPHA: f64 = 0.7;
const ANNOTATION_BOX_ALPHA: f64 = 0.7;

const FREQUENCY_DESC: &str = "Frequency, Hz";
const LEVEL_DESC: &str = "Sound pressure level, dB";
const REDUCTION_DESC: &str = "Required reduction ΔL, dB";
const REDUCTION_CAPTION: &str = "Required noise reduction";
const EXCEEDANCE_LABEL: &str = "Exceedance";

/// Pixel sizes for one figure, derived from point sizes at a given DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub line_width: u32,
    pub marker_radius: u32,
    pub title_px: f64,
    pub label_px: f64,
    pub annotation_px: f64,
    pub measured_offset: i32,
    pub limit_offset: i32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
    pub legend_sample: i32,
    pub legend_area: u32,
}

impl FigureStyle {
    pub fn at_dpi(dpi: u32) -> Self {
        let px = |points: f64| points_to_pixels(points, dpi);
        Self {
            line_width: px(charts::LINE_WIDTH_PT).round().max(1.0) as u32,
            marker_radius: (px(charts::MARKER_SIZE_PT) / 2.0).round().max(1.0) as u32,
            title_px: px(charts::TITLE_FONT_PT),
            label_px: px(charts::LABEL_FONT_PT),
            annotation_px: px(charts::ANNOTATION_FONT_PT),
            measured_offset: px(charts::MEASURED_LABEL_OFFSET_PT).round() as i32,
            limit_offset: px(charts::LIMIT_LABEL_OFFSET_PT).round() as i32,
            margin: px(12.0).round() as u32,
            x_label_area: px(40.0).round() as u32,
            y_label_area: px(52.0).round() as u32,
            legend_sample: px(24.0).round() as i32,
            legend_area: px(32.0).round() as u32,
        }
    }

    fn font(&self, size: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
    }

    fn bold(&self, size: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold)
    }

    fn stroke(&self, color: RGBColor) -> ShapeStyle {
        color.stroke_width(self.line_width)
    }
}

/// How the region between the curves is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    /// A box spanning `[0.9 f, 1.1 f]` at each exceeding band
    PerBand,
    /// A polygon over each adjacent-band segment touching an exceedance
    Segments,
}

/// What goes on a measured-vs-limit panel besides the two curves.
#[derive(Debug, Clone, Copy)]
pub struct LevelPanel<'a> {
    pub caption: &'a str,
    pub measured_label: &'a str,
    pub limit_label: &'a str,
    pub shading: Shading,
    pub value_labels: bool,
    pub delta_annotations: bool,
}

/// Measured and limit levels on a logarithmic frequency axis.
pub fn draw_level_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    style: &FigureStyle,
    bands: &[FrequencyBand],
    panel: &LevelPanel<'_>,
) -> Result<()> {
    let (x_min, x_max) = charts::FREQUENCY_AXIS_HZ;
    let (y_min, y_max) = charts::LEVEL_AXIS_DB;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.caption, style.bold(style.title_px))
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(FREQUENCY_DESC)
        .y_desc(LEVEL_DESC)
        .axis_desc_style(style.font(style.label_px))
        .label_style(style.font(style.annotation_px))
        .x_label_formatter(&whole_number)
        .y_label_formatter(&whole_number)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let fill = EXCEEDANCE_COLOR.mix(EXCEEDANCE_ALPHA).filled();
    let sample = style.legend_sample;
    match panel.shading {
        Shading::PerBand => {
            chart.draw_series(exceedance_boxes(bands).into_iter().map(|b| {
                Rectangle::new([(b.x_start, b.measured_db), (b.x_end, b.limit_db)], fill)
            }))?;
        }
        Shading::Segments => {
            let segments = exceedance_segments(bands);
            if !segments.is_empty() {
                chart
                    .draw_series(segments.iter().map(|s| Polygon::new(s.polygon(), fill)))?
                    .label(EXCEEDANCE_LABEL)
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - sample / 3), (x + sample, y + sample / 3)], fill)
                    });
            }
        }
    }

    let measured: Vec<(f64, f64)> = bands
        .iter()
        .map(|b| (b.frequency(), b.measured_db))
        .collect();
    let limits: Vec<(f64, f64)> = bands.iter().map(|b| (b.frequency(), b.limit_db)).collect();

    for (points, color, label) in [
        (&measured, MEASURED_COLOR, panel.measured_label),
        (&limits, LIMIT_COLOR, panel.limit_label),
    ] {
        let stroke = style.stroke(color);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), stroke))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + sample, y)], stroke));
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, style.marker_radius, color.filled())),
        )?;
    }

    if panel.value_labels {
        let above = style
            .bold(style.annotation_px)
            .color(&MEASURED_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        let below = style
            .bold(style.annotation_px)
            .color(&LIMIT_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Top));

        chart.draw_series(bands.iter().map(|b| {
            EmptyElement::at((b.frequency(), b.measured_db))
                + Text::new(
                    value_label(b.measured_db),
                    (0, -style.measured_offset),
                    above.clone(),
                )
        }))?;
        chart.draw_series(bands.iter().map(|b| {
            EmptyElement::at((b.frequency(), b.limit_db))
                + Text::new(value_label(b.limit_db), (0, style.limit_offset), below.clone())
        }))?;
    }

    if panel.delta_annotations {
        let text_style = style
            .bold(style.annotation_px)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let pad = (style.annotation_px * 0.3).round() as i32;
        let box_fill = ANNOTATION_BOX_COLOR.mix(ANNOTATION_BOX_ALPHA).filled();

        let mut notes = Vec::new();
        for note in delta_annotations(bands) {
            let (w, h) = area.estimate_text_size(&note.text, &text_style)?;
            notes.push((note, (w as i32 / 2 + pad, h as i32 / 2 + pad)));
        }

        chart.draw_series(notes.into_iter().map(|(note, (half_w, half_h))| {
            EmptyElement::at((note.frequency, note.level_db))
                + Rectangle::new([(-half_w, -half_h), (half_w, half_h)], box_fill)
                + Text::new(note.text, (0, 0), text_style.clone())
        }))?;
    }

    chart
        .configure_series_labels()
        .label_font(style.font(style.label_px))
        .legend_area_size(style.legend_area)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

fn whole_number(value: &f64) -> String {
    format!("{value:.0}")
}

/// Categorical axis with one segment per band.
///
/// Integer ranges are inclusive in plotters, so `0..count - 1` yields
/// exactly `count` segments. `count` must be at least 1.
pub fn band_axis(count: usize) -> SegmentedCoord<RangedCoordusize> {
    (0..count.saturating_sub(1)).into_segmented()
}

/// Segment bounds for the bar at `index`; the last bar closes on the
/// axis end
fn bar_span(index: usize, count: usize) -> (SegmentValue<usize>, SegmentValue<usize>) {
    let end = if index + 1 < count {
        SegmentValue::Exact(index + 1)
    } else {
        SegmentValue::Last
    };
    (SegmentValue::Exact(index), end)
}

/// Required reduction per band as a categorical bar chart.
pub fn draw_reduction_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    style: &FigureStyle,
    analysis: &ReductionAnalysis,
) -> Result<()> {
    let count = analysis.len();
    let frequencies: Vec<u32> = analysis.bands.iter().map(|e| e.band.frequency_hz).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(REDUCTION_CAPTION, style.bold(style.title_px))
        .margin(style.margin)
        .x_label_area_size(style.x_label_area)
        .y_label_area_size(style.y_label_area)
        .build_cartesian_2d(band_axis(count), 0.0..reduction_axis_top(analysis))?;

    let band_label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) => frequencies
            .get(*index)
            .map(|f| f.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count)
        .x_desc(FREQUENCY_DESC)
        .y_desc(REDUCTION_DESC)
        .axis_desc_style(style.font(style.label_px))
        .label_style(style.font(style.annotation_px))
        .x_label_formatter(&band_label)
        .y_label_formatter(&whole_number)
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let bar_fill = BAR_COLOR.mix(BAR_ALPHA).filled();
    let gap = style.margin;
    chart.draw_series(analysis.bands.iter().enumerate().map(|(index, entry)| {
        let (start, end) = bar_span(index, count);
        let mut bar = Rectangle::new([(start, 0.0), (end, entry.reduction_db)], bar_fill);
        bar.set_margin(0, 0, gap, gap);
        bar
    }))?;

    let label_style = style
        .bold(style.annotation_px)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(bar_labels(analysis).into_iter().map(|label| {
        Text::new(
            label.text,
            (SegmentValue::CenterOf(label.index), label.height_db),
            label_style.clone(),
        )
    }))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_at_default_dpi() {
        let style = FigureStyle::at_dpi(300);
        // 3 pt line, 10 pt marker diameter at 300/72 px per point
        assert_eq!(style.line_width, 13);
        assert_eq!(style.marker_radius, 21);
        assert!((style.label_px - 50.0).abs() < 1e-9);
        assert!(style.limit_offset > style.measured_offset);
    }

    #[test]
    fn test_legend_area_fits_sample() {
        for dpi in [300, 600, 1200] {
            let style = FigureStyle::at_dpi(dpi);
            assert!(style.legend_area as i32 > style.legend_sample);
        }
    }

    #[test]
    fn test_band_axis_has_one_slot_per_band() {
        let axis = band_axis(8);
        let values: Vec<SegmentValue<usize>> = axis.values().collect();

        // Eight band segments plus the closing edge
        assert_eq!(values.len(), 9);
        assert!(matches!(values[0], SegmentValue::Exact(0)));
        assert!(matches!(values[7], SegmentValue::Exact(7)));
        assert!(matches!(values[8], SegmentValue::Last));

        let labelled = axis.key_points(8);
        assert_eq!(labelled.len(), 8);
        assert!(matches!(labelled[7], SegmentValue::CenterOf(7)));
    }

    #[test]
    fn test_single_band_axis() {
        let values: Vec<SegmentValue<usize>> = band_axis(1).values().collect();
        assert_eq!(values.len(), 2);
        assert!(matches!(values[1], SegmentValue::Last));
    }

    #[test]
    fn test_last_bar_closes_on_axis_end() {
        assert!(matches!(
            bar_span(0, 8),
            (SegmentValue::Exact(0), SegmentValue::Exact(1))
        ));
        assert!(matches!(
            bar_span(7, 8),
            (SegmentValue::Exact(7), SegmentValue::Last)
        ));
    }

    #[test]
    fn test_whole_number_ticks() {
        assert_eq!(whole_number(&90.0), "90");
        assert_eq!(whole_number(&1000.0), "1000");
    }

    #[test]
    fn test_style_scales_with_dpi() {
        let low = FigureStyle::at_dpi(300);
        let high = FigureStyle::at_dpi(600);
        assert!((high.title_px - 2.0 * low.title_px).abs() < 1e-9);
        assert!(high.line_width > low.line_width);
        assert!(high.y_label_area > low.y_label_area);
    }
}
