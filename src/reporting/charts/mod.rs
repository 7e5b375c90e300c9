//! PNG chart rendering for a reduction analysis.
//!
//! Two figures are produced per run: a two-panel overview (levels plus
//! required reduction bars) and a detailed comparison with shaded
//! exceedance segments and inline ΔL notes.

pub mod fonts;
pub mod geometry;
pub mod panels;

use plotters::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::analysis::Scenario;
use crate::core::constants::charts;
use crate::core::constants::scenario::{ANALYSIS_CHART_FILE, DETAILED_CHART_FILE};
use crate::core::error::{NoiseGapError, Result};
use crate::core::types::ReductionAnalysis;
use crate::reporting::logging;
use crate::ui::ProgressReporter;

use geometry::figure_pixels;
use panels::{FigureStyle, LevelPanel, Shading, draw_level_panel, draw_reduction_panel};

const LEVELS_TITLE: &str = "Permitted vs calculated sound pressure levels";

/// Two-panel figure: levels on top, required reduction bars below.
pub fn render_analysis_figure(
    path: &Path,
    dpi: u32,
    scenario: &Scenario,
    analysis: &ReductionAnalysis,
) -> Result<(u32, u32)> {
    let size = figure_pixels(charts::ANALYSIS_FIGURE_INCHES, dpi);
    let style = FigureStyle::at_dpi(dpi);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(size.1 / 2);
    let caption = format!("{LEVELS_TITLE}, {}", scenario.label());

    draw_level_panel(
        &upper,
        &style,
        scenario.bands(),
        &LevelPanel {
            caption: &caption,
            measured_label: "Calculated spectrum (L calc)",
            limit_label: "Permitted spectrum (L perm)",
            shading: Shading::PerBand,
            value_labels: true,
            delta_annotations: false,
        },
    )?;
    draw_reduction_panel(&lower, &style, analysis)?;

    root.present()?;
    Ok(size)
}

/// Single-panel comparison with exceedance segments and ΔL notes.
pub fn render_detailed_figure(path: &Path, dpi: u32, scenario: &Scenario) -> Result<(u32, u32)> {
    let size = figure_pixels(charts::DETAILED_FIGURE_INCHES, dpi);
    let style = FigureStyle::at_dpi(dpi);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let caption = format!("{LEVELS_TITLE} (detailed), {}", scenario.label());

    draw_level_panel(
        &root,
        &style,
        scenario.bands(),
        &LevelPanel {
            caption: &caption,
            measured_label: "L calc (calculated)",
            limit_label: "L perm (permitted)",
            shading: Shading::Segments,
            value_labels: false,
            delta_annotations: true,
        },
    )?;

    root.present()?;
    Ok(size)
}

/// Writes both figures into one output directory.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output_dir: PathBuf,
    dpi: u32,
    font_path: Option<String>,
}

impl ChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, dpi: u32, font_path: Option<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            dpi,
            font_path,
        }
    }

    pub fn analysis_chart_path(&self) -> PathBuf {
        self.output_dir.join(ANALYSIS_CHART_FILE)
    }

    pub fn detailed_chart_path(&self) -> PathBuf {
        self.output_dir.join(DETAILED_CHART_FILE)
    }

    /// Render figure 1 then figure 2 and return the written paths in order.
    ///
    /// The first failure aborts the run; a figure already written stays on
    /// disk.
    pub fn render_all(
        &self,
        scenario: &Scenario,
        analysis: &ReductionAnalysis,
        progress: &mut ProgressReporter,
    ) -> Result<Vec<PathBuf>> {
        if !(charts::MIN_DPI..=charts::MAX_DPI).contains(&self.dpi) {
            return Err(NoiseGapError::Config(format!(
                "DPI of {} is out of range. Expected a value between {}-{}.",
                self.dpi,
                charts::MIN_DPI,
                charts::MAX_DPI
            )));
        }

        std::fs::create_dir_all(&self.output_dir)?;
        fonts::register_chart_fonts(self.font_path.as_deref())?;

        progress.start_chart_rendering(2);
        let result = self.render_each(scenario, analysis, progress);
        match &result {
            Ok(written) => progress.finish_chart_rendering(written.len()),
            Err(_) => progress.finish_and_clear(),
        }
        result
    }

    fn render_each(
        &self,
        scenario: &Scenario,
        analysis: &ReductionAnalysis,
        progress: &ProgressReporter,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(2);

        let path = self.analysis_chart_path();
        progress.chart_started(ANALYSIS_CHART_FILE);
        let start = Instant::now();
        let size = render_analysis_figure(&path, self.dpi, scenario, analysis)?;
        logging::log_chart_written(&path, size, start.elapsed().as_millis());
        progress.chart_finished(&path);
        written.push(path);

        let path = self.detailed_chart_path();
        progress.chart_started(DETAILED_CHART_FILE);
        let start = Instant::now();
        let size = render_detailed_figure(&path, self.dpi, scenario)?;
        logging::log_chart_written(&path, size, start.elapsed().as_millis());
        progress.chart_finished(&path);
        written.push(path);

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::core::constants::fonts as font_constants;
    use tempfile::TempDir;

    fn system_font_available() -> bool {
        fonts::find_font(font_constants::REGULAR_CANDIDATES).is_some()
    }

    #[test]
    fn test_chart_paths() {
        let renderer = ChartRenderer::new("out", 300, None);
        assert_eq!(
            renderer.analysis_chart_path(),
            PathBuf::from("out/noise_reduction_analysis_variant31.png")
        );
        assert_eq!(
            renderer.detailed_chart_path(),
            PathBuf::from("out/detailed_noise_comparison_variant31.png")
        );
    }

    #[test]
    fn test_render_all_rejects_out_of_range_dpi() {
        let dir = TempDir::new().unwrap();
        let renderer = ChartRenderer::new(dir.path(), 72, None);
        let scenario = Scenario::variant_31().unwrap();
        let analysis = analyze(&scenario);

        let err = renderer
            .render_all(&scenario, &analysis, &mut ProgressReporter::disabled())
            .unwrap_err();
        assert!(matches!(err, NoiseGapError::Config(_)));
        assert!(!renderer.analysis_chart_path().exists());
    }

    #[test]
    fn test_render_all_with_missing_font_fails() {
        let dir = TempDir::new().unwrap();
        let renderer = ChartRenderer::new(
            dir.path().join("charts"),
            300,
            Some("/no/such/font.ttf".to_string()),
        );
        let scenario = Scenario::variant_31().unwrap();
        let analysis = analyze(&scenario);

        let err = renderer
            .render_all(&scenario, &analysis, &mut ProgressReporter::disabled())
            .unwrap_err();
        assert!(matches!(err, NoiseGapError::Font(_)));
        assert!(!renderer.analysis_chart_path().exists());
    }

    #[test]
    fn test_render_all_writes_both_figures() {
        if !system_font_available() {
            return;
        }

        let dir = TempDir::new().unwrap();
        let renderer = ChartRenderer::new(dir.path().join("nested/out"), 300, None);
        let scenario = Scenario::variant_31().unwrap();
        let analysis = analyze(&scenario);

        let written = renderer
            .render_all(&scenario, &analysis, &mut ProgressReporter::disabled())
            .unwrap();

        assert_eq!(
            written,
            vec![renderer.analysis_chart_path(), renderer.detailed_chart_path()]
        );
        for path in &written {
            let bytes = std::fs::read(path).unwrap();
            assert!(bytes.starts_with(b"\x89PNG"));
        }
    }

    #[test]
    fn test_figure_dimensions_follow_dpi() {
        if !system_font_available() {
            return;
        }
        fonts::register_chart_fonts(None).unwrap();

        let dir = TempDir::new().unwrap();
        let scenario = Scenario::variant_31().unwrap();
        let path = dir.path().join("detailed.png");

        let size = render_detailed_figure(&path, 300, &scenario).unwrap();
        assert_eq!(size, (3600, 2400));
        assert!(path.is_file());
    }
}
