use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress display for chart rendering, drawn on stderr.
pub struct ProgressReporter {
    chart_progress: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            chart_progress: None,
            enabled,
        }
    }

    /// A reporter that never draws anything
    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn start_chart_rendering(&mut self, total_charts: usize) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_charts as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} charts {msg}")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb.set_message("Rendering charts");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.chart_progress = Some(pb);
    }

    pub fn chart_started(&self, file_name: &str) {
        if let Some(ref pb) = self.chart_progress {
            pb.set_message(format!("Rendering {file_name}"));
        }
    }

    pub fn chart_finished(&self, path: &Path) {
        if let Some(ref pb) = self.chart_progress {
            pb.inc(1);
            pb.set_message(format!("Wrote {}", path.display()));
        }
    }

    pub fn finish_chart_rendering(&self, written: usize) {
        if let Some(ref pb) = self.chart_progress {
            let message = if written == 1 {
                "✓ 1 chart rendered".to_string()
            } else {
                format!("✓ {written} charts rendered")
            };
            pb.finish_with_message(message);
        }
    }

    /// Remove the bar, e.g. before an error is printed
    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.chart_progress {
            pb.finish_and_clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = ProgressReporter::new(true);
        assert!(reporter.is_enabled());
        assert!(reporter.chart_progress.is_none());
    }

    #[test]
    fn test_progress_reporter_disabled() {
        let mut reporter = ProgressReporter::disabled();
        assert!(!reporter.is_enabled());

        reporter.start_chart_rendering(2);
        assert!(reporter.chart_progress.is_none());
    }

    #[test]
    fn test_progress_methods_dont_panic_when_disabled() {
        let mut reporter = ProgressReporter::new(false);

        reporter.start_chart_rendering(2);
        reporter.chart_started("a.png");
        reporter.chart_finished(Path::new("out/a.png"));
        reporter.finish_chart_rendering(1);
        reporter.finish_and_clear();
    }

    #[test]
    fn test_enabled_chart_progress() {
        let mut reporter = ProgressReporter::new(true);

        reporter.start_chart_rendering(2);
        assert!(reporter.chart_progress.is_some());

        reporter.chart_started("a.png");
        reporter.chart_finished(Path::new("out/a.png"));
        reporter.chart_started("b.png");
        reporter.chart_finished(Path::new("out/b.png"));

        let position = reporter.chart_progress.as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));

        reporter.finish_chart_rendering(2);
    }

    #[test]
    fn test_finish_and_clear_after_partial_run() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start_chart_rendering(2);
        reporter.chart_finished(Path::new("out/a.png"));
        reporter.finish_and_clear();
    }

    #[test]
    fn test_progress_zero_charts() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start_chart_rendering(0);
        reporter.finish_chart_rendering(0);
    }
}
