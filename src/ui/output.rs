//! Console report formatting and display

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::core::constants::{output_formats, report};
use crate::core::error::Result;
use crate::core::types::{BandReduction, ReductionAnalysis};
use crate::ui::color::{Colors, paint, supports_formatting};

/// Per-band summary: header line plus `<frequency> Hz: <reduction> dB` lines
pub fn render_summary(analysis: &ReductionAnalysis, colored: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", paint(report::SUMMARY_HEADER, Colors::BOLD, colored));
    for entry in &analysis.bands {
        let _ = writeln!(
            out,
            "{} Hz: {:.1} dB",
            entry.band.frequency_hz, entry.reduction_db
        );
    }
    out
}

/// One centered table row
pub fn format_table_row(entry: &BandReduction) -> String {
    format!(
        "{:^11} | {:^16.1} | {:^18.1} | {:^16.1}",
        entry.band.frequency_hz, entry.band.measured_db, entry.band.limit_db, entry.reduction_db
    )
}

/// Bordered table with frequency, measured, limit and reduction columns
pub fn render_table(analysis: &ReductionAnalysis, colored: bool) -> String {
    let heavy_rule = "=".repeat(report::RULE_WIDTH);
    let light_rule = "-".repeat(report::RULE_WIDTH);

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{heavy_rule}");
    let _ = writeln!(
        out,
        "{}",
        paint(report::TABLE_TITLE, Colors::BRIGHT_CYAN, colored)
    );
    let _ = writeln!(out, "{heavy_rule}");
    let _ = writeln!(out, "{}", paint(report::TABLE_HEADER, Colors::BOLD, colored));
    let _ = writeln!(out, "{light_rule}");
    for entry in &analysis.bands {
        let _ = writeln!(out, "{}", format_table_row(entry));
    }
    let _ = writeln!(out, "{heavy_rule}");
    out
}

/// Summary followed by the table
pub fn render_text_report(analysis: &ReductionAnalysis, colored: bool) -> String {
    let mut out = render_summary(analysis, colored);
    out.push_str(&render_table(analysis, colored));
    out
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    scenario: &'a str,
    generated_at: String,
    bands: &'a [BandReduction],
    exceeding_bands: usize,
    max_reduction_db: f64,
    charts: Vec<String>,
}

/// Machine-readable report
pub fn render_json_report(
    analysis: &ReductionAnalysis,
    charts: &[PathBuf],
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let report = JsonReport {
        scenario: &analysis.scenario,
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        bands: &analysis.bands,
        exceeding_bands: analysis.exceeding_count(),
        max_reduction_db: analysis.max_reduction(),
        charts: charts.iter().map(|p| p.display().to_string()).collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print the console report for the text and minimal formats
pub fn display_report(analysis: &ReductionAnalysis, output_format: &str) {
    let colored = output_format == output_formats::TEXT && supports_formatting();
    print!("{}", render_text_report(analysis, colored));
}

/// Print the JSON report
pub fn display_json_report(analysis: &ReductionAnalysis, charts: &[PathBuf]) -> Result<()> {
    println!("{}", render_json_report(analysis, charts, Utc::now())?);
    Ok(())
}

/// Chart notice line for the text format
pub fn chart_notice(path: &std::path::Path, colored: bool) -> String {
    format!(
        "{} {}",
        paint("Chart saved:", Colors::GREEN, colored),
        path.display()
    )
}

/// Announce written charts (text format only)
pub fn display_chart_notices(charts: &[PathBuf], output_format: &str) {
    if output_format != output_formats::TEXT || charts.is_empty() {
        return;
    }
    let colored = supports_formatting();
    println!();
    for path in charts {
        println!("{}", chart_notice(path, colored));
    }
}
