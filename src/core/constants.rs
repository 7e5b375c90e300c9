/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal strings, dimensions and defaults
/// used across the report, the charts and the configuration layer.
/// Output format constants
pub mod output_formats {
    /// Text output format - colored report plus chart notices
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain report without colors or notices
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Scenario identification and output file names
pub mod scenario {
    /// Label of the baked-in dataset
    pub const LABEL: &str = "variant 31";
    /// Two-panel comparison + reduction figure
    pub const ANALYSIS_CHART_FILE: &str = "noise_reduction_analysis_variant31.png";
    /// Detailed comparison figure
    pub const DETAILED_CHART_FILE: &str = "detailed_noise_comparison_variant31.png";
}

/// Chart rendering defaults
pub mod charts {
    /// Default resolution, dots per inch
    pub const DEFAULT_DPI: u32 = 300;
    /// Lowest accepted resolution
    pub const MIN_DPI: u32 = 300;
    /// Highest accepted resolution
    pub const MAX_DPI: u32 = 1200;
    /// Typographic points per inch
    pub const POINTS_PER_INCH: f64 = 72.0;

    /// Analysis figure size in inches (width, height)
    pub const ANALYSIS_FIGURE_INCHES: (f64, f64) = (14.0, 10.0);
    /// Detailed figure size in inches (width, height)
    pub const DETAILED_FIGURE_INCHES: (f64, f64) = (12.0, 8.0);

    /// Logarithmic frequency axis limits, Hz
    pub const FREQUENCY_AXIS_HZ: (f64, f64) = (50.0, 10_000.0);
    /// Sound pressure level axis limits, dB
    pub const LEVEL_AXIS_DB: (f64, f64) = (50.0, 90.0);

    /// Half-width factor of the shaded box drawn around an exceeding band
    pub const EXCEEDANCE_BOX_SPREAD: f64 = 0.1;
    /// Gap between a bar top and its label, dB
    pub const BAR_LABEL_OFFSET_DB: f64 = 0.5;

    /// Line width, points
    pub const LINE_WIDTH_PT: f64 = 3.0;
    /// Marker diameter, points
    pub const MARKER_SIZE_PT: f64 = 10.0;
    /// Title font size, points
    pub const TITLE_FONT_PT: f64 = 14.0;
    /// Axis description and legend font size, points
    pub const LABEL_FONT_PT: f64 = 12.0;
    /// Value annotation font size, points
    pub const ANNOTATION_FONT_PT: f64 = 10.0;
    /// Offset of the measured value label above its point, points
    pub const MEASURED_LABEL_OFFSET_PT: f64 = 10.0;
    /// Offset of the limit value label below its point, points
    pub const LIMIT_LABEL_OFFSET_PT: f64 = 15.0;
}

/// Font discovery
pub mod fonts {
    /// Family name registered with the chart text renderer
    pub const FAMILY: &str = "sans-serif";

    /// Regular-weight font files tried in order when no font is configured
    pub const REGULAR_CANDIDATES: [&str; 6] = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];

    /// Bold font files tried in order; bold text falls back to regular
    pub const BOLD_CANDIDATES: [&str; 5] = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
    ];
}

/// Console report labels
pub mod report {
    /// Header of the per-band summary
    pub const SUMMARY_HEADER: &str = "Required noise reduction by frequency band:";
    /// Title of the bordered table
    pub const TABLE_TITLE: &str = "REQUIRED NOISE REDUCTION TABLE";
    /// Column header of the bordered table
    pub const TABLE_HEADER: &str =
        "Frequency, Hz | Calculated level | Permitted level | Required reduction";
    /// Width of the `=` and `-` rules
    pub const RULE_WIDTH: usize = 60;
}

/// Configuration file discovery
pub mod config_files {
    /// Config file name looked up in the working directory and its parents
    pub const FILE_NAME: &str = ".noisegap.toml";
    /// Parent directories searched above the working directory
    pub const PARENT_SEARCH_DEPTH: usize = 3;
    /// Default chart output directory
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_chart_file_names_carry_scenario() {
        assert!(scenario::ANALYSIS_CHART_FILE.ends_with("variant31.png"));
        assert!(scenario::DETAILED_CHART_FILE.ends_with("variant31.png"));
        assert_ne!(scenario::ANALYSIS_CHART_FILE, scenario::DETAILED_CHART_FILE);
    }

    #[test]
    fn test_dpi_bounds() {
        assert!(charts::MIN_DPI <= charts::DEFAULT_DPI);
        assert!(charts::DEFAULT_DPI <= charts::MAX_DPI);
        assert_eq!(charts::DEFAULT_DPI, 300);
    }

    #[test]
    fn test_table_header_has_four_columns() {
        assert_eq!(report::TABLE_HEADER.split(" | ").count(), 4);
        assert_eq!(report::RULE_WIDTH, 60);
    }
}
