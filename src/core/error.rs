use plotters::drawing::DrawingAreaErrorKind;
use std::fmt;

/// Error types for noisegap operations
#[derive(Debug)]
pub enum NoiseGapError {
    /// IO error (output directory, file writes)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// The frequency, measured and limit columns differ in length
    ShapeMismatch {
        frequencies: usize,
        measured: usize,
        limits: usize,
    },

    /// A band violates a dataset precondition (ordering, finiteness, emptiness)
    InvalidBand(String),

    /// Chart drawing or encoding failure
    Render(String),

    /// No usable font for chart text
    Font(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),
}

impl fmt::Display for NoiseGapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseGapError::Io(err) => write!(f, "IO error: {err}"),
            NoiseGapError::Config(msg) => write!(f, "Configuration error: {msg}"),
            NoiseGapError::ShapeMismatch {
                frequencies,
                measured,
                limits,
            } => write!(
                f,
                "Configuration error: input columns differ in length \
                 (frequencies: {frequencies}, measured: {measured}, limits: {limits})"
            ),
            NoiseGapError::InvalidBand(msg) => write!(f, "Invalid band: {msg}"),
            NoiseGapError::Render(msg) => write!(f, "Render error: {msg}"),
            NoiseGapError::Font(msg) => write!(f, "Font error: {msg}"),
            NoiseGapError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            NoiseGapError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for NoiseGapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NoiseGapError::Io(err) => Some(err),
            NoiseGapError::TomlParsing(err) => Some(err),
            NoiseGapError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NoiseGapError {
    fn from(err: std::io::Error) -> Self {
        NoiseGapError::Io(err)
    }
}

impl From<toml::de::Error> for NoiseGapError {
    fn from(err: toml::de::Error) -> Self {
        NoiseGapError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for NoiseGapError {
    fn from(err: serde_json::Error) -> Self {
        NoiseGapError::Json(err)
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for NoiseGapError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        NoiseGapError::Render(err.to_string())
    }
}

/// Type alias for Results using NoiseGapError
pub type Result<T> = std::result::Result<T, NoiseGapError>;
