//! Font discovery and registration for chart text

use plotters::style::{FontStyle, register_font};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::constants::fonts;
use crate::core::error::{NoiseGapError, Result};
use crate::reporting::logging;

// Font files already handed to the renderer; their bytes live for the process.
static REGISTERED: Mutex<Vec<(PathBuf, FontStyle)>> = Mutex::new(Vec::new());

/// First existing file among `candidates`.
pub fn find_font<'a, I>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Resolve the regular font: the configured file if given, else a system font.
pub fn resolve_regular_font(configured: Option<&str>) -> Result<PathBuf> {
    match configured {
        Some(path) => {
            let path = PathBuf::from(path);
            if path.is_file() {
                Ok(path)
            } else {
                Err(NoiseGapError::Font(format!(
                    "font file '{}' does not exist",
                    path.display()
                )))
            }
        }
        None => find_font(fonts::REGULAR_CANDIDATES).ok_or_else(|| {
            NoiseGapError::Font(
                "no system font found; pass one with --font or set font_path in .noisegap.toml"
                    .to_string(),
            )
        }),
    }
}

/// Register chart fonts under the sans-serif family.
///
/// Bold text uses a matching system bold face when one exists and the
/// configured font otherwise.
pub fn register_chart_fonts(configured: Option<&str>) -> Result<PathBuf> {
    let regular = resolve_regular_font(configured)?;
    register(&regular, FontStyle::Normal)?;
    logging::log_font_selected(&regular);

    let bold = match configured {
        Some(_) => regular.clone(),
        None => find_font(fonts::BOLD_CANDIDATES).unwrap_or_else(|| regular.clone()),
    };
    register(&bold, FontStyle::Bold)?;

    Ok(regular)
}

fn register(path: &Path, style: FontStyle) -> Result<()> {
    let mut registered = REGISTERED
        .lock()
        .map_err(|_| NoiseGapError::Font("font registry poisoned".to_string()))?;
    if registered
        .iter()
        .any(|(p, s)| p == path && s.as_str() == style.as_str())
    {
        return Ok(());
    }

    let bytes = std::fs::read(path).map_err(|e| {
        NoiseGapError::Font(format!("could not read font '{}': {e}", path.display()))
    })?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(fonts::FAMILY, style, bytes).map_err(|_| {
        NoiseGapError::Font(format!(
            "'{}' is not a valid TrueType/OpenType font",
            path.display()
        ))
    })?;

    registered.push((path.to_path_buf(), style));
    Ok(())
}
