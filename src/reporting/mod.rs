//! Charts and logging
//!
//! This module renders the PNG figures for an analysis and provides the
//! structured logging helpers used across the application.

pub mod charts;
pub mod logging;

// Re-export commonly used items
pub use charts::ChartRenderer;
