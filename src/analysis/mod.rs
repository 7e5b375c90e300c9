//! Dataset and reduction computation
//!
//! This module owns the literal measurement dataset and the pure
//! computation of the required noise reduction per band.

pub mod dataset;
pub mod reduction;

// Re-export commonly used items
pub use dataset::Scenario;
pub use reduction::{analyze, required_reduction};
