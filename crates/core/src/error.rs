//! Error types for the glider-engine core.

use thiserror::Error;

/// Errors produced by core construction and validation.
///
/// Probes and trajectory generation are total once a field exists; the only
/// failure modes live at the construction boundary.
#[derive(Debug, Error)]
pub enum GliderError {
    /// Bounds rectangle was degenerate: min must be strictly less than max
    /// on both axes.
    #[error(
        "degenerate bounds: min ({min_x}, {min_y}) must be strictly below max ({max_x}, {max_y}) on both axes"
    )]
    DegenerateBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    /// Scene width or height was zero, negative, or non-finite.
    #[error("invalid dimensions: width and height must be finite and positive")]
    InvalidDimensions,
}
