// File: crates/spotgrid-core/src/error.rs
// Summary: Layout error kinds and the crate-wide Result alias.

use thiserror::Error;

/// Layout result type.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Failures raised by the layout and tick computations.
///
/// All variants are immediate, pure computation failures; there is no partial
/// state to roll back, so callers may retry with adjusted inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("empty input: at least one point is required")]
    EmptyInput,

    #[error("mismatched coordinate arrays: {x_len} x values vs {y_len} y values")]
    MismatchedCoordinates { x_len: usize, y_len: usize },

    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("invalid side \"{side}\". Valid sides are: top, bottom, left, right")]
    InvalidSide { side: String },

    #[error("tick refinement limit reached for range [{min}, {max}]")]
    TickLimitExceeded { min: f64, max: f64 },
}
