//! Error type shared by grid construction, pattern placement and configuration.

use thiserror::Error;

/// Errors raised while building or configuring a simulation.
///
/// Step functions never fail; every variant here is reported before the
/// first step runs.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("grid dimension must be positive, got {n}")]
    InvalidDimension { n: i64 },

    #[error("expected {expected} cells for the declared grid, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("pattern {pattern} anchored at ({i}, {j}) does not fit in a {n}x{n} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        i: isize,
        j: isize,
        n: usize,
    },

    #[error("cell {index} holds {value}, which is neither ON nor OFF")]
    InvalidCellValue { index: usize, value: u8 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid rule notation: {0}")]
    InvalidRule(String),

    #[error("failed to parse parameters: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Reject a zero-sized grid.
pub(crate) fn check_dimension(n: usize) -> Result<()> {
    if n == 0 {
        return Err(SimError::InvalidDimension { n: 0 });
    }
    Ok(())
}
