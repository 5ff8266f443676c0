//! Error types for grid construction and access.

use thiserror::Error;

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors arising from grid construction, access or resampling.
///
/// Every operation that can fail checks its preconditions before touching
/// any cell, so an `Err` always leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    #[error("cell ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },

    /// Attempted to construct a grid with zero cells.
    #[error("grid must have at least one cell, got {width}x{height}")]
    Empty {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A dimension exceeds [`Grid::MAX_DIM`](crate::Grid::MAX_DIM).
    #[error("{name} = {value} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// Which dimension overflowed (`"width"` or `"height"`).
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },

    /// A value buffer does not match the grid's cell count.
    #[error("buffer holds {actual} values, expected {expected}")]
    LengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// Resampling requires both dimensions to be multiples of the factor.
    #[error("{width}x{height} grid is not divisible by resample factor {factor}")]
    NotDivisible {
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
        /// Requested factor.
        factor: u32,
    },

    /// A resample factor of zero was requested.
    #[error("resample factor must be at least 1")]
    ZeroFactor,
}

impl GridError {
    /// Create an out-of-bounds error for `(x, y)` on a `width × height` grid.
    #[must_use]
    pub fn out_of_bounds(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
