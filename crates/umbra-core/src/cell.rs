//! Cell states and the sentinel values that encode them.
//!
//! The grid stores one `f32` per cell so the propagation kernels can work
//! on a flat numeric buffer. Two magnitudes in that buffer are reserved:
//!
//! - [`UNSET`]: the initialization value. No rasterizer or coverage load
//!   has written the cell yet.
//! - [`FAR`]: `±FAR` marks a cell that the field cleaner decided is far
//!   from any boundary. The sign still says inside or outside, the
//!   magnitude carries no distance information.
//!
//! Everything outside this module reads cells through [`Cell`] instead of
//! comparing against the raw sentinels.

/// Initialization value of every cell in a fresh grid.
pub const UNSET: f32 = 999_999.0;

/// Magnitude written to non-edge cells by the field cleaner.
pub const FAR: f32 = 99_999.0;

/// Decoded state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    /// Never written by a rasterizer or coverage load.
    Unset,
    /// Cleaned non-edge cell; only the side of the boundary is known.
    Far {
        /// `true` for the `-FAR` (inside) sentinel.
        interior: bool,
    },
    /// A usable signed distance, negative inside.
    Distance(f32),
}

impl Cell {
    /// Decode a raw buffer value.
    pub fn from_raw(value: f32) -> Self {
        if value >= UNSET {
            Cell::Unset
        } else if value == FAR {
            Cell::Far { interior: false }
        } else if value == -FAR {
            Cell::Far { interior: true }
        } else {
            Cell::Distance(value)
        }
    }

    /// Encode back into the raw buffer representation.
    pub fn to_raw(self) -> f32 {
        match self {
            Cell::Unset => UNSET,
            Cell::Far { interior: false } => FAR,
            Cell::Far { interior: true } => -FAR,
            Cell::Distance(d) => d,
        }
    }

    /// Sentinel for a cleaned cell on the given side of the boundary.
    pub fn far(interior: bool) -> f32 {
        Cell::Far { interior }.to_raw()
    }

    /// Whether a raw value has ever been written (below the init sentinel).
    pub fn is_written(value: f32) -> bool {
        value < UNSET
    }

    /// `true` for interior cells (negative sign).
    pub fn is_interior(self) -> bool {
        match self {
            Cell::Unset => false,
            Cell::Far { interior } => interior,
            Cell::Distance(d) => d < 0.0,
        }
    }

    /// The distance if this cell carries one.
    pub fn distance(self) -> Option<f32> {
        match self {
            Cell::Distance(d) => Some(d),
            _ => None,
        }
    }
}
