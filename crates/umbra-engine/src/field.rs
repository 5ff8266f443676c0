//! The finished output of a generation run.

use umbra_core::{Cell, Grid, GridResult, Vec2};
use umbra_sweep::surface_directions;

/// One exported cell: distance, direction to the surface, validity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texel {
    /// Signed distance in cell units.
    pub distance: f32,
    /// Unit vector towards the nearest surface, or zero where undefined.
    pub direction: Vec2,
    /// Whether the cell was ever written.
    pub valid: bool,
}

/// A finished signed distance field.
///
/// Read-only: produced by [`Generator::finish`](crate::Generator::finish)
/// or [`generate`](crate::generate).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    grid: Grid,
}

impl DistanceField {
    pub(crate) fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Signed distance at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> GridResult<f32> {
        self.grid.get(x, y)
    }

    /// Decoded state of `(x, y)`.
    pub fn cell(&self, x: u32, y: u32) -> GridResult<Cell> {
        self.grid.cell(x, y)
    }

    /// Whether `(x, y)` holds a value below the unset sentinel.
    pub fn is_valid(&self, x: u32, y: u32) -> GridResult<bool> {
        self.grid.get(x, y).map(Cell::is_written)
    }

    /// Row-major distances.
    pub fn values(&self) -> &[f32] {
        self.grid.values()
    }

    /// Borrow the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take the underlying grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Row-major texels with surface directions.
    pub fn texels(&self) -> Vec<Texel> {
        surface_directions(&self.grid)
            .into_iter()
            .zip(self.grid.values())
            .map(|(direction, &distance)| Texel {
                distance,
                direction,
                valid: Cell::is_written(distance),
            })
            .collect()
    }

    /// Texels flattened to `[distance, dir.x, dir.y, valid]`, validity as
    /// `0.0` or `1.0`.
    pub fn to_rgba(&self) -> Vec<[f32; 4]> {
        self.texels()
            .into_iter()
            .map(|t| {
                [
                    t.distance,
                    t.direction.x,
                    t.direction.y,
                    if t.valid { 1.0 } else { 0.0 },
                ]
            })
            .collect()
    }
}
