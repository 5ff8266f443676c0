//! Folding shape distances into a grid by pointwise minimum.
//!
//! A cell is only overwritten when the candidate distance is strictly
//! smaller than the stored value. Fresh grids hold the init sentinel, so
//! the first shape always lands and later shapes only win where they are
//! closer (or more inside).

use crate::shape::Shape;
use tracing::{debug, warn};
use umbra_core::{Grid, Vec2};

/// Inclusive rectangle of cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    /// First column.
    pub x0: u32,
    /// First row.
    pub y0: u32,
    /// Last column (inclusive).
    pub x1: u32,
    /// Last row (inclusive).
    pub y1: u32,
}

impl CellRange {
    /// The range covering every cell of `grid`.
    pub fn full(grid: &Grid) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: grid.width() - 1,
            y1: grid.height() - 1,
        }
    }

    /// Number of cells in the range.
    pub fn cell_count(&self) -> usize {
        (self.x1 - self.x0 + 1) as usize * (self.y1 - self.y0 + 1) as usize
    }

    /// Whether `(x, y)` is inside the range.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Clamp a cell coordinate into `[0, len - 1]`.
pub fn clamp_coord(v: i64, len: u32) -> u32 {
    v.clamp(0, len as i64 - 1) as u32
}

/// Cells covering the box `min..max` grown by `padding` on every side.
///
/// The box is floored/ceiled to cell indices and clamped to the grid.
/// Returns `None` when the grown box misses the grid entirely.
pub fn padded_range(grid: &Grid, min: Vec2, max: Vec2, padding: f32) -> Option<CellRange> {
    let x0 = (min.x - padding).floor() as i64;
    let y0 = (min.y - padding).floor() as i64;
    let x1 = (max.x + padding).ceil() as i64;
    let y1 = (max.y + padding).ceil() as i64;

    let (w, h) = (grid.width() as i64, grid.height() as i64);
    if x1 < 0 || y1 < 0 || x0 >= w || y0 >= h || x0 > x1 || y0 > y1 {
        return None;
    }

    Some(CellRange {
        x0: clamp_coord(x0, grid.width()),
        y0: clamp_coord(y0, grid.height()),
        x1: clamp_coord(x1, grid.width()),
        y1: clamp_coord(y1, grid.height()),
    })
}

/// Brute-force rasterization: evaluate `shape` at every cell centre.
///
/// Returns the number of cells that were overwritten.
pub fn rasterize(grid: &mut Grid, shape: &Shape) -> usize {
    let range = CellRange::full(grid);
    let updated = fold_range(grid, shape, range);
    debug!(
        shape = shape.kind(),
        cells = range.cell_count(),
        updated,
        "rasterized shape"
    );
    updated
}

/// Bounded rasterization: only cells within `padding` of the shape's
/// bounding box are visited.
///
/// Matches [`rasterize`] on every visited cell. Cells outside the range
/// are left untouched, so `padding` must cover the largest distance the
/// caller cares about.
pub fn rasterize_bounded(grid: &mut Grid, shape: &Shape, padding: f32) -> usize {
    let (min, max) = shape.bounds();
    let Some(range) = padded_range(grid, min, max, padding) else {
        warn!(
            shape = shape.kind(),
            padding, "padded bounds miss the grid, nothing rasterized"
        );
        return 0;
    };
    let updated = fold_range(grid, shape, range);
    debug!(
        shape = shape.kind(),
        padding,
        cells = range.cell_count(),
        updated,
        "rasterized shape (bounded)"
    );
    updated
}

fn fold_range(grid: &mut Grid, shape: &Shape, range: CellRange) -> usize {
    let mut updated = 0;
    for y in range.y0..=range.y1 {
        for x in range.x0..=range.x1 {
            let d = shape.signed_distance(Vec2::cell_centre(x, y));
            let i = grid.index(x, y);
            let cell = &mut grid.values_mut()[i];
            if d < *cell {
                *cell = d;
                updated += 1;
            }
        }
    }
    updated
}
