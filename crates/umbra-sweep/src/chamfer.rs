//! Two-pass 8-point sequential Euclidean distance transform (8PSSEDT).
//!
//! Each pass is a raster scan in which every cell is relaxed against
//! neighbours that were already visited in the current scan direction:
//!
//! ```text
//! Pass A, rows top → bottom:
//!   left → right : (-1, 0) (0, -1) (-1, -1) (1, -1)
//!   right → left : (1, 0)
//! Pass B, rows bottom → top:
//!   right → left : (1, 0) (0, 1) (-1, 1) (1, 1)
//!   left → right : (-1, 0)
//! ```
//!
//! Orthogonal steps cost `1`, diagonal steps `√2`. Seeded with exact
//! distances at edge cells and large values elsewhere, the result is exact
//! along axis and diagonal rays from each seed and slightly overestimated
//! between them.

use crate::pass::UnsignedPass;
use umbra_core::{Grid, Offset};

const EAST: Offset = Offset::new(1, 0);
const WEST: Offset = Offset::new(-1, 0);

const PASS_A: [Offset; 4] = [
    WEST,
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
];
const PASS_B: [Offset; 4] = [
    EAST,
    Offset::new(0, 1),
    Offset::new(-1, 1),
    Offset::new(1, 1),
];

/// The chamfer propagation sweep as an [`UnsignedPass`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ChamferSweep;

impl UnsignedPass for ChamferSweep {
    fn name(&self) -> &str {
        "ChamferSweep"
    }

    fn apply(&self, grid: &mut Grid) {
        sweep(grid);
    }
}

/// Relax `(x, y)` against its neighbour at `offset`.
///
/// No-op when `(x, y)` or the neighbour is off-grid. Otherwise the cell
/// takes `neighbour + |offset|` if that is smaller than its current value.
#[inline]
pub fn compare(grid: &mut Grid, x: u32, y: u32, offset: Offset) {
    if x >= grid.width() || y >= grid.height() {
        return;
    }
    let Some((nx, ny)) = grid.step(x, y, offset) else {
        return;
    };
    let candidate = grid.values()[grid.index(nx, ny)] + offset.length();
    let i = grid.index(x, y);
    let cell = &mut grid.values_mut()[i];
    if candidate < *cell {
        *cell = candidate;
    }
}

/// Run pass A then pass B over the whole grid.
pub fn sweep(grid: &mut Grid) {
    let (w, h) = (grid.width(), grid.height());

    for y in 0..h {
        for x in 0..w {
            for &offset in &PASS_A {
                compare(grid, x, y, offset);
            }
        }
        for x in (0..w).rev() {
            compare(grid, x, y, EAST);
        }
    }

    for y in (0..h).rev() {
        for x in (0..w).rev() {
            for &offset in &PASS_B {
                compare(grid, x, y, offset);
            }
        }
        for x in 0..w {
            compare(grid, x, y, WEST);
        }
    }
}
