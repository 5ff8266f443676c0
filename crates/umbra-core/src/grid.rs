//! The owned 2D buffer of per-cell distance values.

use crate::cell::{Cell, UNSET};
use crate::error::{GridError, GridResult};
use crate::neighbourhood::{Offset, OFFSETS_8};
use smallvec::SmallVec;

/// A row-major `width × height` buffer of `f32` cell values.
///
/// Dimensions are fixed for the lifetime of the grid; resampling produces a
/// new grid. Public accessors reject out-of-bounds coordinates instead of
/// clamping them. Kernels that need raw speed work on
/// [`values`](Grid::values) / [`values_mut`](Grid::values_mut) with
/// [`index`](Grid::index) arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl Grid {
    /// Maximum size of either dimension. Neighbour arithmetic uses `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every cell set to [`UNSET`].
    ///
    /// Returns `Err(GridError::Empty)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        Self::filled(width, height, UNSET)
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: f32) -> GridResult<Self> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            values: vec![value; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_values(width: u32, height: u32, values: Vec<f32>) -> GridResult<Self> {
        check_dims(width, height)?;
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(x, y)` lies inside the grid.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Flat row-major index of `(x, y)`. The caller guarantees bounds.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Checked read of a raw cell value.
    pub fn get(&self, x: u32, y: u32) -> GridResult<f32> {
        self.check(x, y)?;
        Ok(self.values[self.index(x, y)])
    }

    /// Read with signed coordinates, `None` when off-grid.
    #[inline]
    pub fn try_get(&self, x: i64, y: i64) -> Option<f32> {
        if self.in_bounds(x, y) {
            Some(self.values[self.index(x as u32, y as u32)])
        } else {
            None
        }
    }

    /// Checked write of a raw cell value.
    pub fn set(&mut self, x: u32, y: u32, value: f32) -> GridResult<()> {
        self.check(x, y)?;
        let i = self.index(x, y);
        self.values[i] = value;
        Ok(())
    }

    /// Checked read of the decoded cell state.
    pub fn cell(&self, x: u32, y: u32) -> GridResult<Cell> {
        self.get(x, y).map(Cell::from_raw)
    }

    /// The neighbour of `(x, y)` at `offset`, or `None` if off-grid.
    #[inline]
    pub fn step(&self, x: u32, y: u32, offset: Offset) -> Option<(u32, u32)> {
        let nx = x as i64 + offset.dx as i64;
        let ny = y as i64 + offset.dy as i64;
        if self.in_bounds(nx, ny) {
            Some((nx as u32, ny as u32))
        } else {
            None
        }
    }

    /// In-bounds 8-connected neighbours of `(x, y)`.
    ///
    /// Corners have 3, border cells 5, interior cells 8.
    pub fn neighbours(&self, x: u32, y: u32) -> SmallVec<[(u32, u32); 8]> {
        OFFSETS_8
            .iter()
            .filter_map(|&o| self.step(x, y, o))
            .collect()
    }

    /// Row-major cell values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Mutable row-major cell values.
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Consume the grid, returning its buffer.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Iterate `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, f32)> + '_ {
        let w = self.width;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i % w as usize) as u32, (i / w as usize) as u32, v))
    }

    fn check(&self, x: u32, y: u32) -> GridResult<()> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(GridError::out_of_bounds(
                x as i64,
                y as i64,
                self.width,
                self.height,
            ))
        }
    }
}

fn check_dims(width: u32, height: u32) -> GridResult<()> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty { width, height });
    }
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if height > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "height",
            value: height,
            max: Grid::MAX_DIM,
        });
    }
    Ok(())
}
