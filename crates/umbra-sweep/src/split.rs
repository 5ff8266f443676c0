//! Splitting a signed field into two unsigned grids and putting it back.
//!
//! The chamfer sweep only works on non-negative fields that grow away from
//! their seeds, so the signed field is decomposed into an exterior grid
//! (distance outside, `0` inside) and an interior grid (distance inside,
//! `0` outside). Their supports are complementary, so subtracting them
//! restores a signed field.

use crate::pass::UnsignedPass;
use tracing::debug;
use umbra_core::{Grid, GridError, GridResult};

/// The two unsigned working grids of one propagation run.
#[derive(Clone, Debug, PartialEq)]
pub struct DualGrid {
    /// Distance to the boundary for exterior cells, `0` for interior ones.
    pub exterior: Grid,
    /// Distance to the boundary for interior cells, `0` for exterior ones.
    pub interior: Grid,
}

impl DualGrid {
    /// Decompose a (cleaned) signed field.
    pub fn split(signed: &Grid) -> Self {
        let mut exterior = signed.clone();
        let mut interior = signed.clone();
        for ((e, i), &v) in exterior
            .values_mut()
            .iter_mut()
            .zip(interior.values_mut().iter_mut())
            .zip(signed.values())
        {
            if v < 0.0 {
                *e = 0.0;
                *i = -v;
            } else {
                *e = v;
                *i = 0.0;
            }
        }
        Self { exterior, interior }
    }

    /// Run `pass` over both grids independently.
    pub fn apply(&mut self, pass: &dyn UnsignedPass) {
        debug!(pass = pass.name(), "running pass on exterior grid");
        pass.apply(&mut self.exterior);
        debug!(pass = pass.name(), "running pass on interior grid");
        pass.apply(&mut self.interior);
    }

    /// `exterior - interior` for every cell, written into `signed`.
    ///
    /// # Errors
    ///
    /// [`GridError::LengthMismatch`] if `signed` does not hold as many cells
    /// as the split source. `signed` is left untouched.
    pub fn recombine_into(&self, signed: &mut Grid) -> GridResult<()> {
        if signed.len() != self.exterior.len() {
            return Err(GridError::LengthMismatch {
                expected: self.exterior.len(),
                actual: signed.len(),
            });
        }
        self.write_signed(signed.values_mut());
        Ok(())
    }

    /// `exterior - interior` as a new grid.
    pub fn recombine(&self) -> Grid {
        let mut out = self.exterior.clone();
        self.write_signed(out.values_mut());
        out
    }

    fn write_signed(&self, out: &mut [f32]) {
        for ((s, &e), &i) in out
            .iter_mut()
            .zip(self.exterior.values())
            .zip(self.interior.values())
        {
            *s = e - i;
        }
    }
}
