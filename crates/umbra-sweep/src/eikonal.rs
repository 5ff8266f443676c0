//! Iterative Eikonal refinement of a sweep-initialized unsigned grid.
//!
//! Solves `|∇d| = 1` with Godunov upwind finite differences. For each cell
//! let `h` be the smaller horizontal neighbour and `v` the smaller vertical
//! one:
//!
//! ```text
//! |h - v| >= 1 : d = min(h, v) + 1
//! otherwise    : d = (h + v + sqrt(2 - (h - v)²)) / 2
//! ```
//!
//! The second line is the usual `0.5 * (s + sqrt(s² - 2(h² + v² - 1)))`
//! with `s = h + v`, rearranged so the discriminant does not cancel
//! catastrophically for large magnitudes. A cell only ever takes the new
//! value when it is smaller.
//!
//! The refiner runs a fixed number of in-place iterations (no convergence
//! test), then a full chamfer sweep to patch cells the relaxation did not
//! reach.
//!
//! Constructed via the builder pattern: [`EikonalRefiner::builder`].

use crate::chamfer;
use crate::pass::UnsignedPass;
use tracing::debug;
use umbra_core::Grid;

/// Default iteration budget.
pub const DEFAULT_ITERATIONS: u32 = 8;

/// Godunov upwind Eikonal relaxation followed by a chamfer sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EikonalRefiner {
    iterations: u32,
}

/// Builder for [`EikonalRefiner`].
pub struct EikonalRefinerBuilder {
    iterations: u32,
}

impl EikonalRefiner {
    /// Create a new builder for configuring an `EikonalRefiner`.
    pub fn builder() -> EikonalRefinerBuilder {
        EikonalRefinerBuilder {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Number of relaxation iterations per application.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for EikonalRefiner {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl EikonalRefinerBuilder {
    /// Set the iteration budget (default: 8). Must be >= 1.
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Build the refiner, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `iterations` is 0.
    pub fn build(self) -> Result<EikonalRefiner, String> {
        if self.iterations == 0 {
            return Err("iterations must be >= 1".to_string());
        }
        Ok(EikonalRefiner {
            iterations: self.iterations,
        })
    }
}

impl UnsignedPass for EikonalRefiner {
    fn name(&self) -> &str {
        "EikonalRefiner"
    }

    fn apply(&self, grid: &mut Grid) {
        let mut lowered = 0usize;
        for _ in 0..self.iterations {
            lowered += relax(grid);
        }
        debug!(
            iterations = self.iterations,
            lowered, "eikonal relaxation done"
        );
        chamfer::sweep(grid);
    }
}

/// Solve the local Eikonal equation for neighbour minima `h` and `v`.
///
/// A missing neighbour direction is passed as `f32::INFINITY`; when both
/// are missing the result is infinite too.
pub fn eikonal_update(h: f32, v: f32) -> f32 {
    if !h.is_finite() && !v.is_finite() {
        return f32::INFINITY;
    }
    let diff = h - v;
    if diff.abs() >= 1.0 {
        return h.min(v) + 1.0;
    }
    0.5 * (h + v + (2.0 - diff * diff).sqrt())
}

/// One in-place relaxation over every cell in row-major order.
///
/// Later cells see values already refined earlier in the same iteration.
/// Returns the number of cells that were lowered.
pub fn relax(grid: &mut Grid) -> usize {
    let w = grid.width() as usize;
    let h = grid.height() as usize;
    let values = grid.values_mut();
    let mut lowered = 0;

    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let left = if x > 0 { values[i - 1] } else { f32::INFINITY };
            let right = if x + 1 < w { values[i + 1] } else { f32::INFINITY };
            let up = if y > 0 { values[i - w] } else { f32::INFINITY };
            let down = if y + 1 < h { values[i + w] } else { f32::INFINITY };

            let d = eikonal_update(left.min(right), up.min(down));
            if d < values[i] {
                values[i] = d;
                lowered += 1;
            }
        }
    }
    lowered
}
