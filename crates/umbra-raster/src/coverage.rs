//! Seeding a grid from an externally rasterized coverage image.
//!
//! Coverage is a per-cell scalar in `[0, 1]`: `1` fully inside, `0` fully
//! outside. How it was produced is not this crate's concern.

use tracing::{debug, warn};
use umbra_core::{Cell, Grid, GridError, GridResult};

/// Half-width of the antialiasing band in cell units.
///
/// Coverage `0` maps to `+AA_HALF_WIDTH`, coverage `1` to `-AA_HALF_WIDTH`
/// and `0.5` lands exactly on the boundary.
pub const AA_HALF_WIDTH: f32 = 0.75;

/// How coverage values are turned into initial distances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CoverageMode {
    /// Linear map through the antialiasing band.
    #[default]
    Antialiased,
    /// Threshold at `c > 0.5`; cells become far-inside or far-outside
    /// sentinels.
    Hard,
}

/// Initial distance for a single coverage value.
///
/// The value is clamped into `[0, 1]` first; NaN counts as uncovered.
pub fn coverage_to_distance(coverage: f32, mode: CoverageMode) -> f32 {
    let c = if coverage.is_nan() {
        0.0
    } else {
        coverage.clamp(0.0, 1.0)
    };
    match mode {
        CoverageMode::Antialiased => lerp(AA_HALF_WIDTH, -AA_HALF_WIDTH, c),
        CoverageMode::Hard => Cell::far(c > 0.5),
    }
}

/// Build a `width × height` grid from row-major coverage values.
///
/// Fails with [`GridError::LengthMismatch`] if `coverage` does not hold
/// exactly one value per cell.
pub fn load_coverage(
    width: u32,
    height: u32,
    coverage: &[f32],
    mode: CoverageMode,
) -> GridResult<Grid> {
    let expected = width as usize * height as usize;
    if coverage.len() != expected {
        return Err(GridError::LengthMismatch {
            expected,
            actual: coverage.len(),
        });
    }

    let out_of_range = coverage
        .iter()
        .filter(|c| !(0.0..=1.0).contains(*c))
        .count();
    if out_of_range > 0 {
        warn!(out_of_range, "coverage values outside [0, 1] were clamped");
    }

    let values = coverage
        .iter()
        .map(|&c| coverage_to_distance(c, mode))
        .collect();
    let grid = Grid::from_values(width, height, values)?;
    debug!(width, height, ?mode, "loaded coverage");
    Ok(grid)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
