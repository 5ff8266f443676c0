//! Per-cell direction towards the nearest surface.

use umbra_core::{Grid, Vec2};

/// Unit vectors pointing from each cell towards the nearest boundary.
///
/// The gradient of the signed field points away from the surface outside
/// and towards it inside, so it is flipped by `-sign(d)`. Central
/// differences are used in the interior of the grid and one-sided
/// differences on the border. Cells where the gradient vanishes, or whose
/// distance is exactly zero, get [`Vec2::ZERO`].
pub fn surface_directions(grid: &Grid) -> Vec<Vec2> {
    grid.iter()
        .map(|(x, y, d)| {
            let g = Vec2::new(
                difference(grid, x, y, 1, 0),
                difference(grid, x, y, 0, 1),
            );
            if d > 0.0 {
                -g.normalize()
            } else if d < 0.0 {
                g.normalize()
            } else {
                Vec2::ZERO
            }
        })
        .collect()
}

/// Finite difference along one axis, `0` when the axis has a single cell.
fn difference(grid: &Grid, x: u32, y: u32, ax: i64, ay: i64) -> f32 {
    let (x, y) = (x as i64, y as i64);
    let centre = grid.try_get(x, y).unwrap_or(0.0);
    match (
        grid.try_get(x - ax, y - ay),
        grid.try_get(x + ax, y + ay),
    ) {
        (Some(lo), Some(hi)) => (hi - lo) * 0.5,
        (None, Some(hi)) => hi - centre,
        (Some(lo), None) => centre - lo,
        (None, None) => 0.0,
    }
}
