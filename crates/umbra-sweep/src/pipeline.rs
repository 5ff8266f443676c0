//! Signed propagation: clean, split, run passes, recombine.

use crate::classify::clear_non_edge_cells;
use crate::pass::UnsignedPass;
use crate::split::DualGrid;
use tracing::debug;
use umbra_core::Grid;

/// Propagate the edge distances of a rasterized signed field to every cell.
///
/// 1. Non-edge cells are collapsed to `±FAR`.
/// 2. The field is split into exterior and interior unsigned grids.
/// 3. Each pass in `passes` runs over both grids, in order.
/// 4. `exterior - interior` is written back into `grid`.
///
/// An empty `passes` slice still cleans the field. Returns the number of
/// edge cells found while cleaning.
pub fn propagate(grid: &mut Grid, passes: &[Box<dyn UnsignedPass>]) -> usize {
    let edges = clear_non_edge_cells(grid);
    let mut dual = DualGrid::split(grid);
    for pass in passes {
        dual.apply(pass.as_ref());
    }
    *grid = dual.recombine();
    debug!(
        width = grid.width(),
        height = grid.height(),
        edges,
        passes = passes.len(),
        "propagation done"
    );
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChamferSweep, EikonalRefiner};
    use umbra_core::{Vec2, FAR};
    use umbra_raster::{load_coverage, rasterize, CoverageMode, Shape};

    fn sweep_only() -> Vec<Box<dyn UnsignedPass>> {
        vec![Box::new(ChamferSweep)]
    }

    fn circle_field(centre: Vec2, radius: f32) -> (Grid, Shape) {
        let shape = Shape::circle(centre, radius);
        let mut g = Grid::new(32, 32).unwrap();
        rasterize(&mut g, &shape);
        (g, shape)
    }

    // ── Accuracy ────────────────────────────────────────────────

    #[test]
    fn swept_circle_is_close_to_exact() {
        let (mut g, shape) = circle_field(Vec2::new(16.0, 16.0), 6.0);
        let edges = propagate(&mut g, &sweep_only());
        assert!(edges > 0);

        for (x, y, v) in g.iter() {
            let exact = shape.signed_distance(Vec2::cell_centre(x, y));
            assert_eq!(v < 0.0, exact < 0.0, "sign flipped at ({x}, {y})");
            let (got, want) = (v.abs(), exact.abs());
            assert!(got >= want - 1e-3, "({x}, {y}): {got} < {want}");
            assert!(got <= 1.09 * want + 3.5, "({x}, {y}): {got} vs {want}");
        }
    }

    #[test]
    fn refinement_does_not_lose_accuracy() {
        let (mut swept, shape) = circle_field(Vec2::new(12.0, 14.0), 5.0);
        let mut refined = swept.clone();
        propagate(&mut swept, &sweep_only());
        let refine: Vec<Box<dyn UnsignedPass>> =
            vec![Box::new(ChamferSweep), Box::new(EikonalRefiner::default())];
        propagate(&mut refined, &refine);

        for ((x, y, s), &r) in swept.iter().zip(refined.values()) {
            let exact = shape.signed_distance(Vec2::cell_centre(x, y)).abs();
            assert!(r.abs() <= s.abs() + 1e-4);
            assert!(r.abs() >= exact - 0.5, "({x}, {y}): {r} vs {exact}");
        }
    }

    #[test]
    fn edge_cells_keep_their_values() {
        let (mut g, _) = circle_field(Vec2::new(16.0, 16.0), 6.0);
        let before = g.clone();
        let mask = crate::edge_mask(&before);
        propagate(&mut g, &sweep_only());
        for (i, &edge) in mask.iter().enumerate() {
            if edge {
                assert!((g.values()[i] - before.values()[i]).abs() < 1e-4);
            }
        }
    }

    // ── Degenerate fields ───────────────────────────────────────

    #[test]
    fn uniform_interior_has_no_edges() {
        let cov = vec![1.0; 16];
        let mut g = load_coverage(4, 4, &cov, CoverageMode::Antialiased).unwrap();
        let edges = propagate(&mut g, &sweep_only());
        assert_eq!(edges, 0);
        assert!(g.values().iter().all(|&v| v == -FAR));
    }

    #[test]
    fn no_passes_only_cleans() {
        let (mut g, _) = circle_field(Vec2::new(16.0, 16.0), 6.0);
        propagate(&mut g, &[]);
        assert!(g.values().iter().any(|&v| v == FAR));
        assert!(g.values().iter().any(|&v| v == -FAR));
    }
}
