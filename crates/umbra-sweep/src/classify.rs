//! Boundary classification and field cleaning.
//!
//! A cell is *exterior* when its stored distance is `>= 0` or when it lies
//! off the grid. A cell is an *edge* cell when any of its 8 neighbours
//! disagrees with it about being exterior. Only edge cells carry distances
//! the propagation passes can trust; [`clear_non_edge_cells`] collapses
//! everything else to the `±FAR` sentinel.

use tracing::debug;
use umbra_core::{Cell, Grid, OFFSETS_8};

/// Whether `(x, y)` is outside every shape. Off-grid cells are exterior.
#[inline]
pub fn is_exterior(grid: &Grid, x: i64, y: i64) -> bool {
    grid.try_get(x, y).is_none_or(|v| v >= 0.0)
}

/// Whether `(x, y)` has a neighbour on the opposite side of the boundary.
pub fn is_edge(grid: &Grid, x: i64, y: i64) -> bool {
    let ext = is_exterior(grid, x, y);
    OFFSETS_8
        .iter()
        .any(|o| is_exterior(grid, x + o.dx as i64, y + o.dy as i64) != ext)
}

/// Row-major edge flags for every cell.
pub fn edge_mask(grid: &Grid) -> Vec<bool> {
    grid.iter()
        .map(|(x, y, _)| is_edge(grid, x as i64, y as i64))
        .collect()
}

/// Overwrite every non-edge cell with `+FAR` (exterior) or `-FAR`
/// (interior). Edge cells are left as they are.
///
/// Returns the number of edge cells.
pub fn clear_non_edge_cells(grid: &mut Grid) -> usize {
    let mask = edge_mask(grid);
    let mut edges = 0;
    for (v, &edge) in grid.values_mut().iter_mut().zip(&mask) {
        if edge {
            edges += 1;
        } else {
            *v = Cell::far(*v < 0.0);
        }
    }
    debug!(
        width = grid.width(),
        height = grid.height(),
        edges,
        "cleared non-edge cells"
    );
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use umbra_core::{Vec2, FAR, UNSET};
    use umbra_raster::{rasterize, Shape};

    fn disc_grid() -> Grid {
        let mut g = Grid::new(16, 16).unwrap();
        rasterize(&mut g, &Shape::circle(Vec2::new(8.0, 8.0), 4.0));
        g
    }

    // ── Classification ──────────────────────────────────────────

    #[test]
    fn off_grid_is_exterior() {
        let g = Grid::filled(3, 3, -1.0).unwrap();
        assert!(is_exterior(&g, -1, 0));
        assert!(is_exterior(&g, 0, 3));
        assert!(!is_exterior(&g, 1, 1));
    }

    #[test]
    fn zero_is_exterior() {
        let g = Grid::filled(1, 1, 0.0).unwrap();
        assert!(is_exterior(&g, 0, 0));
    }

    #[test]
    fn interior_border_cells_are_edges() {
        // Fully interior grid: the border touches off-grid exterior.
        let g = Grid::filled(4, 4, -1.0).unwrap();
        assert!(is_edge(&g, 0, 0));
        assert!(is_edge(&g, 3, 1));
        assert!(!is_edge(&g, 1, 1));
        assert!(!is_edge(&g, 2, 2));
    }

    #[test]
    fn uniform_exterior_has_no_edges() {
        let g = Grid::new(5, 5).unwrap();
        assert!(edge_mask(&g).iter().all(|&e| !e));
    }

    #[test]
    fn diagonal_neighbour_counts() {
        let mut g = Grid::filled(3, 3, 1.0).unwrap();
        g.set(2, 2, -1.0).unwrap();
        assert!(is_edge(&g, 1, 1));
        assert!(!is_edge(&g, 0, 0));
    }

    // ── Cleaning ────────────────────────────────────────────────

    #[test]
    fn clear_keeps_edges_and_collapses_the_rest() {
        let mut g = disc_grid();
        let before = g.clone();
        let mask = edge_mask(&g);
        let edges = clear_non_edge_cells(&mut g);

        assert_eq!(edges, mask.iter().filter(|&&e| e).count());
        assert!(edges > 0);
        for ((&v, &old), &edge) in g.values().iter().zip(before.values()).zip(&mask) {
            if edge {
                assert_eq!(v, old);
            } else {
                assert_eq!(v.abs(), FAR);
                assert_eq!(v < 0.0, old < 0.0);
            }
        }
        assert_eq!(g.get(8, 8).unwrap(), -FAR);
        assert_eq!(g.get(0, 0).unwrap(), FAR);
    }

    #[test]
    fn clear_maps_unset_to_far_exterior() {
        let mut g = Grid::new(4, 4).unwrap();
        assert_eq!(clear_non_edge_cells(&mut g), 0);
        assert!(g.values().iter().all(|&v| v == FAR && v < UNSET));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut g = disc_grid();
        clear_non_edge_cells(&mut g);
        let once = g.clone();
        clear_non_edge_cells(&mut g);
        assert_eq!(g, once);
    }

    proptest! {
        #[test]
        fn edge_pairs_are_symmetric(
            cx in 0.0f32..16.0, cy in 0.0f32..16.0, radius in 0.5f32..8.0,
        ) {
            let mut g = Grid::new(16, 16).unwrap();
            rasterize(&mut g, &Shape::circle(Vec2::new(cx, cy), radius));
            for (x, y, _) in g.iter() {
                for (nx, ny) in g.neighbours(x, y) {
                    let a = is_exterior(&g, x as i64, y as i64);
                    let b = is_exterior(&g, nx as i64, ny as i64);
                    if a != b {
                        prop_assert!(is_edge(&g, x as i64, y as i64));
                        prop_assert!(is_edge(&g, nx as i64, ny as i64));
                    }
                }
            }
        }

        #[test]
        fn cleaned_magnitudes_are_far(
            values in proptest::collection::vec(-20.0f32..20.0, 64),
        ) {
            let mut g = Grid::from_values(8, 8, values.clone()).unwrap();
            let mask = edge_mask(&g);
            clear_non_edge_cells(&mut g);
            for (i, &v) in g.values().iter().enumerate() {
                if !mask[i] {
                    prop_assert_eq!(v.abs(), FAR);
                    prop_assert_eq!(v < 0.0, values[i] < 0.0);
                }
            }
        }
    }
}
