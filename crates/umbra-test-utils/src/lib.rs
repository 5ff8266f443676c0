//! Test utilities for Umbra development.
//!
//! Provides the demo [`fixtures`], exact reference fields to measure
//! propagation error against, a supersampled coverage rasterizer standing
//! in for an external image source, and sign-change counters for seam
//! checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use umbra_core::{Grid, Vec2};
use umbra_raster::Shape;

/// Pointwise minimum of the analytic distances of `shapes` at every cell
/// centre, with no bounding and no propagation.
pub fn exact_field(width: u32, height: u32, shapes: &[Shape]) -> Vec<f32> {
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let p = Vec2::cell_centre(x, y);
            let d = shapes
                .iter()
                .map(|s| s.signed_distance(p))
                .fold(f32::INFINITY, f32::min);
            out.push(d);
        }
    }
    out
}

/// Largest absolute difference between two equally sized buffers.
pub fn max_abs_error(actual: &[f32], expected: &[f32]) -> f32 {
    assert_eq!(actual.len(), expected.len(), "buffer length mismatch");
    actual
        .iter()
        .zip(expected)
        .map(|(a, e)| (a - e).abs())
        .fold(0.0, f32::max)
}

/// Mean absolute difference between two equally sized buffers.
pub fn mean_abs_error(actual: &[f32], expected: &[f32]) -> f32 {
    assert_eq!(actual.len(), expected.len(), "buffer length mismatch");
    let sum: f32 = actual.iter().zip(expected).map(|(a, e)| (a - e).abs()).sum();
    sum / actual.len() as f32
}

/// Number of sign changes walking row `y` left to right.
pub fn row_sign_changes(grid: &Grid, y: u32) -> usize {
    count_changes((0..grid.width()).map(|x| grid.get(x, y).expect("row in bounds")))
}

/// Number of sign changes walking column `x` top to bottom.
pub fn column_sign_changes(grid: &Grid, x: u32) -> usize {
    count_changes((0..grid.height()).map(|y| grid.get(x, y).expect("column in bounds")))
}

fn count_changes(values: impl Iterator<Item = f32>) -> usize {
    let mut changes = 0;
    let mut prev: Option<bool> = None;
    for v in values {
        let inside = v < 0.0;
        if prev.is_some_and(|p| p != inside) {
            changes += 1;
        }
        prev = Some(inside);
    }
    changes
}

/// Coverage image of `shapes`, `samples × samples` supersampled per cell.
///
/// Stands in for an external rasterizer: each value is the fraction of
/// sub-samples with a negative signed distance.
pub fn shape_coverage(width: u32, height: u32, shapes: &[Shape], samples: u32) -> Vec<f32> {
    let samples = samples.max(1);
    let step = 1.0 / samples as f32;
    let total = (samples * samples) as f32;
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let mut inside = 0u32;
            for sy in 0..samples {
                for sx in 0..samples {
                    let p = Vec2::new(
                        x as f32 + (sx as f32 + 0.5) * step,
                        y as f32 + (sy as f32 + 0.5) * step,
                    );
                    if shapes.iter().any(|s| s.signed_distance(p) < 0.0) {
                        inside += 1;
                    }
                }
            }
            out.push(inside as f32 / total);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sign_changes() {
        let g = Grid::from_values(5, 1, vec![1.0, -1.0, -2.0, 0.0, -1.0]).unwrap();
        assert_eq!(row_sign_changes(&g, 0), 3);
        assert_eq!(column_sign_changes(&g, 2), 0);
    }

    #[test]
    fn coverage_of_full_rect_is_one() {
        let cov = shape_coverage(
            4,
            4,
            &[Shape::rect(Vec2::new(-1.0, -1.0), Vec2::new(5.0, 5.0))],
            4,
        );
        assert!(cov.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn every_fixture_seeds_its_grid() {
        for scene in fixtures::all() {
            let g = scene.seed();
            assert_eq!((g.width(), g.height()), (scene.width, scene.height));
            assert!(
                g.values().iter().any(|&v| v < 1.0),
                "{} has no cells near a boundary",
                scene.name
            );
        }
    }
}
