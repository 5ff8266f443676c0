//! End-to-end generation scenarios.

use approx::assert_relative_eq;
use umbra_core::{Cell, Vec2, FAR, UNSET};
use umbra_engine::{generate, Generator, GeneratorConfig, Propagation, ShapeSpec};
use umbra_raster::{CoverageMode, Shape};
use umbra_test_utils::fixtures;
use umbra_test_utils::{
    column_sign_changes, exact_field, mean_abs_error, row_sign_changes, shape_coverage,
};

fn session(scene: &fixtures::Scene) -> Generator {
    let mut g = Generator::new(scene.width, scene.height).unwrap();
    for placed in &scene.shapes {
        match placed.padding {
            None => g.rasterize(&placed.shape),
            Some(p) => g.rasterize_bounded(&placed.shape, p),
        };
    }
    g
}

// ── Scenario A: raw rasterized circle ──────────────────────────────

#[test]
fn raw_circle_uses_cell_centres() {
    let field = session(&fixtures::circle()).finish();

    // Cell (8, 8) is centred at (8.5, 8.5), half a diagonal off the
    // circle centre.
    assert_relative_eq!(
        field.get(8, 8).unwrap(),
        0.5f32.sqrt() - 4.0,
        epsilon = 1e-5
    );
    // Cell (12, 8) is centred at (12.5, 8.5), just outside the rim.
    let rim = (4.5f32 * 4.5 + 0.5 * 0.5).sqrt() - 4.0;
    assert_relative_eq!(field.get(12, 8).unwrap(), rim, epsilon = 1e-5);
    assert!(rim > 0.0 && rim < 0.6);

    // Brute force touches every cell.
    assert!(field.values().iter().all(|&v| Cell::is_written(v)));
}

#[test]
fn raw_circle_through_config_matches_session() {
    let config = GeneratorConfig::shapes(
        16,
        16,
        [ShapeSpec::new(Shape::circle(Vec2::new(8.0, 8.0), 4.0))],
    )
    .with_propagation(Propagation::None);
    let from_config = generate(&config).unwrap();
    let from_session = session(&fixtures::circle()).finish();
    assert_eq!(from_config, from_session);
}

// ── Scenario B: near-touching rectangles ───────────────────────────

#[test]
fn close_rectangles_have_no_seam() {
    let mut g = session(&fixtures::close_rects());
    g.sweep();
    let field = g.finish();
    let grid = field.grid();

    // The union spans x in [4, 60) and y in [4, 60): every row and column
    // through it crosses the boundary exactly twice.
    for y in 4..60 {
        assert_eq!(row_sign_changes(grid, y), 2, "row {y}");
    }
    for x in 4..60 {
        assert_eq!(column_sign_changes(grid, x), 2, "column {x}");
    }
    for y in [0, 1, 2, 3, 60, 61, 62, 63] {
        assert_eq!(row_sign_changes(grid, y), 0, "row {y}");
    }

    // A seam cell sits deep inside the union, 25.5 cells from the bottom
    // edge, instead of keeping its raw -0.5.
    let seam = field.get(32, 34).unwrap();
    assert!((-26.0..=-25.0).contains(&seam), "seam value {seam}");
}

// ── Scenario C: uniform coverage ───────────────────────────────────

#[test]
fn full_coverage_collapses_to_far_inside() {
    let coverage = vec![1.0; 16 * 16];
    let mut g = Generator::from_coverage(16, 16, &coverage, CoverageMode::Antialiased).unwrap();
    assert!(g.grid().values().iter().all(|&v| v == -0.75));

    assert_eq!(g.sweep(), 0);
    let field = g.finish();
    assert!(field.values().iter().all(|&v| v == -FAR));
}

#[test]
fn hard_coverage_loads_sentinels() {
    let coverage = [0.0, 0.4, 0.6, 1.0];
    let g = Generator::from_coverage(2, 2, &coverage, CoverageMode::Hard).unwrap();
    assert_eq!(g.grid().values(), &[FAR, FAR, -FAR, -FAR]);
}

#[test]
fn hard_coverage_propagates_from_the_threshold() {
    let rect = Shape::rect(Vec2::new(6.0, 6.0), Vec2::new(18.0, 14.0));
    let coverage = shape_coverage(24, 20, &[rect], 4);
    let mut g = Generator::from_coverage(24, 20, &coverage, CoverageMode::Hard).unwrap();
    assert!(g.sweep() > 0);
    let field = g.finish();

    for (&got, &c) in field.values().iter().zip(&coverage) {
        assert!(got.abs() < FAR, "{got}");
        assert_eq!(got < 0.0, c > 0.5, "{got} at coverage {c}");
    }

    // Edge cells sit one step from the zeroed cells across the boundary.
    assert_relative_eq!(field.get(5, 10).unwrap(), 1.0);
    assert_relative_eq!(field.get(6, 10).unwrap(), -1.0);
    // Nearest exterior row is y = 14.
    assert_relative_eq!(field.get(12, 10).unwrap(), -4.0);
    // Diagonal chamfer path to the rect corner (6, 6).
    assert_relative_eq!(
        field.get(0, 0).unwrap(),
        6.0 * std::f32::consts::SQRT_2,
        epsilon = 1e-4
    );
}

// ── Bounded rasterization ──────────────────────────────────────────

#[test]
fn bounded_scene_leaves_far_cells_unset_until_swept() {
    let scene = fixtures::padded_circle();
    let raw = session(&scene).finish();
    assert_eq!(raw.get(0, 0).unwrap(), UNSET);
    assert!(!raw.is_valid(0, 0).unwrap());
    assert!(raw.is_valid(16, 16).unwrap());

    let mut g = session(&scene);
    g.sweep();
    let swept = g.finish();
    assert!(swept.is_valid(0, 0).unwrap());
    assert!(swept.get(0, 0).unwrap() > 0.0);
    assert!(swept.values().iter().all(|v| v.abs() < FAR));
}

// ── Every fixture ──────────────────────────────────────────────────

#[test]
fn every_scene_with_an_interior_fills_in() {
    for scene in fixtures::all() {
        let has_interior = scene.seed().values().iter().any(|&v| v < 0.0);
        let mut g = session(&scene);
        let edges = g.sweep();
        let field = g.finish();

        if has_interior {
            assert!(edges > 0, "{}", scene.name);
            assert!(
                field.values().iter().all(|v| v.abs() < FAR),
                "{} left far cells",
                scene.name
            );
        } else {
            // Segments have no inside, so nothing is an edge.
            assert_eq!(edges, 0, "{}", scene.name);
            assert!(field.values().iter().all(|&v| v == FAR), "{}", scene.name);
        }
    }
}

// ── Accuracy ───────────────────────────────────────────────────────

#[test]
fn eikonal_refinement_reduces_mean_error() {
    let circle = Shape::circle(Vec2::new(32.0, 32.0), 20.0);
    let exact = exact_field(64, 64, &[circle]);

    let mut swept = Generator::new(64, 64).unwrap();
    swept.rasterize(&circle);
    let mut refined = swept.clone();

    swept.sweep();
    refined
        .propagate(&Propagation::SweepAndEikonal { iterations: 8 })
        .unwrap();

    let swept_err = mean_abs_error(swept.grid().values(), &exact);
    let refined_err = mean_abs_error(refined.grid().values(), &exact);
    assert!(
        refined_err < swept_err,
        "refined {refined_err} >= swept {swept_err}"
    );
}

#[test]
fn coverage_circle_tracks_exact_distance() {
    let circle = Shape::circle(Vec2::new(16.0, 16.0), 8.0);
    let coverage = shape_coverage(32, 32, &[circle], 4);
    let exact = exact_field(32, 32, &[circle]);

    let mut g = Generator::from_coverage(32, 32, &coverage, CoverageMode::Antialiased).unwrap();
    g.sweep();
    let field = g.finish();

    for (&got, &want) in field.values().iter().zip(&exact) {
        assert!((got - want).abs() < 2.5, "{got} vs {want}");
        if want.abs() > 1.0 {
            assert_eq!(got < 0.0, want < 0.0, "{got} vs {want}");
        }
    }
}

// ── Export ─────────────────────────────────────────────────────────

#[test]
fn texels_point_at_the_circle() {
    let mut g = session(&fixtures::circle());
    g.sweep();
    let field = g.finish();
    let texels = field.texels();
    let w = field.width() as usize;

    // Right of the circle, on the centre row: points back towards -x.
    let outside = texels[8 * w + 14];
    assert!(outside.direction.x < -0.9, "{:?}", outside.direction);
    // Inside, right of centre: points outwards towards +x.
    let inside = texels[8 * w + 10];
    assert!(inside.direction.x > 0.9, "{:?}", inside.direction);

    let rgba = field.to_rgba();
    assert_eq!(rgba.len(), texels.len());
    assert!(rgba.iter().all(|t| t[3] == 1.0));
}
