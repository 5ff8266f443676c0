//! Benchmark profiles for the Umbra distance-field engine.
//!
//! Provides pre-built [`GeneratorConfig`] profiles:
//!
//! - [`reference_profile`]: 256x256 grid (65K cells), two bounded circles,
//!   chamfer sweep only
//! - [`refined_profile`]: the reference scene with Eikonal refinement
//! - [`stress_profile`]: 1024x1024 grid (~1M cells) with refinement and a
//!   downsample
//! - [`coverage_profile`]: 256x256 antialiased coverage of a ring of discs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use umbra_core::Vec2;
use umbra_engine::{GeneratorConfig, PostProcess, Propagation, ShapeSpec};
use umbra_raster::{CoverageMode, Shape};

/// Padding for bounded shapes in every profile.
pub const PROFILE_PADDING: f32 = 5.0;

/// Two overlapping bounded circles scaled to a `side × side` grid.
fn two_circles(side: u32) -> Vec<ShapeSpec> {
    let s = side as f32 / 128.0;
    vec![
        ShapeSpec::bounded(
            Shape::circle(Vec2::new(40.0 * s, 56.0 * s), 24.0 * s),
            PROFILE_PADDING,
        ),
        ShapeSpec::bounded(
            Shape::circle(Vec2::new(80.0 * s, 64.0 * s), 28.0 * s),
            PROFILE_PADDING,
        ),
    ]
}

/// 256x256 grid, two bounded circles, one chamfer sweep.
pub fn reference_profile() -> GeneratorConfig {
    GeneratorConfig::shapes(256, 256, two_circles(256))
}

/// [`reference_profile`] with 8 Eikonal iterations.
pub fn refined_profile() -> GeneratorConfig {
    reference_profile().with_propagation(Propagation::SweepAndEikonal { iterations: 8 })
}

/// 1024x1024 grid with refinement, softening and a 2x downsample.
pub fn stress_profile() -> GeneratorConfig {
    GeneratorConfig::shapes(1024, 1024, two_circles(1024))
        .with_propagation(Propagation::SweepAndEikonal { iterations: 8 })
        .then(PostProcess::Soften)
        .then(PostProcess::Downsample { factor: 2 })
}

/// 256x256 antialiased coverage of eight discs on a ring.
///
/// Coverage is the clamped analytic distance mapped back through the
/// antialiasing band, so the profile does not depend on an image source.
pub fn coverage_profile() -> GeneratorConfig {
    let side = 256u32;
    let discs: Vec<Shape> = (0..8)
        .map(|i| {
            let a = i as f32 * std::f32::consts::TAU / 8.0;
            Shape::circle(
                Vec2::new(128.0 + 80.0 * a.cos(), 128.0 + 80.0 * a.sin()),
                20.0,
            )
        })
        .collect();

    let mut values = Vec::with_capacity((side * side) as usize);
    for y in 0..side {
        for x in 0..side {
            let p = Vec2::cell_centre(x, y);
            let d = discs
                .iter()
                .map(|s| s.signed_distance(p))
                .fold(f32::INFINITY, f32::min);
            values.push((0.5 - d / 1.5).clamp(0.0, 1.0));
        }
    }
    GeneratorConfig::coverage(side, side, values, CoverageMode::Antialiased)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for config in [
            reference_profile(),
            refined_profile(),
            stress_profile(),
            coverage_profile(),
        ] {
            assert!(config.validate().is_ok(), "{config:?}");
        }
    }

    #[test]
    fn coverage_is_in_range() {
        let config = coverage_profile();
        if let umbra_engine::Source::Coverage { values, .. } = &config.source {
            assert!(values.iter().all(|c| (0.0..=1.0).contains(c)));
            assert!(values.iter().any(|&c| c == 1.0));
        } else {
            panic!("expected coverage source");
        }
    }
}
