//! Umbra: 2D signed distance field generation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Umbra sub-crates. For most users, adding `umbra` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use umbra::prelude::*;
//!
//! // Two near-touching rectangles on a 64×64 grid.
//! let mut generator = Generator::new(64, 64).unwrap();
//! generator.rasterize(&Shape::rect(Vec2::new(4.0, 4.0), Vec2::new(60.0, 35.0)));
//! generator.rasterize(&Shape::rect(Vec2::new(4.0, 34.0), Vec2::new(60.0, 60.0)));
//!
//! // Clean, split, sweep, recombine.
//! let edges = generator.sweep();
//! assert!(edges > 0);
//!
//! let field = generator.finish();
//! assert!(field.get(32, 34).unwrap() < -20.0);
//! assert!(field.get(0, 0).unwrap() > 0.0);
//! assert!(field.is_valid(63, 63).unwrap());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `umbra-core` | `Grid`, cell sentinels, neighbourhood offsets, `Vec2`, `GridError` |
//! | [`raster`] | `umbra-raster` | Shape rasterizers and coverage ingestion |
//! | [`sweep`] | `umbra-sweep` | Edge cleaning, chamfer sweep, Eikonal refinement, resampling |
//! | [`engine`] | `umbra-engine` | Generation sessions, run configuration, finished fields |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage, cell states and geometry (`umbra-core`).
pub use umbra_core as types;

/// Shape rasterizers and coverage ingestion (`umbra-raster`).
///
/// [`raster::rasterize`] and [`raster::rasterize_bounded`] seed a grid from
/// a [`raster::Shape`]; [`raster::load_coverage`] seeds one from an
/// external coverage image.
pub use umbra_raster as raster;

/// Distance propagation and post-processing (`umbra-sweep`).
///
/// The [`sweep::UnsignedPass`] trait is the extension point for custom
/// propagation passes.
pub use umbra_sweep as sweep;

/// Generation sessions and configuration (`umbra-engine`).
///
/// [`engine::Generator`] for step-by-step sessions, [`engine::generate`]
/// for configuration-driven runs.
pub use umbra_engine as engine;

/// Common imports for typical Umbra usage.
///
/// ```rust
/// use umbra::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use umbra_core::{Cell, Grid, GridError, Vec2, FAR, UNSET};

    // Rasterization
    pub use umbra_raster::{CoverageMode, Shape};

    // Propagation
    pub use umbra_sweep::{ChamferSweep, EikonalRefiner, UnsignedPass};

    // Engine
    pub use umbra_engine::{
        generate, DistanceField, GenerateError, Generator, GeneratorConfig, PostProcess,
        Propagation, ShapeSpec, Source, Texel,
    };
}
