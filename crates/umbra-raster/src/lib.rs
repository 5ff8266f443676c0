//! Shape rasterizers and coverage ingestion.
//!
//! Two ways to seed a [`Grid`](umbra_core::Grid) with initial signed
//! distances:
//!
//! - [`rasterize`] / [`rasterize_bounded`] fold the analytic distance of a
//!   [`Shape`] into the grid by pointwise minimum. Applying several shapes
//!   in any order gives the same result; for overlapping interiors the most
//!   negative value wins, which is only a true union distance when the
//!   interiors do not overlap.
//! - [`load_coverage`] maps an externally rasterized coverage image
//!   (`1` = inside, `0` = outside) to distances, either through the
//!   antialiasing band or a hard threshold.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coverage;
pub mod raster;
pub mod shape;

pub use coverage::{coverage_to_distance, load_coverage, CoverageMode, AA_HALF_WIDTH};
pub use raster::{clamp_coord, padded_range, rasterize, rasterize_bounded, CellRange};
pub use shape::Shape;
