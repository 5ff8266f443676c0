//! Core types for the Umbra distance-field engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! owned cell buffer every other crate operates on, the sentinel values
//! that mark "no information yet" and "far from any boundary", the
//! 8-connected neighbourhood, a small 2D vector type, and the error type
//! for grid access.
//!
//! # Coordinate convention
//!
//! Cells are addressed as `(x, y)` with `0 <= x < width`, `0 <= y < height`,
//! stored row-major. Cell `(x, y)` covers the unit square
//! `[x, x + 1) × [y, y + 1)`; its centre sits at `(x + 0.5, y + 0.5)`.
//! Distances are measured in cell units.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod neighbourhood;
pub mod vec2;

pub use cell::{Cell, FAR, UNSET};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use neighbourhood::{Offset, OFFSETS_8};
pub use vec2::Vec2;
