//! Distance propagation for Umbra signed distance fields.
//!
//! A rasterized field is only trustworthy at its boundary cells. This crate
//! turns it into a full field:
//!
//! - [`classify`] finds edge cells and collapses the rest to `±FAR`
//! - [`split`] separates the signed field into two unsigned grids
//! - [`chamfer`] and [`eikonal`] propagate distances through each grid
//! - [`pipeline::propagate`] chains the above and recombines the result
//! - [`resample`] downsamples and softens finished fields
//! - [`gradient`] derives per-cell surface directions
//!
//! Passes implement [`UnsignedPass`] and are composed as
//! `Vec<Box<dyn UnsignedPass>>`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chamfer;
pub mod classify;
pub mod eikonal;
pub mod gradient;
pub mod pass;
pub mod pipeline;
pub mod resample;
pub mod split;

pub use chamfer::ChamferSweep;
pub use classify::{clear_non_edge_cells, edge_mask, is_edge, is_exterior};
pub use eikonal::{EikonalRefiner, EikonalRefinerBuilder};
pub use gradient::surface_directions;
pub use pass::UnsignedPass;
pub use pipeline::propagate;
pub use resample::{downsample, soften};
pub use split::DualGrid;
