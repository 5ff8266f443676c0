//! Generation sessions for Umbra signed distance fields.
//!
//! Two ways in:
//!
//! - Drive a [`Generator`] step by step: seed it with shapes or coverage,
//!   propagate, post-process, then [`finish`](Generator::finish) it.
//! - Describe the whole run as a [`GeneratorConfig`] and call
//!   [`generate`].
//!
//! ```
//! use umbra_core::Vec2;
//! use umbra_engine::{generate, GeneratorConfig, Propagation, ShapeSpec};
//! use umbra_raster::Shape;
//!
//! let config = GeneratorConfig::shapes(
//!     32,
//!     32,
//!     [ShapeSpec::new(Shape::circle(Vec2::new(16.0, 16.0), 6.0))],
//! )
//! .with_propagation(Propagation::SweepAndEikonal { iterations: 4 });
//!
//! let field = generate(&config).unwrap();
//! assert!(field.get(16, 16).unwrap() < 0.0);
//! assert!(field.get(0, 0).unwrap() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod field;
pub mod generator;

pub use config::{
    ConfigError, ConfigResult, GeneratorConfig, PostChain, PostProcess, Propagation, ShapeSpec,
    Source,
};
pub use error::{GenerateError, GenerateResult};
pub use field::{DistanceField, Texel};
pub use generator::{generate, Generator};
