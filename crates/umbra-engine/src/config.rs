//! Run configuration, validation, and error types.
//!
//! [`GeneratorConfig`] describes one generation run end to end.
//! [`validate()`](GeneratorConfig::validate) checks structural invariants
//! up front so [`generate`](crate::generate) never fails halfway through.

use smallvec::SmallVec;
use thiserror::Error;
use umbra_core::Grid;
use umbra_raster::{CoverageMode, Shape};
use umbra_sweep::{ChamferSweep, EikonalRefiner, UnsignedPass};

/// Result type alias for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GeneratorConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero.
    #[error("grid must have at least one cell, got {width}x{height}")]
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Width or height exceeds [`Grid::MAX_DIM`].
    #[error("{name} = {value} exceeds maximum of {max}")]
    DimensionTooLarge {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The offending value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A shape parameter is NaN or infinite.
    #[error("shape {index} ({kind}) has non-finite parameters")]
    NonFiniteShape {
        /// Position in the shape list.
        index: usize,
        /// Shape kind.
        kind: &'static str,
    },
    /// A circle has a negative radius.
    #[error("shape {index} has negative radius {radius}")]
    NegativeRadius {
        /// Position in the shape list.
        index: usize,
        /// The offending radius.
        radius: f32,
    },
    /// A bounded shape has a negative or non-finite padding.
    #[error("shape {index} has invalid padding {padding}")]
    InvalidPadding {
        /// Position in the shape list.
        index: usize,
        /// The offending padding.
        padding: f32,
    },
    /// Coverage buffer length does not match the grid.
    #[error("coverage holds {actual} values, expected {expected}")]
    CoverageLength {
        /// `width * height`.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },
    /// A propagation pass rejected its parameters.
    #[error("invalid propagation: {reason}")]
    InvalidPropagation {
        /// Description of the failure.
        reason: String,
    },
    /// A downsample step has factor zero.
    #[error("post-process step {step}: downsample factor must be at least 1")]
    ZeroFactor {
        /// Position in the post-processing chain.
        step: usize,
    },
    /// A downsample step does not divide the grid it receives.
    #[error("post-process step {step}: {width}x{height} grid is not divisible by {factor}")]
    NotDivisible {
        /// Position in the post-processing chain.
        step: usize,
        /// Width at that step.
        width: u32,
        /// Height at that step.
        height: u32,
        /// Requested factor.
        factor: u32,
    },
}

// ── Source ─────────────────────────────────────────────────────────

/// One shape to rasterize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSpec {
    /// The primitive.
    pub shape: Shape,
    /// `None` rasterizes every cell; `Some(p)` only the bounding box grown
    /// by `p`.
    pub padding: Option<f32>,
}

impl ShapeSpec {
    /// Brute-force rasterization of `shape`.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            padding: None,
        }
    }

    /// Bounded rasterization of `shape` with `padding`.
    pub fn bounded(shape: Shape, padding: f32) -> Self {
        Self {
            shape,
            padding: Some(padding),
        }
    }
}

impl From<Shape> for ShapeSpec {
    fn from(shape: Shape) -> Self {
        Self::new(shape)
    }
}

/// Where the initial distances come from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// Analytic shapes, composed by pointwise minimum.
    Shapes(Vec<ShapeSpec>),
    /// Externally rasterized coverage, row-major, one value per cell.
    Coverage {
        /// Coverage values in `[0, 1]`.
        values: Vec<f32>,
        /// Mapping from coverage to distance.
        mode: CoverageMode,
    },
}

impl Default for Source {
    fn default() -> Self {
        Source::Shapes(Vec::new())
    }
}

// ── Propagation ────────────────────────────────────────────────────

/// How edge distances are spread to the rest of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Export the raw seeded field without cleaning or propagation.
    None,
    /// Clean, then one chamfer sweep.
    #[default]
    Sweep,
    /// Clean, chamfer sweep, then Eikonal refinement (which ends with a
    /// second sweep).
    SweepAndEikonal {
        /// Relaxation iterations. Must be at least 1.
        iterations: u32,
    },
}

impl Propagation {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Propagation::None => "none",
            Propagation::Sweep => "sweep",
            Propagation::SweepAndEikonal { .. } => "sweep+eikonal",
        }
    }

    /// The ordered list of unsigned passes this strategy runs.
    ///
    /// Empty for [`Propagation::None`].
    pub fn passes(&self) -> ConfigResult<Vec<Box<dyn UnsignedPass>>> {
        match *self {
            Propagation::None => Ok(Vec::new()),
            Propagation::Sweep => {
                let passes: Vec<Box<dyn UnsignedPass>> = vec![Box::new(ChamferSweep)];
                Ok(passes)
            }
            Propagation::SweepAndEikonal { iterations } => {
                let refiner = EikonalRefiner::builder()
                    .iterations(iterations)
                    .build()
                    .map_err(|reason| ConfigError::InvalidPropagation { reason })?;
                let passes: Vec<Box<dyn UnsignedPass>> =
                    vec![Box::new(ChamferSweep), Box::new(refiner)];
                Ok(passes)
            }
        }
    }
}

// ── PostProcess ────────────────────────────────────────────────────

/// A step applied to the finished signed field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostProcess {
    /// Box-downsample by `factor`.
    Downsample {
        /// Integer reduction factor.
        factor: u32,
    },
    /// 3×3 weighted blur.
    Soften,
}

/// Post-processing chain, applied in order.
pub type PostChain = SmallVec<[PostProcess; 4]>;

// ── GeneratorConfig ────────────────────────────────────────────────

/// Complete configuration for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Grid width in cells. Default: 64.
    pub width: u32,
    /// Grid height in cells. Default: 64.
    pub height: u32,
    /// Initial distance source. Default: no shapes.
    pub source: Source,
    /// Propagation strategy. Default: [`Propagation::Sweep`].
    pub propagation: Propagation,
    /// Post-processing chain. Default: empty.
    pub post: PostChain,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            source: Source::default(),
            propagation: Propagation::default(),
            post: PostChain::new(),
        }
    }
}

impl GeneratorConfig {
    /// A `width × height` run over `shapes` with default propagation.
    pub fn shapes(width: u32, height: u32, shapes: impl IntoIterator<Item = ShapeSpec>) -> Self {
        Self {
            width,
            height,
            source: Source::Shapes(shapes.into_iter().collect()),
            ..Self::default()
        }
    }

    /// A `width × height` run over coverage values.
    pub fn coverage(width: u32, height: u32, values: Vec<f32>, mode: CoverageMode) -> Self {
        Self {
            width,
            height,
            source: Source::Coverage { values, mode },
            ..Self::default()
        }
    }

    /// Replace the propagation strategy.
    pub fn with_propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    /// Append a post-processing step.
    pub fn then(mut self, step: PostProcess) -> Self {
        self.post.push(step);
        self
    }

    /// Number of shapes in the source, `0` for coverage.
    pub fn shape_count(&self) -> usize {
        match &self.source {
            Source::Shapes(shapes) => shapes.len(),
            Source::Coverage { .. } => 0,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        // 1. Dimensions.
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Grid::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                });
            }
        }

        // 2. Source.
        match &self.source {
            Source::Shapes(shapes) => {
                for (index, spec) in shapes.iter().enumerate() {
                    validate_shape(index, spec)?;
                }
            }
            Source::Coverage { values, .. } => {
                let expected = self.width as usize * self.height as usize;
                if values.len() != expected {
                    return Err(ConfigError::CoverageLength {
                        expected,
                        actual: values.len(),
                    });
                }
            }
        }

        // 3. Propagation parameters.
        self.propagation.passes()?;

        // 4. Each downsample must divide the grid produced by the steps
        //    before it.
        let (mut w, mut h) = (self.width, self.height);
        for (step, post) in self.post.iter().enumerate() {
            if let PostProcess::Downsample { factor } = *post {
                if factor == 0 {
                    return Err(ConfigError::ZeroFactor { step });
                }
                if w % factor != 0 || h % factor != 0 {
                    return Err(ConfigError::NotDivisible {
                        step,
                        width: w,
                        height: h,
                        factor,
                    });
                }
                w /= factor;
                h /= factor;
            }
        }

        Ok(())
    }

    /// Output dimensions after the post-processing chain.
    ///
    /// Only meaningful for a configuration that passed
    /// [`validate()`](Self::validate).
    pub fn output_size(&self) -> (u32, u32) {
        self.post
            .iter()
            .fold((self.width, self.height), |(w, h), post| match *post {
                PostProcess::Downsample { factor } if factor > 0 => (w / factor, h / factor),
                _ => (w, h),
            })
    }
}

fn validate_shape(index: usize, spec: &ShapeSpec) -> ConfigResult<()> {
    if !spec.shape.is_finite() {
        return Err(ConfigError::NonFiniteShape {
            index,
            kind: spec.shape.kind(),
        });
    }
    if let Shape::Circle { radius, .. } = spec.shape {
        if radius < 0.0 {
            return Err(ConfigError::NegativeRadius { index, radius });
        }
    }
    if let Some(padding) = spec.padding {
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::InvalidPadding { index, padding });
        }
    }
    Ok(())
}
