//! A generation session and the one-shot [`generate`] entry point.
//!
//! A [`Generator`] exclusively owns one grid from seeding to
//! [`finish`](Generator::finish). Every step mutates that grid in place
//! except downsampling, which swaps in a freshly allocated buffer.

use crate::config::{ConfigResult, GeneratorConfig, PostProcess, Propagation, Source};
use crate::error::GenerateResult;
use crate::field::DistanceField;
use tracing::{debug, info, warn};
use umbra_core::{Grid, GridResult};
use umbra_raster::{load_coverage, CoverageMode, Shape};
use umbra_sweep::{ChamferSweep, EikonalRefiner, UnsignedPass};

/// A single signed-distance generation session.
#[derive(Clone, Debug)]
pub struct Generator {
    grid: Grid,
}

impl Generator {
    /// A `width × height` session with every cell unset.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
        })
    }

    /// A session seeded from row-major coverage values.
    pub fn from_coverage(
        width: u32,
        height: u32,
        coverage: &[f32],
        mode: CoverageMode,
    ) -> GridResult<Self> {
        Ok(Self {
            grid: load_coverage(width, height, coverage, mode)?,
        })
    }

    /// The working grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fold `shape` into every cell. Returns the number of cells lowered.
    pub fn rasterize(&mut self, shape: &Shape) -> usize {
        umbra_raster::rasterize(&mut self.grid, shape)
    }

    /// Fold `shape` into the cells near its bounding box.
    pub fn rasterize_bounded(&mut self, shape: &Shape, padding: f32) -> usize {
        umbra_raster::rasterize_bounded(&mut self.grid, shape, padding)
    }

    /// Collapse non-edge cells to `±FAR`. Returns the edge cell count.
    pub fn clear_non_edge_cells(&mut self) -> usize {
        umbra_sweep::clear_non_edge_cells(&mut self.grid)
    }

    /// Clean and propagate with a single chamfer sweep.
    pub fn sweep(&mut self) -> usize {
        let passes: [Box<dyn UnsignedPass>; 1] = [Box::new(ChamferSweep)];
        self.run_passes(&passes)
    }

    /// Clean, chamfer sweep, then refine with `refiner`.
    pub fn sweep_and_refine(&mut self, refiner: EikonalRefiner) -> usize {
        let passes: [Box<dyn UnsignedPass>; 2] = [Box::new(ChamferSweep), Box::new(refiner)];
        self.run_passes(&passes)
    }

    /// Apply a configured propagation strategy.
    ///
    /// [`Propagation::None`] leaves the grid untouched and returns 0.
    pub fn propagate(&mut self, propagation: &Propagation) -> ConfigResult<usize> {
        if *propagation == Propagation::None {
            return Ok(0);
        }
        let passes = propagation.passes()?;
        Ok(self.run_passes(&passes))
    }

    fn run_passes(&mut self, passes: &[Box<dyn UnsignedPass>]) -> usize {
        umbra_sweep::propagate(&mut self.grid, passes)
    }

    /// Replace the grid with its `factor`-downsampled version.
    ///
    /// On error the grid is left unchanged.
    pub fn downsample(&mut self, factor: u32) -> GridResult<()> {
        self.grid = umbra_sweep::downsample(&self.grid, factor)?;
        Ok(())
    }

    /// Replace the grid with its softened version.
    pub fn soften(&mut self) {
        self.grid = umbra_sweep::soften(&self.grid);
    }

    /// Apply one post-processing step.
    pub fn post_process(&mut self, step: PostProcess) -> GridResult<()> {
        match step {
            PostProcess::Downsample { factor } => self.downsample(factor),
            PostProcess::Soften => {
                self.soften();
                Ok(())
            }
        }
    }

    /// End the session and hand out the field.
    pub fn finish(self) -> DistanceField {
        DistanceField::new(self.grid)
    }
}

/// Run a complete generation described by `config`.
///
/// The configuration is validated before any grid is allocated.
pub fn generate(config: &GeneratorConfig) -> GenerateResult<DistanceField> {
    config.validate()?;

    let mut generator = match &config.source {
        Source::Shapes(shapes) => {
            if shapes.is_empty() {
                warn!(
                    width = config.width,
                    height = config.height,
                    "no shapes configured"
                );
            }
            let mut generator = Generator::new(config.width, config.height)?;
            for spec in shapes {
                match spec.padding {
                    None => generator.rasterize(&spec.shape),
                    Some(padding) => generator.rasterize_bounded(&spec.shape, padding),
                };
            }
            generator
        }
        Source::Coverage { values, mode } => {
            Generator::from_coverage(config.width, config.height, values, *mode)?
        }
    };

    let edges = generator.propagate(&config.propagation)?;
    debug!(
        strategy = config.propagation.name(),
        edges, "propagation finished"
    );

    for &step in &config.post {
        generator.post_process(step)?;
    }

    let field = generator.finish();
    info!(
        width = field.width(),
        height = field.height(),
        shapes = config.shape_count(),
        strategy = config.propagation.name(),
        post_steps = config.post.len(),
        "generated distance field"
    );
    Ok(field)
}
