//! The [`UnsignedPass`] trait.
//!
//! Passes are stateless operators over one unsigned working grid. The
//! propagation strategy of a generation run is an ordered list of passes,
//! applied to the exterior and interior grids independently.

use umbra_core::Grid;

/// A stateless operator over a non-negative working grid.
///
/// # Contract
///
/// - `apply()` MUST be deterministic: same input grid, same output grid.
/// - `apply()` MUST NOT increase any cell value.
/// - `&self`: configuration only, no mutable state between calls.
///
/// # Object safety
///
/// This trait is object-safe; strategies are stored as
/// `Vec<Box<dyn UnsignedPass>>`.
///
/// # Examples
///
/// A pass that caps every distance:
///
/// ```
/// use umbra_core::Grid;
/// use umbra_sweep::UnsignedPass;
///
/// struct Cap(f32);
///
/// impl UnsignedPass for Cap {
///     fn name(&self) -> &str { "cap" }
///
///     fn apply(&self, grid: &mut Grid) {
///         for v in grid.values_mut() {
///             *v = v.min(self.0);
///         }
///     }
/// }
///
/// let mut g = Grid::filled(2, 2, 10.0).unwrap();
/// Cap(3.0).apply(&mut g);
/// assert!(g.values().iter().all(|&v| v == 3.0));
/// ```
pub trait UnsignedPass {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Run the pass over `grid` in place.
    fn apply(&self, grid: &mut Grid);
}
