//! Post-processing of a finished signed field: box downsampling and
//! neighbourhood softening. Both produce a new grid and leave the input
//! untouched.
//!
//! Only cells that carry a distance are blended. Sentinel cells (unset or
//! `±FAR`) keep their meaning through both steps.

use tracing::debug;
use umbra_core::{Cell, Grid, GridError, GridResult, UNSET};

/// Box-downsample by an integer `factor`.
///
/// Each output cell averages its `factor × factor` source block with equal
/// weight, then divides by `factor` because one output cell spans `factor`
/// source cells. `factor = 2` halves both dimensions.
///
/// A block containing an unset cell is unset. A block with no unset cells
/// but at least one `±FAR` cell collapses to the far sentinel on the side
/// of the block sum.
///
/// # Errors
///
/// - [`GridError::ZeroFactor`] if `factor` is 0.
/// - [`GridError::NotDivisible`] if either dimension is not a multiple of
///   `factor`.
pub fn downsample(grid: &Grid, factor: u32) -> GridResult<Grid> {
    if factor == 0 {
        return Err(GridError::ZeroFactor);
    }
    let (w, h) = (grid.width(), grid.height());
    if w % factor != 0 || h % factor != 0 {
        return Err(GridError::NotDivisible {
            width: w,
            height: h,
            factor,
        });
    }

    let (ow, oh) = (w / factor, h / factor);
    let weight = block_weight(factor);
    let scale = 1.0 / factor as f32;
    let src = grid.values();
    let mut out = Vec::with_capacity(ow as usize * oh as usize);

    for oy in 0..oh {
        for ox in 0..ow {
            let mut sum = 0.0f32;
            let mut unset = false;
            let mut far = false;
            for sy in oy * factor..(oy + 1) * factor {
                for sx in ox * factor..(ox + 1) * factor {
                    let v = src[grid.index(sx, sy)];
                    match Cell::from_raw(v) {
                        Cell::Unset => unset = true,
                        Cell::Far { .. } => far = true,
                        Cell::Distance(_) => {}
                    }
                    sum += v * weight;
                }
            }
            out.push(if unset {
                UNSET
            } else if far {
                Cell::far(sum < 0.0)
            } else {
                sum * scale
            });
        }
    }

    debug!(
        from_width = w,
        from_height = h,
        to_width = ow,
        to_height = oh,
        factor,
        "downsampled field"
    );
    Grid::from_values(ow, oh, out)
}

/// Weight of one source cell in a `factor × factor` block.
fn block_weight(factor: u32) -> f32 {
    1.0 / (factor as f32).powi(2)
}

/// 3×3 weighted blur.
///
/// Tap `(dx, dy)` has weight `2^-(|dx| + |dy|)`: centre 1, edge-adjacent
/// 0.5, corner-adjacent 0.25. Off-grid taps and taps without a distance
/// are dropped from both the sum and the weight total, so border cells are
/// not pulled towards zero and sentinels never leak into distances. Cells
/// without a distance are copied unchanged.
pub fn soften(grid: &Grid) -> Grid {
    let w = grid.width() as i64;
    let h = grid.height() as i64;
    let mut out = grid.clone();

    for (x, y, centre) in grid.iter() {
        if Cell::from_raw(centre).distance().is_none() {
            continue;
        }
        let mut sum = 0.0f32;
        let mut total = 0.0f32;
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let tap = grid.values()[grid.index(nx as u32, ny as u32)];
                let Some(d) = Cell::from_raw(tap).distance() else {
                    continue;
                };
                let weight = 0.5f32.powi((dx.abs() + dy.abs()) as i32);
                sum += d * weight;
                total += weight;
            }
        }
        let i = out.index(x, y);
        out.values_mut()[i] = sum / total;
    }

    debug!(
        width = grid.width(),
        height = grid.height(),
        "softened field"
    );
    out
}
