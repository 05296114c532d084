//! §4.4 Linear (1D along R).
//!
//! Implemented on top of a private axis-generic helper so that Bilinear's
//! degenerate fall-through (§4.5, "Nr=1 or Ng=1 fall through to the
//! appropriate 1D linear interpolator") can reuse the exact same
//! interpolation code along whichever axis still varies, instead of
//! duplicating the lerp-plus-nearest-neighbour-selection logic per axis.

use super::nearest::round_half_even_index;
use super::{clamp_result, preamble};
use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

/// 1D linear interpolation along `axis`, selecting the other two axes by
/// nearest neighbour. `axis` must be [`Axis::R`] or [`Axis::G`]; this crate
/// never needs the B-axis variant, since every kernel that walks along B
/// does so as part of a higher-dimensional interpolation instead.
pub(crate) fn linear_generic<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
    axis: Axis,
) -> Triple<B::Scalar> {
    let (clamped, pre) = preamble(backend, grid, query);
    let n = grid.dim(axis);

    let other = |a: Axis, coord: &B::Scalar| round_half_even_index(backend, grid.dim(a), coord);

    match axis {
        Axis::R => {
            let jc = grid.clamp_index(other(Axis::G, &clamped.g) as i64, Axis::G);
            let kc = grid.clamp_index(other(Axis::B, &clamped.b) as i64, Axis::B);
            if n <= 1 {
                return clamp_result(grid, grid.sample(0, jc, kc));
            }
            let i0 = grid.clamp_index(pre.i as i64, Axis::R);
            let i1 = grid.clamp_index(pre.i as i64 + 1, Axis::R);
            let c0 = grid.sample(i0, jc, kc);
            let c1 = grid.sample(i1, jc, kc);
            clamp_result(grid, c0.lerp(&c1, &pre.tx))
        }
        Axis::G => {
            let ic = grid.clamp_index(other(Axis::R, &clamped.r) as i64, Axis::R);
            let kc = grid.clamp_index(other(Axis::B, &clamped.b) as i64, Axis::B);
            if n <= 1 {
                return clamp_result(grid, grid.sample(ic, 0, kc));
            }
            let j0 = grid.clamp_index(pre.j as i64, Axis::G);
            let j1 = grid.clamp_index(pre.j as i64 + 1, Axis::G);
            let c0 = grid.sample(ic, j0, kc);
            let c1 = grid.sample(ic, j1, kc);
            clamp_result(grid, c0.lerp(&c1, &pre.ty))
        }
        Axis::B => unreachable!("B-axis 1D linear is never requested by this crate"),
    }
}

/// §4.4 Linear (1D along R). Selects `j*`, `k*` by nearest neighbour in G
/// and B, then lerps along R with weight `tx`. Returns `sample(0, j*, k*)`
/// directly when `Nr = 1`.
pub fn linear_r<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    linear_generic(backend, grid, query, Axis::R)
}
