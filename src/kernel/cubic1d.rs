//! §4.9 1D Cubic (along R): 4-tap Catmull-Rom along R, with G and B selected
//! by nearest neighbour. Falls back to [`linear_r`] when Nr < 4.

use super::catmull_rom::weights4;
use super::linear::linear_r;
use super::nearest::round_half_even_index;
use super::{clamp_result, preamble};
use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

pub fn cubic_1d_r<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, _, _) = grid.dims();
    if nr < 4 {
        return linear_r(backend, grid, query);
    }

    let (clamped, pre) = preamble(backend, grid, query);
    let jc = grid.clamp_index(round_half_even_index(backend, grid.dim(Axis::G), &clamped.g) as i64, Axis::G);
    let kc = grid.clamp_index(round_half_even_index(backend, grid.dim(Axis::B), &clamped.b) as i64, Axis::B);

    let w = weights4(backend, &pre.tx);
    let mut result: Option<Triple<B::Scalar>> = None;
    for (da, wi) in (-1..=2_i64).zip(w.iter()) {
        let i = grid.clamp_index(pre.i as i64 + da, Axis::R);
        let scaled = grid.sample(i, jc, kc).scale(wi);
        result = Some(match result {
            Some(r) => r.add(&scaled),
            None => scaled,
        });
    }

    clamp_result(grid, result.expect("four-element range is never empty"))
}
