//! §4.8 Bicubic (RG plane): 4x4 Catmull-Rom patch at the nearest-neighbour B
//! slice, falling back to [`bilinear_rg`] when either of R or G has fewer
//! than 4 samples.

use super::bilinear::bilinear_rg;
use super::catmull_rom::weights4;
use super::nearest::round_half_even_index;
use super::{clamp_result, preamble};
use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

pub fn bicubic_rg<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, ng, _) = grid.dims();
    if nr < 4 || ng < 4 {
        return bilinear_rg(backend, grid, query);
    }

    let (clamped, pre) = preamble(backend, grid, query);
    let kc = {
        let k = round_half_even_index(backend, grid.dim(Axis::B), &clamped.b);
        grid.clamp_index(k as i64, Axis::B)
    };

    let wr = weights4(backend, &pre.tx);
    let wg = weights4(backend, &pre.ty);

    let mut rows = Vec::with_capacity(4);
    for db in -1..=2_i64 {
        let j = grid.clamp_index(pre.j as i64 + db, Axis::G);
        let mut acc: Option<Triple<B::Scalar>> = None;
        for (da, w) in (-1..=2_i64).zip(wr.iter()) {
            let i = grid.clamp_index(pre.i as i64 + da, Axis::R);
            let sample = grid.sample(i, j, kc).scale(w);
            acc = Some(match acc {
                Some(a) => a.add(&sample),
                None => sample,
            });
        }
        rows.push(acc.expect("four-element range is never empty"));
    }

    let mut result: Option<Triple<B::Scalar>> = None;
    for (row, w) in rows.iter().zip(wg.iter()) {
        let scaled = row.scale(w);
        result = Some(match result {
            Some(r) => r.add(&scaled),
            None => scaled,
        });
    }

    clamp_result(grid, result.expect("four-element range is never empty"))
}
