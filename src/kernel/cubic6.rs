//! §4.11 Conceptual 6x6x6: a 6-wide separable Catmull-Rom neighbourhood,
//! falling back to [`tricubic`] when any dimension has fewer than 6 samples.
//!
//! This is explicitly a conceptual widening of the tricubic kernel rather
//! than a true sampled reconstruction of a higher-order filter: the six
//! per-axis weights from [`catmull_rom::weights6`] do not correspond to any
//! standard quintic convolution kernel, they are just the same `a = -0.5`
//! cubic evaluated over a wider neighbourhood (§9).

use super::catmull_rom::weights6;
use super::tricubic::tricubic;
use super::{clamp_result, corner, preamble};
use crate::backend::Backend;
use crate::grid::{Grid, Triple};

pub fn cubic_6x6x6<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, ng, nb) = grid.dims();
    if nr < 6 || ng < 6 || nb < 6 {
        return tricubic(backend, grid, query);
    }

    let (_clamped, pre) = preamble(backend, grid, query);

    let wr = weights6(backend, &pre.tx);
    let wg = weights6(backend, &pre.ty);
    let wb = weights6(backend, &pre.tz);
    let offsets: [i64; 6] = [-2, -1, 0, 1, 2, 3];

    let mut planes = Vec::with_capacity(6);
    for &dc in &offsets {
        let mut rows = Vec::with_capacity(6);
        for &db in &offsets {
            let mut acc: Option<Triple<B::Scalar>> = None;
            for (&da, wi) in offsets.iter().zip(wr.iter()) {
                let sample = corner(grid, &pre, da, db, dc).scale(wi);
                acc = Some(match acc {
                    Some(a) => a.add(&sample),
                    None => sample,
                });
            }
            rows.push(acc.expect("six-element range is never empty"));
        }
        let mut acc: Option<Triple<B::Scalar>> = None;
        for (row, wj) in rows.iter().zip(wg.iter()) {
            let scaled = row.scale(wj);
            acc = Some(match acc {
                Some(a) => a.add(&scaled),
                None => scaled,
            });
        }
        planes.push(acc.expect("six-element range is never empty"));
    }

    let mut result: Option<Triple<B::Scalar>> = None;
    for (plane, wk) in planes.iter().zip(wb.iter()) {
        let scaled = plane.scale(wk);
        result = Some(match result {
            Some(r) => r.add(&scaled),
            None => scaled,
        });
    }

    clamp_result(grid, result.expect("six-element range is never empty"))
}
