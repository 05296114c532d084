//! §4.10 Tricubic: separable 4x4x4 Catmull-Rom, falling back to
//! [`trilinear`] when any dimension has fewer than 4 samples.

use super::catmull_rom::weights4;
use super::trilinear::trilinear;
use super::{clamp_result, corner, preamble};
use crate::backend::Backend;
use crate::grid::{Grid, Triple};

pub fn tricubic<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, ng, nb) = grid.dims();
    if nr < 4 || ng < 4 || nb < 4 {
        return trilinear(backend, grid, query);
    }

    let (_clamped, pre) = preamble(backend, grid, query);

    let wr = weights4(backend, &pre.tx);
    let wg = weights4(backend, &pre.ty);
    let wb = weights4(backend, &pre.tz);

    let mut planes = Vec::with_capacity(4);
    for dc in -1..=2_i64 {
        let mut rows = Vec::with_capacity(4);
        for db in -1..=2_i64 {
            let mut acc: Option<Triple<B::Scalar>> = None;
            for (da, wi) in (-1..=2_i64).zip(wr.iter()) {
                let sample = corner(grid, &pre, da, db, dc).scale(wi);
                acc = Some(match acc {
                    Some(a) => a.add(&sample),
                    None => sample,
                });
            }
            rows.push(acc.expect("four-element range is never empty"));
        }
        let mut acc: Option<Triple<B::Scalar>> = None;
        for (row, wj) in rows.iter().zip(wg.iter()) {
            let scaled = row.scale(wj);
            acc = Some(match acc {
                Some(a) => a.add(&scaled),
                None => scaled,
            });
        }
        planes.push(acc.expect("four-element range is never empty"));
    }

    let mut result: Option<Triple<B::Scalar>> = None;
    for (plane, wk) in planes.iter().zip(wb.iter()) {
        let scaled = plane.scale(wk);
        result = Some(match result {
            Some(r) => r.add(&scaled),
            None => scaled,
        });
    }

    clamp_result(grid, result.expect("four-element range is never empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::d64::D64;

    fn identity_grid(n: usize) -> Grid<f64> {
        let mut samples = Vec::with_capacity(n * n * n);
        for k in 0..n {
            for j in 0..n {
                for i in 0..n {
                    let denom = (n - 1).max(1) as f64;
                    samples.push(Triple::new(i as f64 / denom, j as f64 / denom, k as f64 / denom));
                }
            }
        }
        Grid::new(n, n, n, samples, Triple::new(0.0, 0.0, 0.0), Triple::new(1.0, 1.0, 1.0), "identity".into()).unwrap()
    }

    #[test]
    fn identity_ramp_is_exact_off_grid() {
        let grid = identity_grid(17);
        let out = tricubic(&D64, &grid, &Triple::new(0.271, 0.628, 0.5));
        assert!((out.r - 0.271).abs() < 1e-9);
        assert!((out.g - 0.628).abs() < 1e-9);
        assert!((out.b - 0.5).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_trilinear_when_too_thin() {
        let grid = identity_grid(3);
        let query = Triple::new(0.4, 0.6, 0.2);
        let via_tricubic = tricubic(&D64, &grid, &query);
        let via_trilinear = trilinear(&D64, &grid, &query);
        assert_eq!(via_tricubic, via_trilinear);
    }
}
