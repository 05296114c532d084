//! §4.5 Bilinear (RG plane).

use super::linear::linear_generic;
use super::nearest::round_half_even_index;
use super::{clamp_result, preamble};
use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

pub fn bilinear_rg<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, ng, _) = grid.dims();

    if nr <= 1 {
        return linear_generic(backend, grid, query, Axis::G);
    }
    if ng <= 1 {
        return linear_generic(backend, grid, query, Axis::R);
    }

    let (clamped, pre) = preamble(backend, grid, query);
    let k_star = round_half_even_index(backend, grid.dim(Axis::B), &clamped.b);
    let kc = grid.clamp_index(k_star as i64, Axis::B);

    let i0 = grid.clamp_index(pre.i as i64, Axis::R);
    let i1 = grid.clamp_index(pre.i as i64 + 1, Axis::R);
    let j0 = grid.clamp_index(pre.j as i64, Axis::G);
    let j1 = grid.clamp_index(pre.j as i64 + 1, Axis::G);

    let c00 = grid.sample(i0, j0, kc);
    let c10 = grid.sample(i1, j0, kc);
    let c01 = grid.sample(i0, j1, kc);
    let c11 = grid.sample(i1, j1, kc);

    let c0 = c00.lerp(&c10, &pre.tx);
    let c1 = c01.lerp(&c11, &pre.tx);
    clamp_result(grid, c0.lerp(&c1, &pre.ty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::d64::D64;

    fn identity_grid(nr: usize, ng: usize, nb: usize) -> Grid<f64> {
        let mut samples = Vec::with_capacity(nr * ng * nb);
        for k in 0..nb {
            for j in 0..ng {
                for i in 0..nr {
                    let r = i as f64 / (nr - 1).max(1) as f64;
                    let g = j as f64 / (ng - 1).max(1) as f64;
                    let b = k as f64 / (nb - 1).max(1) as f64;
                    samples.push(Triple::new(r, g, b));
                }
            }
        }
        Grid::new(nr, ng, nb, samples, Triple::new(0.0, 0.0, 0.0), Triple::new(1.0, 1.0, 1.0), "identity".into()).unwrap()
    }

    #[test]
    fn identity_plane_is_exact() {
        let grid = identity_grid(17, 17, 17);
        let out = bilinear_rg(&D64, &grid, &Triple::new(0.3, 0.6, 0.5));
        assert!((out.r - 0.3).abs() < 1e-9);
        assert!((out.g - 0.6).abs() < 1e-9);
    }

    #[test]
    fn degenerate_r_uses_g_axis_linear() {
        let grid = identity_grid(1, 17, 17);
        let out = bilinear_rg(&D64, &grid, &Triple::new(0.9, 0.42, 0.5));
        assert_eq!(out.r, 0.0);
        assert!((out.g - 0.42).abs() < 1e-9);
    }
}
