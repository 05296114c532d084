//! §4.6 Trilinear: standard 8-corner trilinear interpolation.

use super::nearest::nearest_neighbor;
use super::{clamp_result, corner, preamble};
use crate::backend::Backend;
use crate::grid::{Grid, Triple};

pub fn trilinear<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let (nr, ng, nb) = grid.dims();
    if nr < 2 || ng < 2 || nb < 2 {
        return nearest_neighbor(backend, grid, query);
    }

    let (_clamped, pre) = preamble(backend, grid, query);

    let c000 = corner(grid, &pre, 0, 0, 0);
    let c100 = corner(grid, &pre, 1, 0, 0);
    let c010 = corner(grid, &pre, 0, 1, 0);
    let c110 = corner(grid, &pre, 1, 1, 0);
    let c001 = corner(grid, &pre, 0, 0, 1);
    let c101 = corner(grid, &pre, 1, 0, 1);
    let c011 = corner(grid, &pre, 0, 1, 1);
    let c111 = corner(grid, &pre, 1, 1, 1);

    let c00 = c000.lerp(&c100, &pre.tx);
    let c10 = c010.lerp(&c110, &pre.tx);
    let c01 = c001.lerp(&c101, &pre.tx);
    let c11 = c011.lerp(&c111, &pre.tx);

    let c0 = c00.lerp(&c10, &pre.ty);
    let c1 = c01.lerp(&c11, &pre.ty);

    clamp_result(grid, c0.lerp(&c1, &pre.tz))
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
                    let denom = (n - 1) as f64;
                    samples.push(Triple::new(i as f64 / denom, j as f64 / denom, k as f64 / denom));
                }
            }
        }
        Grid::new(n, n, n, samples, Triple::new(0.0, 0.0, 0.0), Triple::new(1.0, 1.0, 1.0), "identity".into()).unwrap()
    }

    #[test]
    fn identity_grid_is_exact_everywhere() {
        let grid = identity_grid(33);
        for (r, g, b) in [(0.0, 0.0, 0.0), (1.0, 1.0, 1.0), (0.25, 0.5, 0.75), (0.5, 0.5, 0.5)] {
            let out = trilinear(&D64, &grid, &Triple::new(r, g, b));
            assert!((out.r - r).abs() < 1e-9);
            assert!((out.g - g).abs() < 1e-9);
            assert!((out.b - b).abs() < 1e-9);
        }
    }

    #[test]
    fn negative_lut_matches_known_value() {
        let n = 33;
        let mut samples = Vec::with_capacity(n * n * n);
        for k in 0..n {
            for j in 0..n {
                for i in 0..n {
                    let denom = (n - 1) as f64;
                    samples.push(Triple::new(
                        1.0 - i as f64 / denom,
                        1.0 - j as f64 / denom,
                        1.0 - k as f64 / denom,
                    ));
                }
            }
        }
        let grid = Grid::new(n, n, n, samples, Triple::new(0.0, 0.0, 0.0), Triple::new(1.0, 1.0, 1.0), "negative".into()).unwrap();
        let out = trilinear(&D64, &grid, &Triple::new(0.2, 0.4, 0.9));
        assert!((out.r - 0.8).abs() < 1e-9);
        assert!((out.g - 0.6).abs() < 1e-9);
        assert!((out.b - 0.1).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_nearest_when_too_thin() {
        let grid = Grid::new(
            1,
            5,
            5,
            vec![Triple::new(0.42, 0.0, 0.0); 25],
            Triple::new(0.0, 0.0, 0.0),
            Triple::new(1.0, 1.0, 1.0),
            "thin".into(),
        )
        .unwrap();
        let query = Triple::new(0.8, 0.3, 0.6);
        let via_trilinear = trilinear(&D64, &grid, &query);
        let via_nearest = nearest_neighbor(&D64, &grid, &query);
        assert_eq!(via_trilinear, via_nearest);
    }
}
