//! Nearest neighbour (§4.3) and the shared round-half-to-even helper used by
//! every kernel that selects a non-interpolated axis "by nearest neighbour"
//! (Linear, Bilinear, Bicubic, 1D Cubic).

use super::clamp_result;
use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

/// Round `v * (n - 1)` to the nearest integer index in `[0, n - 1]`, ties
/// breaking to even, per §4.2's rounding policy.
pub(crate) fn round_half_even_index<B: Backend>(backend: &B, n: usize, v: &B::Scalar) -> usize {
    if n <= 1 {
        return 0;
    }
    let x = v.clone() * backend.from_index(n - 1);
    let floor = x.floor();
    let diff = x.clone() - floor.clone();
    let half = backend.literal(0.5);

    let rounded = if diff.lt(&half) {
        floor.clone()
    } else if diff.gt(&half) {
        floor.clone() + backend.literal(1.0)
    } else if floor.to_i64() % 2 == 0 {
        floor.clone()
    } else {
        floor.clone() + backend.literal(1.0)
    };

    (rounded.to_i64().clamp(0, (n - 1) as i64)) as usize
}

fn clamp_unit<B: Backend>(backend: &B, query: &Triple<B::Scalar>) -> Triple<B::Scalar> {
    let zero = backend.literal(0.0);
    let one = backend.literal(1.0);
    query.clamp(
        &Triple::new(zero.clone(), zero.clone(), zero),
        &Triple::new(one.clone(), one.clone(), one),
    )
}

/// §4.3 Nearest Neighbour.
pub fn nearest_neighbor<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Triple<B::Scalar> {
    let clamped = clamp_unit(backend, query);
    let (nr, ng, nb) = grid.dims();
    let i = round_half_even_index(backend, nr, &clamped.r);
    let j = round_half_even_index(backend, ng, &clamped.g);
    let k = round_half_even_index(backend, nb, &clamped.b);
    clamp_result(grid, grid.sample(grid.clamp_index(i as i64, Axis::R), grid.clamp_index(j as i64, Axis::G), grid.clamp_index(k as i64, Axis::B)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::d64::D64;
    use crate::grid::Grid;

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
    fn corners_are_exact() {
        let grid = identity_grid(9);
        let out = nearest_neighbor(&D64, &grid, &Triple::new(0.0, 0.0, 0.0));
        assert_eq!(out, Triple::new(0.0, 0.0, 0.0));
        let out = nearest_neighbor(&D64, &grid, &Triple::new(1.0, 1.0, 1.0));
        assert_eq!(out, Triple::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn idempotent() {
        let grid = identity_grid(16);
        let query = Triple::new(0.37, 0.81, 0.12);
        let once = nearest_neighbor(&D64, &grid, &query);
        let twice = nearest_neighbor(&D64, &grid, &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn clamps_out_of_range_input() {
        let grid = identity_grid(9);
        let inside = nearest_neighbor(&D64, &grid, &Triple::new(0.0, 0.5, 1.0));
        let outside = nearest_neighbor(&D64, &grid, &Triple::new(-0.3, 0.5, 1.7));
        assert_eq!(inside, outside);
    }
}
