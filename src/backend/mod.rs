//! Precision backends.
//!
//! A [`Backend`] is the thing that turns raw `f64` grid data and literal
//! constants into a concrete [`ScalarOps`] type. Kernels are written once,
//! generic over `B: Backend`, and run unchanged under both precisions:
//! [`d64::D64`] (hardware binary64) and [`decd::DecD`] (arbitrary-precision
//! decimal).

pub mod d64;
pub mod decd;

use crate::grid::{Grid, Triple};
use crate::scalar::ScalarOps;

/// Produces scalars of a fixed precision from `f64` literals and indices,
/// and converts a loaded `Grid<f64>` into the backend's own scalar type.
pub trait Backend: Clone {
    type Scalar: ScalarOps;

    /// A human-readable name for logging ("D64", "DecD(32)", ...).
    fn name(&self) -> String;

    /// Build a scalar from an `f64` literal (e.g. `0.0`, `1.0`, `0.5`, the
    /// Catmull-Rom coefficient `-0.5`).
    fn literal(&self, v: f64) -> Self::Scalar;

    /// Build a scalar from a small non-negative integer, e.g. a grid
    /// dimension minus one.
    fn from_index(&self, v: usize) -> Self::Scalar {
        self.literal(v as f64)
    }

    /// Convert a `Grid<f64>` (as produced by the CUBE parser) into a grid
    /// over this backend's scalar type. Performed once per run.
    fn convert_grid(&self, grid: &Grid<f64>) -> Grid<Self::Scalar> {
        let (nr, ng, nb) = grid.dims();
        let mut samples = Vec::with_capacity(nr * ng * nb);
        for k in 0..nb {
            for j in 0..ng {
                for i in 0..nr {
                    samples.push(convert_triple(self, &grid.sample(i, j, k)));
                }
            }
        }
        let dmin = convert_triple(self, grid.domain_min());
        let dmax = convert_triple(self, grid.domain_max());
        Grid::new(nr, ng, nb, samples, dmin, dmax, grid.title().to_string())
            .expect("converting an already-validated grid cannot fail")
    }
}

fn convert_triple<B: Backend + ?Sized>(backend: &B, t: &Triple<f64>) -> Triple<B::Scalar> {
    Triple::new(
        backend.literal(t.r),
        backend.literal(t.g),
        backend.literal(t.b),
    )
}
