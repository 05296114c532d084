//! The interpolation kernel library (§4.2-§4.11).
//!
//! Every kernel shares the same preamble ([`preamble`]) and result clamp
//! ([`clamp_result`]); they differ only in neighbourhood selection and
//! weight computation. Fallback kernels (e.g. Trilinear falling back to
//! Nearest Neighbour when a dimension is < 2) call straight through the
//! same public entry point used directly by callers, per §9's "fall-back
//! kernels must themselves be called via the same entry points".

mod bicubic;
mod bilinear;
pub mod catmull_rom;
mod cubic1d;
mod cubic6;
mod linear;
mod nearest;
mod tetrahedral;
mod tricubic;
mod trilinear;

pub use bicubic::bicubic_rg;
pub use bilinear::bilinear_rg;
pub use cubic1d::cubic_1d_r;
pub use cubic6::cubic_6x6x6;
pub use linear::linear_r;
pub use nearest::nearest_neighbor;
pub use tetrahedral::tetrahedral;
pub use tricubic::tricubic;
pub use trilinear::trilinear;

use std::fmt;

use crate::backend::Backend;
use crate::grid::{Axis, Grid, Triple};

/// The integer anchor and fractional offset for each axis, computed once
/// per query and shared by every kernel (§4.2, steps 2-3).
pub struct Preamble<T> {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub tx: T,
    pub ty: T,
    pub tz: T,
}

/// Clamp `(r, g, b)` to `[0, 1]` and compute the shared preamble.
///
/// Returns the clamped query point alongside the preamble, since every
/// kernel's neighbour selection is expressed in terms of the clamped
/// coordinates, not the raw input.
pub fn preamble<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> (Triple<B::Scalar>, Preamble<B::Scalar>) {
    let zero = backend.literal(0.0);
    let one = backend.literal(1.0);
    let unit_lo = Triple::new(zero.clone(), zero.clone(), zero.clone());
    let unit_hi = Triple::new(one.clone(), one.clone(), one.clone());
    let clamped = query.clamp(&unit_lo, &unit_hi);

    let (nr, ng, nb) = grid.dims();
    let axis_coord = |n: usize, v: &B::Scalar| -> (usize, B::Scalar) {
        if n <= 1 {
            (0, zero.clone())
        } else {
            let x = v.clone() * backend.from_index(n - 1);
            let i = x.floor();
            let frac = x - i.clone();
            (i.to_i64().clamp(0, (n - 1) as i64) as usize, frac)
        }
    };

    let (i, tx) = axis_coord(nr, &clamped.r);
    let (j, ty) = axis_coord(ng, &clamped.g);
    let (k, tz) = axis_coord(nb, &clamped.b);

    (clamped, Preamble { i, j, k, tx, ty, tz })
}

/// Clamp a kernel's result against the grid's domain rectangle (§4.2, step 4).
pub fn clamp_result<B: Backend>(grid: &Grid<B::Scalar>, result: Triple<B::Scalar>) -> Triple<B::Scalar> {
    result.clamp(grid.domain_min(), grid.domain_max())
}

/// Fetch `sample(i + da, j + db, k + dc)` with every axis independently
/// clamped via [`Grid::clamp_index`].
pub fn corner<B: Backend>(
    grid: &Grid<B::Scalar>,
    preamble: &Preamble<B::Scalar>,
    da: i64,
    db: i64,
    dc: i64,
) -> Triple<B::Scalar> {
    let i = grid.clamp_index(preamble.i as i64 + da, Axis::R);
    let j = grid.clamp_index(preamble.j as i64 + db, Axis::G);
    let k = grid.clamp_index(preamble.k as i64 + dc, Axis::B);
    grid.sample(i, j, k)
}

/// Every kernel named in §4, in the order they're listed there. Used by the
/// reference driver to iterate "every kernel" for a probe, and by the CLI
/// to validate `--kernel` style filters if ever added.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelKind {
    NearestNeighbor,
    Linear,
    Bilinear,
    Trilinear,
    Tetrahedral,
    Bicubic,
    Cubic1d,
    Tricubic,
    Cubic6x6x6,
}

impl KernelKind {
    pub const ALL: [KernelKind; 9] = [
        KernelKind::NearestNeighbor,
        KernelKind::Linear,
        KernelKind::Bilinear,
        KernelKind::Trilinear,
        KernelKind::Tetrahedral,
        KernelKind::Bicubic,
        KernelKind::Cubic1d,
        KernelKind::Tricubic,
        KernelKind::Cubic6x6x6,
    ];

    /// Evaluate this kernel at `query` against `grid` under `backend`.
    pub fn eval<B: Backend>(
        &self,
        backend: &B,
        grid: &Grid<B::Scalar>,
        query: &Triple<B::Scalar>,
    ) -> Triple<B::Scalar> {
        match self {
            KernelKind::NearestNeighbor => nearest_neighbor(backend, grid, query),
            KernelKind::Linear => linear_r(backend, grid, query),
            KernelKind::Bilinear => bilinear_rg(backend, grid, query),
            KernelKind::Trilinear => trilinear(backend, grid, query),
            KernelKind::Tetrahedral => tetrahedral(backend, grid, query),
            KernelKind::Bicubic => bicubic_rg(backend, grid, query),
            KernelKind::Cubic1d => cubic_1d_r(backend, grid, query),
            KernelKind::Tricubic => tricubic(backend, grid, query),
            KernelKind::Cubic6x6x6 => cubic_6x6x6(backend, grid, query),
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KernelKind::NearestNeighbor => "Nearest Neighbour",
            KernelKind::Linear => "Linear (1D along R)",
            KernelKind::Bilinear => "Bilinear (RG plane)",
            KernelKind::Trilinear => "Trilinear",
            KernelKind::Tetrahedral => "Tetrahedral (6-simplex decomposition)",
            KernelKind::Bicubic => "Bicubic (RG plane)",
            KernelKind::Cubic1d => "1D Cubic (along R)",
            KernelKind::Tricubic => "Tricubic",
            KernelKind::Cubic6x6x6 => "Conceptual 6\u{d7}6\u{d7}6",
        };
        f.write_str(name)
    }
}
