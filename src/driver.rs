//! Reference Driver (§4.13): runs every [`KernelKind`] against a fixed probe
//! list and formats the results.
//!
//! The sequential and parallel entry points ([`run_probes`] and
//! [`par_run_probes`]) both build their output by mapping
//! [`format_probe`] over the probe list; only the iterator adapter differs
//! (`.iter()` vs `.par_iter()`, gated behind the `rayon` feature), matching
//! the shape of `InterpolatedRemapper::remap_image`/`par_remap_image` in the
//! teacher crate.

use crate::backend::Backend;
use crate::error::Error;
use crate::grid::{Grid, Triple};
use crate::kernel::KernelKind;

/// The canonical 24-point probe list (§6): 8 unit-cube corners, the centre,
/// the 6 face centres, 3 off-grid interior points, 2 points that exercise
/// the preamble's out-of-range clamp, and 4 points chosen to land exactly
/// on a tetrahedral-ordering hyperplane.
pub const PROBE_POINTS: [(f64, f64, f64); 24] = [
    (0.0, 0.0, 0.0),
    (1.0, 0.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (1.0, 1.0, 0.0),
    (1.0, 0.0, 1.0),
    (0.0, 1.0, 1.0),
    (1.0, 1.0, 1.0),
    (0.5, 0.5, 0.5),
    (0.5, 0.5, 0.0),
    (0.5, 0.5, 1.0),
    (0.5, 0.0, 0.5),
    (0.5, 1.0, 0.5),
    (0.0, 0.5, 0.5),
    (1.0, 0.5, 0.5),
    (0.25, 0.5, 0.75),
    (0.1, 0.9, 0.3),
    (0.73, 0.12, 0.44),
    (-0.1, 0.5, 1.1),
    (1.2, -0.2, 0.5),
    (0.4, 0.4, 0.1),
    (0.1, 0.4, 0.4),
    (0.4, 0.1, 0.4),
    (0.37, 0.37, 0.37),
];

const SEPARATOR: &str = "--------------------";

/// Format one probe's block: the input line, one output line per kernel,
/// and the trailing separator.
pub fn format_probe<B: Backend>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    point: (f64, f64, f64),
    precision: usize,
) -> String {
    let query = Triple::new(backend.literal(point.0), backend.literal(point.1), backend.literal(point.2));

    let mut out = String::new();
    out.push_str(&format!(
        "Input RGB: ({}, {}, {})\n",
        format_f64(point.0, precision),
        format_f64(point.1, precision),
        format_f64(point.2, precision),
    ));

    for kind in KernelKind::ALL {
        match eval_kernel(&kind, backend, grid, &query) {
            Ok(result) => {
                out.push_str(&format!(
                    "  {kind}: [{}, {}, {}]\n",
                    result.r.format(precision),
                    result.g.format(precision),
                    result.b.format(precision),
                ));
            },
            Err(e) => {
                log::error!("{kind} failed for probe {point:?}: {e}");
            },
        }
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

/// Evaluate a kernel, converting a panic (the only realistic failure mode
/// for otherwise-total arithmetic) into a [`Error::KernelEvalError`] so the
/// driver can log it and move on to the next kernel, per §7.
fn eval_kernel<B: Backend>(
    kind: &KernelKind,
    backend: &B,
    grid: &Grid<B::Scalar>,
    query: &Triple<B::Scalar>,
) -> Result<Triple<B::Scalar>, Error> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| kind.eval(backend, grid, query)))
        .map_err(|_| Error::KernelEvalError(format!("{kind} panicked during evaluation")))
}

fn format_f64(v: f64, precision: usize) -> String {
    format!("{v:.precision$}")
}

/// Run every probe in `points` sequentially, in order.
pub fn run_probes<B: Backend>(backend: &B, grid: &Grid<B::Scalar>, points: &[(f64, f64, f64)], precision: usize) -> String {
    points.iter().map(|&p| format_probe(backend, grid, p, precision)).collect()
}

/// Run every probe in `points` using a `rayon` work-stealing pool, returning
/// the same output `run_probes` would, in the same order.
#[cfg(feature = "rayon")]
pub fn par_run_probes<B: Backend + Sync>(
    backend: &B,
    grid: &Grid<B::Scalar>,
    points: &[(f64, f64, f64)],
    precision: usize,
) -> String
where
    B::Scalar: Send + Sync,
{
    use rayon::prelude::*;
    points.par_iter().map(|&p| format_probe(backend, grid, p, precision)).collect()
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
    fn formats_every_kernel_and_a_separator() {
        let grid = identity_grid(17);
        let block = format_probe(&D64, &grid, (0.5, 0.5, 0.5), 6);
        assert!(block.starts_with("Input RGB: (0.500000, 0.500000, 0.500000)\n"));
        for kind in KernelKind::ALL {
            assert!(block.contains(&format!("  {kind}: [")), "missing {kind} in:\n{block}");
        }
        assert!(block.trim_end().ends_with(SEPARATOR));
    }

    #[test]
    fn run_probes_emits_one_block_per_point() {
        let grid = identity_grid(9);
        let out = run_probes(&D64, &grid, &PROBE_POINTS, 4);
        assert_eq!(out.matches(SEPARATOR).count(), PROBE_POINTS.len());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_and_sequential_runs_agree() {
        let grid = identity_grid(9);
        let seq = run_probes(&D64, &grid, &PROBE_POINTS, 8);
        let par = par_run_probes(&D64, &grid, &PROBE_POINTS, 8);
        assert_eq!(seq, par);
    }
}
