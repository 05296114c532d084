//! The sampled 3D LUT grid and the RGB triple it is built from.

use crate::error::Error;
use crate::scalar::ScalarOps;

/// An ordered RGB scalar triple.
///
/// Generic over the precision backend's scalar type so the same struct
/// serves both the [`D64`](crate::backend::d64::D64) and
/// [`DecD`](crate::backend::decd::DecD) backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Triple<T> {
    pub r: T,
    pub g: T,
    pub b: T,
}

impl<T> Triple<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to each channel independently.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Triple<U> {
        Triple::new(f(&self.r), f(&self.g), f(&self.b))
    }
}

impl<T: ScalarOps> Triple<T> {
    pub fn add(&self, other: &Triple<T>) -> Triple<T> {
        Triple::new(
            self.r.clone() + other.r.clone(),
            self.g.clone() + other.g.clone(),
            self.b.clone() + other.b.clone(),
        )
    }

    pub fn sub(&self, other: &Triple<T>) -> Triple<T> {
        Triple::new(
            self.r.clone() - other.r.clone(),
            self.g.clone() - other.g.clone(),
            self.b.clone() - other.b.clone(),
        )
    }

    pub fn scale(&self, t: &T) -> Triple<T> {
        Triple::new(
            self.r.clone() * t.clone(),
            self.g.clone() * t.clone(),
            self.b.clone() * t.clone(),
        )
    }

    /// `self + (other - self) * t`, the two-point lerp used by every kernel
    /// that walks along a single axis.
    pub fn lerp(&self, other: &Triple<T>, t: &T) -> Triple<T> {
        self.add(&other.sub(self).scale(t))
    }

    /// Channel-wise clamp against `lo` and `hi`.
    pub fn clamp(&self, lo: &Triple<T>, hi: &Triple<T>) -> Triple<T> {
        Triple::new(
            clamp_scalar(self.r.clone(), &lo.r, &hi.r),
            clamp_scalar(self.g.clone(), &lo.g, &hi.g),
            clamp_scalar(self.b.clone(), &lo.b, &hi.b),
        )
    }
}

fn clamp_scalar<T: ScalarOps>(v: T, lo: &T, hi: &T) -> T {
    if v.lt(lo) {
        lo.clone()
    } else if v.gt(hi) {
        hi.clone()
    } else {
        v
    }
}

/// Which of the three grid axes (R, G, B) an operation concerns. Used by
/// [`Grid::clamp_index`] and by kernels that need to know a single axis's
/// size without destructuring `(nr, ng, nb)` every time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    R = 0,
    G = 1,
    B = 2,
}

/// An immutable, densely packed 3D LUT grid.
///
/// Samples are addressed as `sample(i, j, k)`, where `sample(i, j, k)` is the
/// value stored at the normalized grid coordinate
/// `(i / (nr - 1), j / (ng - 1), k / (nb - 1))` (0 when the corresponding
/// dimension has size 1). Storage is a single contiguous buffer in
/// R-fastest, B-slowest order, so a kernel's 8 (or 64) neighbour loads are
/// fixed-stride accesses.
#[derive(Clone, Debug)]
pub struct Grid<T> {
    nr: usize,
    ng: usize,
    nb: usize,
    samples: Vec<Triple<T>>,
    dmin: Triple<T>,
    dmax: Triple<T>,
    title: String,
}

impl<T: ScalarOps> Grid<T> {
    /// Construct a grid from a sample list already in `(i, j, k)` order
    /// (R-fastest, B-slowest — the same order the CUBE format stores data
    /// in), with an explicit domain rectangle.
    pub fn new(
        nr: usize,
        ng: usize,
        nb: usize,
        samples: Vec<Triple<T>>,
        dmin: Triple<T>,
        dmax: Triple<T>,
        title: String,
    ) -> Result<Self, Error> {
        if nr < 1 || ng < 1 || nb < 1 {
            return Err(Error::LoadError(format!(
                "grid dimensions must be >= 1, got ({nr}, {ng}, {nb})"
            )));
        }
        let expected = nr * ng * nb;
        if samples.len() != expected {
            return Err(Error::LoadError(format!(
                "expected {expected} samples for ({nr}, {ng}, {nb}), got {}",
                samples.len()
            )));
        }
        if dmin.r.gt(&dmax.r) || dmin.g.gt(&dmax.g) || dmin.b.gt(&dmax.b) {
            return Err(Error::DomainError(format!(
                "domain_min {dmin:?} is not <= domain_max {dmax:?} in every channel"
            )));
        }
        Ok(Self {
            nr,
            ng,
            nb,
            samples,
            dmin,
            dmax,
            title,
        })
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nr, self.ng, self.nb)
    }

    pub fn dim(&self, axis: Axis) -> usize {
        match axis {
            Axis::R => self.nr,
            Axis::G => self.ng,
            Axis::B => self.nb,
        }
    }

    /// True when all three dimensions are equal.
    pub fn is_cubic(&self) -> bool {
        self.nr == self.ng && self.ng == self.nb
    }

    pub fn domain_min(&self) -> &Triple<T> {
        &self.dmin
    }

    pub fn domain_max(&self) -> &Triple<T> {
        &self.dmax
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Clamp a (possibly out-of-range, possibly negative) integer index into
    /// `[0, dim(axis) - 1]`.
    ///
    /// Every kernel must route neighbour indices through this before calling
    /// [`sample`](Self::sample): it is the grid's only mutation-free
    /// boundary-safety mechanism.
    pub fn clamp_index(&self, a: i64, axis: Axis) -> usize {
        let n = self.dim(axis) as i64;
        a.clamp(0, n - 1) as usize
    }

    /// Fetch the sample at `(i, j, k)`. Callers are expected to have already
    /// clamped each index with [`clamp_index`](Self::clamp_index); this
    /// never panics as long as they did.
    pub fn sample(&self, i: usize, j: usize, k: usize) -> Triple<T> {
        let idx = (k * self.ng + j) * self.nr + i;
        self.samples[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(v: f64) -> Triple<f64> {
        Triple::new(v, v, v)
    }

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
        Grid::new(n, n, n, samples, triple(0.0), triple(1.0), "identity".into()).unwrap()
    }

    #[test]
    fn sample_roundtrips_identity() {
        let grid = identity_grid(5);
        assert_eq!(grid.sample(0, 0, 0), Triple::new(0.0, 0.0, 0.0));
        assert_eq!(grid.sample(4, 4, 4), Triple::new(1.0, 1.0, 1.0));
        assert_eq!(grid.sample(2, 1, 3), Triple::new(0.5, 0.25, 0.75));
    }

    #[test]
    fn clamp_index_saturates() {
        let grid = identity_grid(5);
        assert_eq!(grid.clamp_index(-3, Axis::R), 0);
        assert_eq!(grid.clamp_index(100, Axis::G), 4);
        assert_eq!(grid.clamp_index(2, Axis::B), 2);
    }

    #[test]
    fn rejects_size_mismatch() {
        let samples = vec![Triple::new(0.0, 0.0, 0.0); 7];
        let err = Grid::new(2, 2, 2, samples, triple(0.0), triple(1.0), "bad".into());
        assert!(err.is_err());
    }

    #[test]
    fn rejects_inverted_domain() {
        let samples = vec![Triple::new(0.0, 0.0, 0.0); 8];
        let err = Grid::new(2, 2, 2, samples, triple(1.0), triple(0.0), "bad".into());
        assert!(matches!(err, Err(Error::DomainError(_))));
    }

    #[test]
    fn lerp_matches_manual_interpolation() {
        let a = Triple::new(0.0, 10.0, -2.0);
        let b = Triple::new(4.0, 0.0, 2.0);
        let mid = a.lerp(&b, &0.25);
        assert_eq!(mid, Triple::new(1.0, 7.5, -1.0));
    }

    #[test]
    fn clamp_saturates_each_channel() {
        let v = Triple::new(-1.0, 0.5, 2.0);
        let clamped = v.clamp(&triple(0.0), &triple(1.0));
        assert_eq!(clamped, Triple::new(0.0, 0.5, 1.0));
    }
}
