//! The scalar abstraction every kernel is written against.
//!
//! Kernels never touch `f64` or [`Dec`](crate::backend::decd::Dec) directly;
//! they are generic over [`ScalarOps`] so that the exact same code path runs
//! under both precision backends (see `DESIGN.md`, "Precision Backend").

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Operations a precision backend's scalar type must provide.
///
/// Deliberately small: everything a kernel preamble or weight computation
/// needs, nothing a specific kernel needs (those ask the
/// [`Backend`](crate::backend::Backend) for extra literals instead).
pub trait ScalarOps:
    Clone + Debug + PartialOrd + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Round toward negative infinity, returning a value of the same type.
    fn floor(&self) -> Self;

    /// Convert an already-integral value (e.g. the result of [`floor`](Self::floor))
    /// to a native integer index.
    fn to_i64(&self) -> i64;

    /// Lossy conversion to `f64`, used for cross-backend agreement checks and
    /// for anything that doesn't need to stay in the backend's scalar type.
    fn to_f64(&self) -> f64;

    /// Absolute value.
    fn abs(&self) -> Self;

    /// Format to `precision` digits after the decimal point.
    fn format(&self, precision: usize) -> String;

    /// `self < other`, spelled out for call sites that read better without
    /// importing `PartialOrd`.
    fn lt(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(std::cmp::Ordering::Less))
    }

    /// `self <= other`.
    fn le(&self, other: &Self) -> bool {
        !matches!(self.partial_cmp(other), Some(std::cmp::Ordering::Greater) | None)
    }

    /// `self >= other`.
    fn ge(&self, other: &Self) -> bool {
        other.le(self)
    }

    /// `self > other`.
    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }
}

impl ScalarOps for f64 {
    fn floor(&self) -> Self {
        f64::floor(*self)
    }

    fn to_i64(&self) -> i64 {
        *self as i64
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    fn format(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}
