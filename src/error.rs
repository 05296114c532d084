//! Crate-level error type.
//!
//! `DimensionError` is deliberately unused outside of documentation and
//! tests: per the kernel fallback contract, a grid that is too small for a
//! given kernel never produces an error, it silently (modulo a `log::warn!`)
//! falls back to a lower-order kernel instead. The variant exists so the
//! condition has a name, not because anything ever returns it.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed CUBE file: missing `LUT_3D_SIZE`, size < 2, wrong data-point
    /// count, or non-numeric data.
    LoadError(String),
    /// `domain_min[c] > domain_max[c]` for some channel `c`.
    DomainError(String),
    /// A kernel needs a larger grid than it was given. Never surfaced; see
    /// module docs.
    DimensionError(String),
    /// Arbitrary-precision digit count outside `[4, 50]`.
    PrecisionConfigError(String),
    /// Unexpected failure evaluating a kernel (e.g. allocation failure under
    /// `DecD`). Caught per-kernel by the driver; never propagates past it.
    KernelEvalError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::LoadError(msg) => write!(f, "failed to load LUT: {msg}"),
            Error::DomainError(msg) => write!(f, "invalid domain: {msg}"),
            Error::DimensionError(msg) => write!(f, "dimension requirement not met: {msg}"),
            Error::PrecisionConfigError(msg) => write!(f, "invalid precision configuration: {msg}"),
            Error::KernelEvalError(msg) => write!(f, "kernel evaluation failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
