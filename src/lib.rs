//! A numerically precise reference implementation of 3D LUT interpolation
//! kernels.
//!
//! Loads a CUBE-format LUT into a [`Grid`](grid::Grid), then evaluates the
//! kernel family (Nearest Neighbour through the conceptual 6x6x6) against
//! it under either the hardware [`D64`](backend::d64::D64) backend or the
//! arbitrary-precision [`DecD`](backend::decd::DecD) backend, with both
//! required to agree after rounding. The [`driver`] module wires the two
//! together for the probe-list workflow the CLI drives.

pub mod backend;
pub mod cube;
pub mod driver;
pub mod error;
pub mod generators;
pub mod grid;
pub mod kernel;
pub mod scalar;

pub use error::Error;
pub use grid::{Axis, Grid, Triple};
pub use kernel::KernelKind;
