//! Errors raised while preparing benchmark inputs.

use percolate_core::LatticeError;
use thiserror::Error;

/// Benchmark setup failed before measurement started.
#[derive(Debug, Error)]
pub enum BenchSetupError {
    /// A lattice could not be generated.
    #[error("failed to generate lattice: {0}")]
    Lattice(#[from] LatticeError),
}
