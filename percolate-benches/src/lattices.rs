//! Seeded lattice generation for benchmarks.
//!
//! Every benchmark input is derived from a fixed seed so runs compare the
//! same lattices across revisions.

use percolate_core::Lattice;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::LabelBenchParams};

/// Seed used for all generated lattices.
pub const SEED: u64 = 42;

/// Square-lattice site percolation threshold.
pub const CRITICAL_PROBABILITY: f64 = 0.592_746;

/// Generates the lattice described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Lattice`] when the probability is outside
/// `[0, 1]` or the side is too large.
///
/// # Examples
/// ```
/// use percolate_benches::{lattices::seeded_lattice, params::LabelBenchParams};
///
/// let params = LabelBenchParams { side: 8, probability: 0.5 };
/// let lattice = seeded_lattice(&params)?;
/// assert_eq!(lattice, seeded_lattice(&params)?);
/// # Ok::<(), percolate_benches::error::BenchSetupError>(())
/// ```
pub fn seeded_lattice(params: &LabelBenchParams) -> Result<Lattice, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(SEED ^ params.side as u64);
    Ok(Lattice::random(params.side, params.probability, &mut rng)?)
}
