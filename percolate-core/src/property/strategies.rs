//! Strategy builders for labeller property tests.
//!
//! Fixtures are derived from a `(density, side, seed)` triple so failures can
//! be replayed through the rstest cases in `tests.rs`.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Lattice;

use super::types::{Density, LatticeFixture};

/// Largest side generated by the strategies.
const MAX_SIDE: usize = 24;

/// Generates lattice fixtures across every density regime.
pub(super) fn lattice_fixture_strategy() -> impl Strategy<Value = LatticeFixture> {
    (
        prop::sample::select(Density::ALL.to_vec()),
        0..=MAX_SIDE,
        any::<u64>(),
    )
        .prop_map(|(density, side, seed)| generate_fixture(density, side, seed))
}

/// Generates a fixture for an explicit regime, side and seed.
pub(super) fn generate_fixture(density: Density, side: usize, seed: u64) -> LatticeFixture {
    let mut rng = SmallRng::seed_from_u64(seed);
    let lattice = match density {
        Density::Sparse => sample(side, 0.2, &mut rng),
        Density::Critical => sample(side, 0.59, &mut rng),
        Density::Dense => sample(side, 0.85, &mut rng),
        Density::Stripes => patterned(side, |row, _| row % 2 == 0),
        Density::Checkerboard => patterned(side, |row, column| (row + column) % 2 == 0),
    };
    LatticeFixture { lattice, density }
}

fn sample(side: usize, probability: f64, rng: &mut SmallRng) -> Lattice {
    let rows: Vec<Vec<bool>> = (0..side)
        .map(|_| (0..side).map(|_| rng.gen_bool(probability)).collect())
        .collect();
    Lattice::from_rows(rows).expect("generated rows are square")
}

fn patterned(side: usize, occupied: impl Fn(usize, usize) -> bool) -> Lattice {
    let rows: Vec<Vec<bool>> = (0..side)
        .map(|row| (0..side).map(|column| occupied(row, column)).collect())
        .collect();
    Lattice::from_rows(rows).expect("generated rows are square")
}
