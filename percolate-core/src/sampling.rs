//! Random site occupation.
//!
//! Each site is occupied independently with probability `p`. Sites are drawn
//! in row-major order so a seeded generator reproduces the same lattice.

use rand::Rng;
use tracing::instrument;

use crate::{
    error::LatticeError,
    lattice::{Lattice, cell_count},
};

impl Lattice {
    /// Samples a `side × side` lattice with site occupation probability
    /// `probability`.
    ///
    /// # Errors
    /// Returns [`LatticeError::InvalidProbability`] when `probability` is not
    /// a finite value in `[0, 1]`, and [`LatticeError::SideTooLarge`] when
    /// `side` exceeds [`crate::MAX_SIDE`].
    ///
    /// # Examples
    /// ```
    /// use percolate_core::Lattice;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let lattice = Lattice::random(16, 0.6, &mut rng)?;
    /// assert_eq!(lattice.len(), 256);
    ///
    /// let mut again = SmallRng::seed_from_u64(7);
    /// assert_eq!(Lattice::random(16, 0.6, &mut again)?, lattice);
    /// # Ok::<(), percolate_core::LatticeError>(())
    /// ```
    #[instrument(name = "core.sample_lattice", err, skip(rng))]
    pub fn random<R: Rng + ?Sized>(
        side: usize,
        probability: f64,
        rng: &mut R,
    ) -> Result<Self, LatticeError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(LatticeError::InvalidProbability { probability });
        }
        let cells = (0..cell_count(side)?)
            .map(|_| rng.gen_bool(probability))
            .collect();
        Ok(Self::from_trusted_parts(side, cells))
    }
}
