//! Fixture types for labeller property tests.

use crate::Lattice;

/// Occupation regime used when sampling a lattice.
///
/// Densities bracket the square-lattice site percolation threshold
/// (p ≈ 0.5927) so fixtures cover fragmented, critical and saturated grids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Density {
    /// Mostly isolated sites (p = 0.2).
    Sparse,
    /// Near the percolation threshold (p = 0.59).
    Critical,
    /// Mostly one large cluster (p = 0.85).
    Dense,
    /// Alternating full and empty rows, one cluster per full row.
    Stripes,
    /// Alternating sites, every occupied site its own cluster.
    Checkerboard,
}

impl Density {
    pub(super) const ALL: [Self; 5] = [
        Self::Sparse,
        Self::Critical,
        Self::Dense,
        Self::Stripes,
        Self::Checkerboard,
    ];
}

/// Lattice fixture together with the regime that produced it.
#[derive(Clone, Debug)]
pub(super) struct LatticeFixture {
    /// The generated lattice.
    pub lattice: Lattice,
    /// Regime used during generation.
    pub density: Density,
}
