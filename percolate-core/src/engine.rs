//! Configured entry point for cluster labelling.
//!
//! Provides the [`Labeler`] runtime, which enforces the configured size limit
//! and dispatches to the selected algorithm.

use tracing::{debug, instrument, warn};

use crate::{
    Result,
    bfs::find_clusters_bfs,
    builder::Algorithm,
    error::LabelError,
    labeler::find_clusters,
    labels::LabelMap,
    lattice::Lattice,
};

/// Labels lattices with a fixed algorithm and size limit.
///
/// # Examples
/// ```
/// use percolate_core::{Lattice, LabelerBuilder};
///
/// let labeler = LabelerBuilder::new().build().expect("defaults are valid");
/// let lattice = Lattice::from_rows(vec![vec![true, true], vec![false, true]])?;
/// let labels = labeler.label(&lattice).expect("lattice fits");
/// assert_eq!(labels.labels(), &[1, 1, 0, 1]);
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Labeler {
    algorithm: Algorithm,
    max_side: usize,
}

impl Labeler {
    pub(crate) fn new(algorithm: Algorithm, max_side: usize) -> Self {
        Self {
            algorithm,
            max_side,
        }
    }

    /// Returns the algorithm used by [`Self::label`].
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the largest side accepted by [`Self::label`].
    #[must_use]
    pub fn max_side(&self) -> usize {
        self.max_side
    }

    /// Labels the clusters of `lattice`.
    ///
    /// # Errors
    /// Returns [`LabelError::LatticeTooLarge`] when the lattice side exceeds
    /// the configured maximum.
    #[instrument(
        name = "core.label",
        err,
        skip(self, lattice),
        fields(side = lattice.side(), algorithm = self.algorithm.as_str()),
    )]
    pub fn label(&self, lattice: &Lattice) -> Result<LabelMap> {
        if lattice.side() > self.max_side {
            warn!(
                side = lattice.side(),
                max_side = self.max_side,
                "lattice exceeds configured max_side"
            );
            return Err(LabelError::LatticeTooLarge {
                side: lattice.side(),
                max_side: self.max_side,
            });
        }

        let labels = match self.algorithm {
            Algorithm::UnionFind => find_clusters(lattice),
            Algorithm::BreadthFirst => find_clusters_bfs(lattice),
        };
        debug!(clusters = labels.cluster_count(), "labelling completed");
        Ok(labels)
    }

    /// Validates a raw row-major buffer and labels it.
    ///
    /// # Errors
    /// Returns [`LabelError::Lattice`] when the buffer does not describe a
    /// `side × side` lattice, and the errors of [`Self::label`] otherwise.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{LabelError, LabelerBuilder, LatticeErrorCode};
    ///
    /// let labeler = LabelerBuilder::new().build().expect("defaults are valid");
    /// let err = labeler.label_buffer(&[true; 3], 2).expect_err("three cells are not 2×2");
    /// assert_eq!(err.lattice_code(), Some(LatticeErrorCode::LengthMismatch));
    /// ```
    pub fn label_buffer(&self, cells: &[bool], side: usize) -> Result<LabelMap> {
        let lattice = Lattice::new(side, cells.to_vec())?;
        self.label(&lattice)
    }
}
