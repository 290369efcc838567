//! Per-lattice cluster statistics.
//!
//! Summarises a [`LabelMap`] the way a single percolation trial is reported:
//! cluster count, size distribution, the largest cluster, and whether some
//! cluster spans from the top row to the bottom row.

use crate::labels::LabelMap;

/// The cluster that connects the top and bottom rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanningCluster {
    /// Label of the spanning cluster.
    pub label: i32,
    /// Number of sites it contains.
    pub size: usize,
}

/// Summary statistics for one labelled lattice.
///
/// # Examples
/// ```
/// use percolate_core::{ClusterStatistics, Lattice, find_clusters};
///
/// let lattice = Lattice::from_rows(vec![
///     vec![true, false, false],
///     vec![true, false, true],
///     vec![true, false, false],
/// ])?;
/// let stats = ClusterStatistics::from_labels(&find_clusters(&lattice));
/// assert_eq!(stats.cluster_count(), 2);
/// assert_eq!(stats.sizes(), &[3, 1]);
/// assert_eq!(stats.largest(), Some(3));
/// assert_eq!(stats.spanning().map(|cluster| cluster.size), Some(3));
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterStatistics {
    side: usize,
    occupied: usize,
    sizes: Vec<usize>,
    spanning: Option<SpanningCluster>,
}

impl ClusterStatistics {
    /// Computes statistics for `labels`.
    #[must_use]
    pub fn from_labels(labels: &LabelMap) -> Self {
        let sizes = labels.cluster_sizes();
        let occupied = sizes.iter().sum();
        let spanning = labels.spanning_label().and_then(|label| {
            let slot = usize::try_from(label).ok()?.checked_sub(1)?;
            sizes
                .get(slot)
                .map(|&size| SpanningCluster { label, size })
        });
        Self {
            side: labels.side(),
            occupied,
            sizes,
            spanning,
        }
    }

    /// Side length of the lattice.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of occupied sites.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Number of clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.sizes.len()
    }

    /// Cluster sizes indexed by `label - 1`.
    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Size of the largest cluster, if any.
    #[must_use]
    pub fn largest(&self) -> Option<usize> {
        self.sizes.iter().copied().max()
    }

    /// Mean cluster size; `0.0` when there are no clusters.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "Mean size is a reporting statistic; exactness is not required"
    )]
    pub fn mean_size(&self) -> f64 {
        if self.sizes.is_empty() {
            return 0.0;
        }
        self.occupied as f64 / self.sizes.len() as f64
    }

    /// The spanning cluster with the smallest label, if one exists.
    #[must_use]
    pub fn spanning(&self) -> Option<SpanningCluster> {
        self.spanning
    }

    /// Returns `true` when some cluster connects the top and bottom rows.
    #[must_use]
    pub fn percolates(&self) -> bool {
        self.spanning.is_some()
    }
}
