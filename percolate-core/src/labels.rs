//! Cluster label maps produced by the labellers.
//!
//! A [`LabelMap`] is the row-major N×N `i32` buffer described by the
//! labelling contract: `0` marks an empty site and occupied sites carry dense
//! labels `1..=K` numbered in order of first appearance along a row-major
//! scan.

use crate::{
    error::LabelMapError,
    lattice::{Lattice, MAX_SIDE, cell_count, transpose_cells},
};

/// Label written to unoccupied sites.
pub const EMPTY_LABEL: i32 = 0;

/// Row-major N×N cluster labels.
///
/// # Examples
/// ```
/// use percolate_core::{Lattice, find_clusters};
///
/// let lattice = Lattice::from_rows(vec![
///     vec![true, false, true],
///     vec![true, false, true],
///     vec![true, true, true],
/// ])?;
/// let labels = find_clusters(&lattice);
/// assert_eq!(labels.cluster_count(), 1);
/// assert_eq!(labels.labels(), &[1, 0, 1, 1, 0, 1, 1, 1, 1]);
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelMap {
    side: usize,
    labels: Vec<i32>,
    cluster_count: usize,
}

impl LabelMap {
    pub(crate) fn from_parts(side: usize, labels: Vec<i32>, cluster_count: usize) -> Self {
        debug_assert_eq!(labels.len(), side * side);
        Self {
            side,
            labels,
            cluster_count,
        }
    }

    /// Rebuilds a label map from a raw row-major buffer.
    ///
    /// Labels must be non-negative and dense, and each new label must be
    /// exactly one more than the largest label seen earlier in the scan.
    /// Connectivity is not re-derived: the buffer is trusted to group cells
    /// that belong together.
    ///
    /// # Errors
    /// Returns [`LabelMapError::SideTooLarge`] when `side` exceeds
    /// [`MAX_SIDE`], [`LabelMapError::LengthMismatch`] when
    /// `labels.len() != side²`, [`LabelMapError::Negative`] for negative labels, and
    /// [`LabelMapError::OutOfOrder`] when a label skips ahead.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{LabelMap, LabelMapError};
    ///
    /// let map = LabelMap::try_from_labels(2, vec![1, 0, 0, 2])?;
    /// assert_eq!(map.cluster_count(), 2);
    ///
    /// let err = LabelMap::try_from_labels(2, vec![2, 0, 0, 1]).expect_err("2 precedes 1");
    /// assert!(matches!(err, LabelMapError::OutOfOrder { index: 0, label: 2, expected: 1 }));
    /// # Ok::<(), LabelMapError>(())
    /// ```
    pub fn try_from_labels(side: usize, labels: Vec<i32>) -> Result<Self, LabelMapError> {
        let expected = cell_count(side).map_err(|_| LabelMapError::SideTooLarge {
            side,
            max: MAX_SIDE,
        })?;
        if labels.len() != expected {
            return Err(LabelMapError::LengthMismatch {
                side,
                expected,
                actual: labels.len(),
            });
        }

        let mut next = 1_i32;
        for (index, &label) in labels.iter().enumerate() {
            if label < EMPTY_LABEL {
                return Err(LabelMapError::Negative { index, label });
            }
            if label > next {
                return Err(LabelMapError::OutOfOrder {
                    index,
                    label,
                    expected: next,
                });
            }
            if label == next {
                next += 1;
            }
        }

        let cluster_count = usize::try_from(next - 1).unwrap_or_default();
        Ok(Self::from_parts(side, labels, cluster_count))
    }

    /// Side length N.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of entries, N².
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` for the 0×0 map.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of clusters K; labels in use are exactly `1..=K`.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Row-major label buffer.
    #[must_use]
    pub fn labels(&self) -> &[i32] {
        &self.labels
    }

    /// Consumes the map and hands the row-major buffer to the caller.
    #[must_use]
    pub fn into_labels(self) -> Vec<i32> {
        self.labels
    }

    /// Label at (`row`, `column`), or `None` outside the grid.
    #[must_use]
    pub fn label_at(&self, row: usize, column: usize) -> Option<i32> {
        if row >= self.side || column >= self.side {
            return None;
        }
        self.labels.get(row * self.side + column).copied()
    }

    /// Iterates over the label rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.labels.chunks(self.side.max(1))
    }

    /// Site counts per cluster; entry `k` holds the size of label `k + 1`.
    #[must_use]
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0_usize; self.cluster_count];
        for &label in &self.labels {
            if let Some(slot) = label_slot(label).and_then(|slot| sizes.get_mut(slot)) {
                *slot += 1;
            }
        }
        sizes
    }

    /// Sites of each cluster as (`row`, `column`) pairs in row-major order;
    /// entry `k` lists the sites of label `k + 1`.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::LabelMap;
    ///
    /// let map = LabelMap::try_from_labels(2, vec![1, 0, 2, 2])?;
    /// assert_eq!(map.cluster_sites(), vec![vec![(0, 0)], vec![(1, 0), (1, 1)]]);
    /// # Ok::<(), percolate_core::LabelMapError>(())
    /// ```
    #[must_use]
    pub fn cluster_sites(&self) -> Vec<Vec<(usize, usize)>> {
        let mut sites = vec![Vec::new(); self.cluster_count];
        for (row, labels) in self.rows().enumerate() {
            for (column, &label) in labels.iter().enumerate() {
                if let Some(cluster) = label_slot(label).and_then(|slot| sites.get_mut(slot)) {
                    cluster.push((row, column));
                }
            }
        }
        sites
    }

    /// Smallest label present in both the top and the bottom row.
    ///
    /// Such a cluster spans the lattice vertically. Returns `None` when no
    /// cluster touches both edges.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::LabelMap;
    ///
    /// let spanning = LabelMap::try_from_labels(2, vec![1, 0, 1, 0])?;
    /// assert_eq!(spanning.spanning_label(), Some(1));
    ///
    /// let blocked = LabelMap::try_from_labels(2, vec![1, 1, 0, 0])?;
    /// assert_eq!(blocked.spanning_label(), None);
    /// # Ok::<(), percolate_core::LabelMapError>(())
    /// ```
    #[must_use]
    pub fn spanning_label(&self) -> Option<i32> {
        let mut rows = self.rows();
        let top = rows.next()?;
        let bottom = rows.last().unwrap_or(top);
        top.iter()
            .copied()
            .filter(|&label| label != EMPTY_LABEL && bottom.contains(&label))
            .min()
    }

    /// Occupancy implied by the labels: a site is occupied iff its label is
    /// non-zero.
    #[must_use]
    pub fn occupancy(&self) -> Lattice {
        let cells = self.labels.iter().map(|&label| label != EMPTY_LABEL).collect();
        Lattice::from_trusted_parts(self.side, cells)
    }

    /// Transposes the map and renumbers clusters so the result follows
    /// first-appearance order along the transposed row-major scan.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let transposed = transpose_cells(&self.labels, self.side);
        let mut renumbered = vec![0_i32; self.cluster_count];
        let mut next = 1_i32;
        let labels = transposed
            .into_iter()
            .map(|label| {
                let Some(slot) = label_slot(label).and_then(|slot| renumbered.get_mut(slot))
                else {
                    return EMPTY_LABEL;
                };
                if *slot == EMPTY_LABEL {
                    *slot = next;
                    next += 1;
                }
                *slot
            })
            .collect();
        Self::from_parts(self.side, labels, self.cluster_count)
    }
}

/// Zero-based slot for a positive label.
fn label_slot(label: i32) -> Option<usize> {
    usize::try_from(label).ok()?.checked_sub(1)
}
