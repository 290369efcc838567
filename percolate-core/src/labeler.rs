//! Two-pass union-find cluster labelling.
//!
//! Pass one scans the lattice in row-major order and unites every occupied
//! site with its occupied west and north neighbours; east and south links are
//! picked up when the scan reaches those sites. Pass two resolves each
//! occupied site's root and hands out dense labels in order of first
//! appearance, using a root-indexed table rather than a map.

use tracing::{Span, field, instrument};

use crate::{
    error::LatticeError,
    forest::DisjointForest,
    labels::{EMPTY_LABEL, LabelMap},
    lattice::Lattice,
};

const UNASSIGNED: i32 = -1;

/// Labels the 4-connected clusters of `lattice`.
///
/// # Examples
/// ```
/// use percolate_core::{Lattice, find_clusters};
///
/// let lattice = Lattice::from_rows(vec![
///     vec![true, false, true],
///     vec![false, true, false],
///     vec![true, false, true],
/// ])?;
/// let labels = find_clusters(&lattice);
/// assert_eq!(labels.labels(), &[1, 0, 2, 0, 3, 0, 4, 0, 5]);
/// assert_eq!(labels.cluster_count(), 5);
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[must_use]
#[instrument(
    name = "core.find_clusters",
    skip(lattice),
    fields(side = lattice.side(), occupied = field::Empty, clusters = field::Empty),
)]
pub fn find_clusters(lattice: &Lattice) -> LabelMap {
    let side = lattice.side();
    let cells = lattice.cells();
    if cells.is_empty() {
        Span::current().record("clusters", 0);
        return LabelMap::from_parts(side, Vec::new(), 0);
    }

    let mut forest = DisjointForest::new(cells.len());
    merge_neighbours(&mut forest, cells, side);
    let (labels, clusters) = assign_labels(&mut forest, cells);

    let span = Span::current();
    span.record("occupied", lattice.occupied_count());
    span.record("clusters", clusters);
    LabelMap::from_parts(side, labels, clusters)
}

/// Labels a raw row-major buffer of `side²` cells.
///
/// This is the entry point for callers holding a flat buffer; the returned
/// vector has the same layout.
///
/// # Errors
/// Returns [`LatticeError::LengthMismatch`] when `cells.len() != side²` and
/// [`LatticeError::SideTooLarge`] when `side²` would overflow 32-bit labels.
///
/// # Examples
/// ```
/// use percolate_core::find_clusters_in;
///
/// let labels = find_clusters_in(&[true, false, false, true], 2)?;
/// assert_eq!(labels, vec![1, 0, 0, 2]);
/// assert!(find_clusters_in(&[], 0)?.is_empty());
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
pub fn find_clusters_in(cells: &[bool], side: usize) -> Result<Vec<i32>, LatticeError> {
    let lattice = Lattice::new(side, cells.to_vec())?;
    Ok(find_clusters(&lattice).into_labels())
}

/// Pass one: unite each occupied site with its occupied west and north
/// neighbours. The 0×0 lattice has no rows and leaves the forest untouched.
pub(crate) fn merge_neighbours(forest: &mut DisjointForest, cells: &[bool], side: usize) {
    for (row, row_cells) in cells.chunks(side.max(1)).enumerate() {
        for (column, &occupied) in row_cells.iter().enumerate() {
            if !occupied {
                continue;
            }
            let current = row * side + column;
            if column > 0 && row_cells[column - 1] {
                forest.unite(current, current - 1);
            }
            if row > 0 && cells[current - side] {
                forest.unite(current, current - side);
            }
        }
    }
}

/// Pass two: map every root to the next free label on first sight.
fn assign_labels(forest: &mut DisjointForest, cells: &[bool]) -> (Vec<i32>, usize) {
    let mut root_labels = vec![UNASSIGNED; cells.len()];
    let mut labels = vec![EMPTY_LABEL; cells.len()];
    let mut next_label = 1_i32;

    for (index, &occupied) in cells.iter().enumerate() {
        if !occupied {
            continue;
        }
        let root = forest.find(index);
        let slot = &mut root_labels[root];
        if *slot == UNASSIGNED {
            *slot = next_label;
            next_label += 1;
        }
        labels[index] = *slot;
    }

    let clusters = usize::try_from(next_label - 1).unwrap_or_default();
    (labels, clusters)
}
