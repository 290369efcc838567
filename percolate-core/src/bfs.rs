//! Breadth-first flood-fill labelling.
//!
//! Serves as a trusted reference for the union-find labeller: it visits
//! unlabelled occupied sites in row-major order and floods each cluster with a
//! FIFO queue, so clusters are numbered in the same first-appearance order.

use std::collections::VecDeque;

use tracing::{Span, field, instrument};

use crate::{
    labels::{EMPTY_LABEL, LabelMap},
    lattice::Lattice,
};

/// Labels the 4-connected clusters of `lattice` by breadth-first search.
///
/// The output is identical to [`crate::find_clusters`] for every lattice.
///
/// # Examples
/// ```
/// use percolate_core::{Lattice, find_clusters, find_clusters_bfs};
///
/// let lattice = Lattice::from_rows(vec![
///     vec![true, true, false],
///     vec![false, true, false],
///     vec![true, false, true],
/// ])?;
/// assert_eq!(find_clusters_bfs(&lattice), find_clusters(&lattice));
/// # Ok::<(), percolate_core::LatticeError>(())
/// ```
#[must_use]
#[instrument(
    name = "core.find_clusters_bfs",
    skip(lattice),
    fields(side = lattice.side(), clusters = field::Empty),
)]
pub fn find_clusters_bfs(lattice: &Lattice) -> LabelMap {
    let side = lattice.side();
    let cells = lattice.cells();
    let mut labels = vec![EMPTY_LABEL; cells.len()];
    let mut queue = VecDeque::new();
    let mut next_label = 1_i32;

    for start in 0..cells.len() {
        if !cells[start] || labels[start] != EMPTY_LABEL {
            continue;
        }
        labels[start] = next_label;
        queue.push_back(start);
        while let Some(site) = queue.pop_front() {
            for neighbour in neighbours(site, side) {
                if cells[neighbour] && labels[neighbour] == EMPTY_LABEL {
                    labels[neighbour] = next_label;
                    queue.push_back(neighbour);
                }
            }
        }
        next_label += 1;
    }

    let clusters = usize::try_from(next_label - 1).unwrap_or_default();
    Span::current().record("clusters", clusters);
    LabelMap::from_parts(side, labels, clusters)
}

/// North, south, west and east neighbours of `site` that lie on the lattice.
fn neighbours(site: usize, side: usize) -> impl Iterator<Item = usize> {
    let row = site / side;
    let column = site % side;
    [
        (row > 0).then(|| site - side),
        (row + 1 < side).then(|| site + side),
        (column > 0).then(|| site - 1),
        (column + 1 < side).then(|| site + 1),
    ]
    .into_iter()
    .flatten()
}
