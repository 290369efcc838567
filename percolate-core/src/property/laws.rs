//! Algebraic laws of the labelling.
//!
//! - Transposing the lattice transposes the labels, up to renumbering in the
//!   transposed scan order (P7).
//! - Relabelling the occupancy implied by a label map reproduces the map (L1).
//! - After the merge pass, two sites share a root iff they share a cluster
//!   (L2).

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointForest, find_clusters, find_clusters_bfs, labeler::merge_neighbours};

use super::types::LatticeFixture;

/// Labels of the transposed lattice equal the canonically renumbered
/// transpose of the labels.
pub(super) fn run_transpose_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labels = find_clusters(&fixture.lattice);
    let transposed = find_clusters(&fixture.lattice.transpose());
    let expected = labels.transpose();
    if transposed != expected {
        return Err(TestCaseError::fail(format!(
            "transposed labelling mismatch (density={:?}, side={}, got={:?}, expected={:?})",
            fixture.density,
            fixture.lattice.side(),
            transposed.labels(),
            expected.labels(),
        )));
    }
    Ok(())
}

/// Feeding `label != 0` back through the labeller yields the same map.
pub(super) fn run_relabel_idempotence_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labels = find_clusters(&fixture.lattice);
    let relabelled = find_clusters(&labels.occupancy());
    if relabelled != labels {
        return Err(TestCaseError::fail(format!(
            "relabelling changed the partition (density={:?}, side={})",
            fixture.density,
            fixture.lattice.side(),
        )));
    }
    Ok(())
}

/// Roots after the merge pass agree with the oracle's components.
pub(super) fn run_forest_consistency_property(fixture: &LatticeFixture) -> TestCaseResult {
    let lattice = &fixture.lattice;
    let oracle = find_clusters_bfs(lattice);
    let mut forest = DisjointForest::new(lattice.len());
    merge_neighbours(&mut forest, lattice.cells(), lattice.side());

    let occupied: Vec<usize> = lattice
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(index, &cell)| cell.then_some(index))
        .collect();
    let expected_sets = oracle.cluster_count() + (lattice.len() - occupied.len());
    if forest.set_count() != expected_sets {
        return Err(TestCaseError::fail(format!(
            "forest holds {} sets but expected {expected_sets}",
            forest.set_count(),
        )));
    }

    let oracle_labels = oracle.labels();
    for (position, &left) in occupied.iter().enumerate() {
        for &right in occupied.iter().skip(position + 1) {
            let same_root = forest.find(left) == forest.find(right);
            let same_cluster = oracle_labels[left] == oracle_labels[right];
            if same_root != same_cluster {
                return Err(TestCaseError::fail(format!(
                    "sites {left} and {right}: same_root={same_root}, same_cluster={same_cluster}",
                )));
            }
        }
    }
    Ok(())
}
