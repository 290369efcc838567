//! Oracle comparison for the union-find labeller.
//!
//! The breadth-first labeller numbers clusters in the same first-appearance
//! order, so the two label maps must agree bit-for-bit (P1–P6).

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EMPTY_LABEL, LabelMap, find_clusters, find_clusters_bfs};

use super::types::LatticeFixture;

/// Compares `find_clusters` with the breadth-first oracle and checks the
/// labelling contract on the union-find output.
pub(super) fn run_oracle_equivalence_property(fixture: &LatticeFixture) -> TestCaseResult {
    let labels = find_clusters(&fixture.lattice);
    let oracle = find_clusters_bfs(&fixture.lattice);

    if labels != oracle {
        return Err(TestCaseError::fail(format!(
            "union-find and breadth-first labels differ \
             (density={:?}, side={}, union_find={:?}, bfs={:?})",
            fixture.density,
            fixture.lattice.side(),
            labels.labels(),
            oracle.labels(),
        )));
    }

    validate_contract(fixture, &labels)?;

    let again = find_clusters(&fixture.lattice);
    if again != labels {
        return Err(TestCaseError::fail(format!(
            "labelling is not deterministic (density={:?}, side={})",
            fixture.density,
            fixture.lattice.side(),
        )));
    }
    Ok(())
}

/// Checks buffer length, empty-site labels and dense first-appearance order.
fn validate_contract(fixture: &LatticeFixture, labels: &LabelMap) -> TestCaseResult {
    let side = fixture.lattice.side();
    if labels.len() != side * side || labels.side() != side {
        return Err(TestCaseError::fail(format!(
            "label buffer has {} entries for side {side}",
            labels.len(),
        )));
    }

    let mut next = 1_i32;
    for (index, (&label, &occupied)) in labels
        .labels()
        .iter()
        .zip(fixture.lattice.cells())
        .enumerate()
    {
        if occupied == (label == EMPTY_LABEL) {
            return Err(TestCaseError::fail(format!(
                "site {index} has occupancy {occupied} but label {label}",
            )));
        }
        if label > next {
            return Err(TestCaseError::fail(format!(
                "label {label} at site {index} skips ahead of {next}",
            )));
        }
        if label == next {
            next += 1;
        }
    }

    let observed = usize::try_from(next - 1).unwrap_or_default();
    if observed != labels.cluster_count() {
        return Err(TestCaseError::fail(format!(
            "cluster_count {} disagrees with {observed} distinct labels",
            labels.cluster_count(),
        )));
    }
    Ok(())
}
