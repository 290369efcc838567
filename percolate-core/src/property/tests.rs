//! Property runners and seeded regression cases for the labellers.

use proptest::prelude::*;

use crate::test_utils::suite_proptest_config;

use super::laws::{
    run_forest_consistency_property, run_relabel_idempotence_property, run_transpose_property,
};
use super::oracle::run_oracle_equivalence_property;
use super::strategies::{generate_fixture, lattice_fixture_strategy};
use super::types::Density;

/// Expands to an rstest function running `$runner` over a fixed grid of
/// densities, sides and seeds.
macro_rules! seeded_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::sparse_small(Density::Sparse, 5, 42)]
        #[case::sparse_large(Density::Sparse, 23, 999)]
        #[case::critical_small(Density::Critical, 7, 42)]
        #[case::critical_large(Density::Critical, 24, 7777)]
        #[case::dense_small(Density::Dense, 6, 42)]
        #[case::dense_large(Density::Dense, 21, 999)]
        #[case::stripes(Density::Stripes, 9, 0)]
        #[case::checkerboard(Density::Checkerboard, 8, 0)]
        #[case::single_site(Density::Critical, 1, 3)]
        #[case::empty(Density::Dense, 0, 1)]
        fn $test_name(#[case] density: Density, #[case] side: usize, #[case] seed: u64) {
            let fixture = generate_fixture(density, side, seed);
            $runner(&fixture).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn union_find_matches_breadth_first(fixture in lattice_fixture_strategy()) {
        run_oracle_equivalence_property(&fixture)?;
    }

    #[test]
    fn labelling_commutes_with_transpose(fixture in lattice_fixture_strategy()) {
        run_transpose_property(&fixture)?;
    }

    #[test]
    fn relabelling_is_idempotent(fixture in lattice_fixture_strategy()) {
        run_relabel_idempotence_property(&fixture)?;
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn forest_roots_match_clusters(fixture in lattice_fixture_strategy()) {
        run_forest_consistency_property(&fixture)?;
    }
}

seeded_property_test!(
    oracle_equivalence_seeded,
    run_oracle_equivalence_property,
    "union-find must match breadth-first"
);

seeded_property_test!(
    transpose_seeded,
    run_transpose_property,
    "labelling must commute with transpose"
);

seeded_property_test!(
    relabel_seeded,
    run_relabel_idempotence_property,
    "relabelling must be idempotent"
);

seeded_property_test!(
    forest_consistency_seeded,
    run_forest_consistency_property,
    "forest roots must match clusters"
);

#[test]
fn stripes_yield_one_cluster_per_full_row() {
    let fixture = generate_fixture(Density::Stripes, 9, 0);
    let labels = crate::find_clusters(&fixture.lattice);
    assert_eq!(labels.cluster_count(), 5);
}

#[test]
fn checkerboard_isolates_every_site() {
    let fixture = generate_fixture(Density::Checkerboard, 8, 0);
    let labels = crate::find_clusters(&fixture.lattice);
    assert_eq!(labels.cluster_count(), fixture.lattice.occupied_count());
    assert_eq!(labels.cluster_count(), 32);
}
