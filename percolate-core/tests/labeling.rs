//! Tests for the public labelling API.

mod common;

use common::lattice;
use percolate_core::{
    Algorithm, ClusterStatistics, LabelError, LabelErrorCode, LabelMap, LabelerBuilder, Lattice,
    LatticeError, LatticeErrorCode, MAX_SIDE, find_clusters, find_clusters_bfs, find_clusters_in,
};
use percolate_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
#[case::single_site(&["#"], &[1], 1)]
#[case::single_empty(&["."], &[0], 0)]
#[case::vertical_bar(&[".#.", ".#.", ".#."], &[0, 1, 0, 0, 1, 0, 0, 1, 0], 1)]
#[case::diagonal_is_disconnected(&["#.", ".#"], &[1, 0, 0, 2], 2)]
#[case::u_shape_merges_late(
    &["#.#", "#.#", "###"],
    &[1, 0, 1, 1, 0, 1, 1, 1, 1],
    1
)]
#[case::two_blocks(
    &["##..", "##..", "..##", "..##"],
    &[1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 2, 2, 0, 0, 2, 2],
    2
)]
fn find_clusters_labels_fixtures(
    #[case] rows: &[&str],
    #[case] expected: &[i32],
    #[case] clusters: usize,
) {
    let labels = find_clusters(&lattice(rows));
    assert_eq!(labels.labels(), expected);
    assert_eq!(labels.cluster_count(), clusters);
}

#[rstest]
fn labels_are_numbered_by_first_appearance() {
    // The cluster touching (0, 2) starts first even though it extends
    // further down than the cluster at (1, 0).
    let labels = find_clusters(&lattice(&["..#", "#.#", "#.#"]));
    assert_eq!(labels.labels(), &[0, 0, 1, 2, 0, 1, 2, 0, 1]);
}

#[rstest]
fn empty_lattice_yields_empty_labels() {
    let labels = find_clusters(&Lattice::empty(0).expect("0×0 is valid"));
    assert!(labels.is_empty());
    assert_eq!(labels.cluster_count(), 0);
}

#[rstest]
#[case(Algorithm::UnionFind)]
#[case(Algorithm::BreadthFirst)]
fn labeler_matches_free_functions(#[case] algorithm: Algorithm) {
    let grid = lattice(&["#.##", "#..#", ".#.#", "##.#"]);
    let labeler = LabelerBuilder::new()
        .with_algorithm(algorithm)
        .build()
        .expect("defaults are valid");
    let labels = labeler.label(&grid).expect("lattice fits");
    assert_eq!(labels, find_clusters(&grid));
    assert_eq!(labels, find_clusters_bfs(&grid));
    assert_eq!(labels.cluster_count(), 3);
}

#[rstest]
fn raw_buffers_are_validated() {
    let err = find_clusters_in(&[true; 5], 2).expect_err("5 cells cannot form 2×2");
    assert_eq!(
        err,
        LatticeError::LengthMismatch {
            side: 2,
            expected: 4,
            actual: 5,
        }
    );
    assert_eq!(err.code(), LatticeErrorCode::LengthMismatch);
}

#[rstest]
#[case::one_dimensional(&[4][..], LatticeErrorCode::NotTwoDimensional)]
#[case::three_dimensional(&[2, 2, 1][..], LatticeErrorCode::NotTwoDimensional)]
#[case::rectangular(&[2, 3][..], LatticeErrorCode::NotSquare)]
fn malformed_shapes_are_rejected(#[case] shape: &[usize], #[case] code: LatticeErrorCode) {
    let cells = vec![false; shape.iter().product()];
    let err = Lattice::from_shape(shape, cells).expect_err("shape is malformed");
    assert_eq!(err.code(), code);
}

#[rstest]
fn sides_beyond_label_range_are_rejected() {
    let err = Lattice::empty(MAX_SIDE + 1).expect_err("side overflows i32 labels");
    assert_eq!(err.code(), LatticeErrorCode::SideTooLarge);
}

#[rstest]
fn labeler_wraps_lattice_errors() {
    let labeler = LabelerBuilder::new().build().expect("defaults are valid");
    let err = labeler
        .label_buffer(&[true, false, true], 2)
        .expect_err("three cells are not 2×2");
    assert!(matches!(err, LabelError::Lattice(_)));
    assert_eq!(err.code(), LabelErrorCode::LatticeRejected);
    assert_eq!(err.lattice_code(), Some(LatticeErrorCode::LengthMismatch));
}

#[rstest]
fn label_maps_round_trip_through_validation() {
    let labels = find_clusters(&lattice(&["#.#", "...", "#.#"]));
    let rebuilt = LabelMap::try_from_labels(labels.side(), labels.labels().to_vec())
        .expect("labeller output is canonical");
    assert_eq!(rebuilt, labels);
}

#[rstest]
fn statistics_detect_spanning_clusters() {
    let stats = ClusterStatistics::from_labels(&find_clusters(&lattice(&[
        ".#..", ".##.", "..#.", "..##",
    ])));
    assert!(stats.percolates());
    assert_eq!(stats.largest(), Some(6));
    assert_eq!(stats.cluster_count(), 1);
}

#[rstest]
fn find_clusters_records_span_fields() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        let _ = find_clusters(&lattice(&["#.", ".#"]));
    });

    let span = layer
        .span_named("core.find_clusters")
        .expect("find_clusters span recorded");
    assert_eq!(span.field("side"), Some("2"));
    assert_eq!(span.field("occupied"), Some("2"));
    assert_eq!(span.field("clusters"), Some("2"));
}

#[rstest]
fn oversize_lattices_emit_a_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let labeler = LabelerBuilder::new()
        .with_max_side(2)
        .build()
        .expect("configuration is valid");

    let result = tracing::subscriber::with_default(subscriber, || {
        labeler.label(&Lattice::filled(3).expect("3×3"))
    });

    assert!(matches!(result, Err(LabelError::LatticeTooLarge { .. })));
    let span = layer.span_named("core.label").expect("label span recorded");
    assert_eq!(span.field("algorithm"), Some("union-find"));
    let warnings = layer.events_at(Level::WARN);
    assert!(
        warnings
            .iter()
            .any(|event| event.message() == Some("lattice exceeds configured max_side")),
        "expected an oversize warning, got {warnings:?}"
    );
}
