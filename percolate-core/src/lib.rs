//! Percolate core library.
//!
//! Labels the 4-connected clusters of occupied sites in a square lattice. The
//! primary entry point is [`find_clusters`], a two-pass union-find labeller;
//! [`find_clusters_bfs`] is a breadth-first reference with identical output.
//! Labels are dense, `1..=K`, and numbered in row-major order of each
//! cluster's first site; empty sites are labelled `0`.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bfs;
mod builder;
mod engine;
mod error;
mod forest;
mod labeler;
mod labels;
mod lattice;
#[cfg(feature = "sampling")]
#[cfg_attr(docsrs, doc(cfg(feature = "sampling")))]
mod sampling;
mod stats;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    bfs::find_clusters_bfs,
    builder::{Algorithm, LabelerBuilder},
    engine::Labeler,
    error::{
        LabelError, LabelErrorCode, LabelMapError, LatticeError, LatticeErrorCode, Result,
    },
    forest::DisjointForest,
    labeler::{find_clusters, find_clusters_in},
    labels::{EMPTY_LABEL, LabelMap},
    lattice::{Lattice, MAX_SIDE},
    stats::{ClusterStatistics, SpanningCluster},
};
