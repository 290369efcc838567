//! Benchmark support crate for percolate.
//!
//! Provides seeded lattice generation and parameter types shared by the
//! Criterion benchmarks for cluster labelling and the disjoint-set forest.

pub mod error;
pub mod lattices;
pub mod params;
