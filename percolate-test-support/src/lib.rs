//! Shared test utilities used across percolate crates.

pub mod ci;
pub mod tracing;
