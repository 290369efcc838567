//! Property-based tests for the cluster labellers.
//!
//! Checks the union-find labeller against the breadth-first oracle on
//! generated lattices, verifies the labelling contract directly (empty sites,
//! dense first-appearance labels, buffer length, determinism), and covers the
//! transposition, relabelling and forest-consistency laws.

mod laws;
mod oracle;
mod strategies;
mod tests;
mod types;
