//! Benchmark parameter types.

use std::fmt;

/// Parameters for a labelling benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelBenchParams {
    /// Lattice side.
    pub side: usize,
    /// Site occupation probability.
    pub probability: f64,
}

impl fmt::Display for LabelBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={},p={:.2}", self.side, self.probability)
    }
}

/// Parameters for a forest benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForestBenchParams {
    /// Number of nodes in the forest.
    pub node_count: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}
