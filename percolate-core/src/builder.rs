//! Builder utilities for configuring cluster labelling.
//!
//! Exposes the algorithm selection surface and the validation applied before a
//! [`Labeler`] is constructed.

use crate::{Result, engine::Labeler, error::LabelError, lattice::MAX_SIDE};

/// Selects how a [`Labeler`] finds clusters.
///
/// Both algorithms produce identical label maps; they differ only in cost
/// profile.
///
/// # Examples
/// ```
/// use percolate_core::Algorithm;
///
/// assert_eq!(Algorithm::default(), Algorithm::UnionFind);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Two-pass disjoint-set labelling.
    #[default]
    UnionFind,
    /// Breadth-first flood fill.
    BreadthFirst,
}

impl Algorithm {
    /// Stable lowercase name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnionFind => "union-find",
            Self::BreadthFirst => "breadth-first",
        }
    }
}

/// Configures and constructs [`Labeler`] instances.
///
/// # Examples
/// ```
/// use percolate_core::{Algorithm, LabelerBuilder};
///
/// let labeler = LabelerBuilder::new()
///     .with_algorithm(Algorithm::BreadthFirst)
///     .with_max_side(512)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(labeler.algorithm(), Algorithm::BreadthFirst);
/// assert_eq!(labeler.max_side(), 512);
/// ```
#[derive(Debug, Clone)]
pub struct LabelerBuilder {
    algorithm: Algorithm,
    max_side: usize,
}

impl Default for LabelerBuilder {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::UnionFind,
            max_side: MAX_SIDE,
        }
    }
}

impl LabelerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{Algorithm, LabelerBuilder, MAX_SIDE};
    ///
    /// let builder = LabelerBuilder::new();
    /// assert_eq!(builder.algorithm(), Algorithm::UnionFind);
    /// assert_eq!(builder.max_side(), MAX_SIDE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the labelling algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Caps the side of lattices the labeller will accept.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::LabelerBuilder;
    ///
    /// let builder = LabelerBuilder::new().with_max_side(64);
    /// assert_eq!(builder.max_side(), 64);
    /// ```
    #[must_use]
    pub fn with_max_side(mut self, max_side: usize) -> Self {
        self.max_side = max_side;
        self
    }

    /// Returns the configured maximum side.
    #[must_use]
    pub fn max_side(&self) -> usize {
        self.max_side
    }

    /// Validates the configuration and constructs a [`Labeler`].
    ///
    /// # Errors
    /// Returns [`LabelError::InvalidMaxSide`] when `max_side` is zero or
    /// exceeds [`MAX_SIDE`].
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{LabelError, LabelerBuilder};
    ///
    /// let err = LabelerBuilder::new().with_max_side(0).build().expect_err("zero is invalid");
    /// assert!(matches!(err, LabelError::InvalidMaxSide { got: 0, .. }));
    /// ```
    pub fn build(self) -> Result<Labeler> {
        if self.max_side == 0 || self.max_side > MAX_SIDE {
            return Err(LabelError::InvalidMaxSide {
                got: self.max_side,
                max: MAX_SIDE,
            });
        }
        Ok(Labeler::new(self.algorithm, self.max_side))
    }
}
