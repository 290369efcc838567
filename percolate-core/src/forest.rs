//! Disjoint-set forest used by the cluster labeller.
//!
//! Parent links and ranks live in two parallel vectors indexed by cell. `find`
//! is iterative: it walks to the root and then relinks every visited node
//! directly to it, so stack depth stays constant regardless of how long a chain
//! the unions produced. Ranks are only meaningful at roots.

/// A partition of `{0, …, len - 1}` supporting `find` and `unite`.
///
/// # Examples
/// ```
/// use percolate_core::DisjointForest;
///
/// let mut forest = DisjointForest::new(4);
/// assert!(forest.unite(0, 1));
/// assert!(forest.unite(2, 3));
/// assert!(!forest.unite(1, 0));
/// assert_eq!(forest.find(1), forest.find(0));
/// assert_ne!(forest.find(0), forest.find(3));
/// assert_eq!(forest.set_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointForest {
    /// Creates a forest of `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// Number of nodes tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns `true` when `node` is the representative of its set.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn is_root(&self, node: usize) -> bool {
        self.parent_of(node) == node
    }

    /// Rank of `node` if it is a root, `None` otherwise.
    ///
    /// Non-root ranks are left stale by unions and path compression, so they
    /// are never reported.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[must_use]
    pub fn rank_of(&self, node: usize) -> Option<u8> {
        self.is_root(node).then(|| self.rank[node])
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way to the root is relinked to point at the
    /// root directly.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = self.parent_of(node);
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On equal
    /// ranks the root of `right` goes under the root of `left`, whose rank
    /// grows by one. Returns `false` when both nodes already shared a set.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    pub fn unite(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            if left_rank == right_rank {
                self.rank[left_root] = left_rank.saturating_add(1);
            }
        }
        self.sets -= 1;
        true
    }

    fn parent_of(&self, node: usize) -> usize {
        match self.parent.get(node) {
            Some(&parent) => parent,
            None => panic!(
                "node {node} is out of range for a forest of {} nodes",
                self.parent.len()
            ),
        }
    }

    #[cfg(test)]
    pub(crate) fn raw_parent(&self, node: usize) -> usize {
        self.parent[node]
    }
}
