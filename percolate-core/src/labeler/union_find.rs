//! Union-find (disjoint set union) over cluster identifiers.
//!
//! The labeler allocates a fresh identifier for every cluster seed it meets
//! during the raster scan and merges identifiers whenever a cell bridges two
//! provisional clusters. This module tracks those equivalence classes.
//!
//! Identifiers start at 1; label 0 is reserved for empty cells and is never
//! allocated here. Passing an identifier that was never produced by
//! [`DisjointSet::make_set`] is a programmer error and panics.

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a fresh self-parented identifier.
    pub(super) fn make_set(&mut self) -> usize {
        let id = self.parent.len() + 1;
        self.parent.push(id);
        id
    }

    /// Follows parent links to the representative root, repointing every
    /// visited node directly at the root so repeat lookups stay O(1).
    pub(super) fn find(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root - 1] != root {
            root = self.parent[root - 1];
        }

        while self.parent[id - 1] != id {
            let next = self.parent[id - 1];
            self.parent[id - 1] = root;
            id = next;
        }

        root
    }

    /// Merges the classes of `a` and `b` and returns the surviving root.
    ///
    /// The numerically smaller root wins, which keeps output deterministic
    /// for identical inputs regardless of merge order.
    pub(super) fn union(&mut self, a: usize, b: usize) -> usize {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return root_a;
        }
        let (winner, loser) = if root_a < root_b {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[loser - 1] = winner;
        winner
    }

    /// Number of identifiers allocated so far.
    pub(super) fn len(&self) -> usize {
        self.parent.len()
    }
}
