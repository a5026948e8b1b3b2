//! Label matrices produced by the cluster labeler.
//!
//! A [`LabelMatrix`] mirrors the shape of its source grid. Empty cells carry
//! [`LabelMatrix::EMPTY`]; occupied cells carry the canonical identifier of
//! the cluster they belong to. Two cells share a positive label exactly when
//! they are connected through occupied 4-neighbour cells.

use std::collections::HashSet;

/// Canonical cluster labels for an L×L grid, stored in row-major order.
///
/// # Examples
/// ```
/// use percolate_core::{OccupancyGrid, label};
///
/// let grid = OccupancyGrid::new(2, vec![true, true, false, false])?;
/// let labels = label(&grid);
/// assert_eq!(labels.get(0, 0), labels.get(0, 1));
/// assert_eq!(labels.get(1, 0), percolate_core::LabelMatrix::EMPTY);
/// assert_eq!(labels.cluster_count(), 1);
/// # Ok::<(), percolate_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMatrix {
    side: usize,
    labels: Vec<usize>,
    cluster_count: usize,
}

impl LabelMatrix {
    /// Label value carried by empty (unoccupied) cells.
    pub const EMPTY: usize = 0;

    /// Builds a matrix from the flattened scan output, counting the distinct
    /// positive labels once so later queries are O(1).
    pub(crate) fn from_scan(side: usize, labels: Vec<usize>) -> Self {
        debug_assert_eq!(labels.len(), side * side);
        let cluster_count = labels
            .iter()
            .filter(|&&label| label != Self::EMPTY)
            .collect::<HashSet<_>>()
            .len();
        Self {
            side,
            labels,
            cluster_count,
        }
    }

    /// Returns the side length of the matrix.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the label at `(row, col)`.
    ///
    /// # Panics
    /// Panics when `row` or `col` is outside `0..side()`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) is outside a matrix of side {}",
            self.side
        );
        self.labels[row * self.side + col]
    }

    /// Counts the distinct clusters present in the matrix.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{OccupancyGrid, label};
    ///
    /// let grid = OccupancyGrid::new(2, vec![false; 4])?;
    /// assert_eq!(label(&grid).cluster_count(), 0);
    /// # Ok::<(), percolate_core::GridError>(())
    /// ```
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Returns the row-major labels backing the matrix.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}
