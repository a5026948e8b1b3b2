//! Occupancy grids for site percolation.
//!
//! An [`OccupancyGrid`] is an immutable square boolean matrix describing
//! which lattice sites are occupied. Construction validates the dimensions
//! so the labeler never receives a malformed grid.

use std::num::NonZeroUsize;

use crate::error::GridError;

/// Immutable L×L matrix of occupied sites, stored in row-major order.
///
/// # Examples
/// ```
/// use percolate_core::OccupancyGrid;
///
/// let grid = OccupancyGrid::new(2, vec![true, false, false, true])?;
/// assert_eq!(grid.side(), 2);
/// assert!(grid.is_occupied(0, 0));
/// assert!(!grid.is_occupied(0, 1));
/// assert_eq!(grid.occupied_count(), 2);
/// # Ok::<(), percolate_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    side: NonZeroUsize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Builds a grid from row-major cells.
    ///
    /// # Errors
    /// Returns [`GridError::ZeroSide`] when `side` is zero and
    /// [`GridError::CellCountMismatch`] when `cells.len() != side * side`.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{GridError, OccupancyGrid};
    ///
    /// let err = OccupancyGrid::new(0, Vec::new()).expect_err("zero side must fail");
    /// assert_eq!(err, GridError::ZeroSide);
    /// ```
    pub fn new(side: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let side = NonZeroUsize::new(side).ok_or(GridError::ZeroSide)?;
        let expected = side.get() * side.get();
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                side: side.get(),
                cells: cells.len(),
                expected,
            });
        }
        Ok(Self { side, cells })
    }

    /// Builds a grid from pre-validated parts. The generator uses this path
    /// once the side and cell count are known to be consistent.
    pub(crate) fn from_parts(side: NonZeroUsize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), side.get() * side.get());
        Self { side, cells }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side.get()
    }

    pub(crate) fn side_nonzero(&self) -> NonZeroUsize {
        self.side
    }

    /// Returns whether the cell at `(row, col)` is occupied.
    ///
    /// # Panics
    /// Panics when `row` or `col` is outside `0..side()`.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.side.get() && col < self.side.get(),
            "cell ({row}, {col}) is outside a grid of side {}",
            self.side
        );
        self.cells[row * self.side.get() + col]
    }

    /// Counts the occupied sites.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Returns the row-major cells backing the grid.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn new_rejects_zero_side() {
        let err = OccupancyGrid::new(0, Vec::new()).expect_err("zero side must fail");
        assert_eq!(err, GridError::ZeroSide);
    }

    #[rstest]
    #[case::too_few(2, 3)]
    #[case::too_many(2, 5)]
    fn new_rejects_mismatched_cell_counts(#[case] side: usize, #[case] cells: usize) {
        let err = OccupancyGrid::new(side, vec![false; cells]).expect_err("mismatch must fail");
        assert_eq!(
            err,
            GridError::CellCountMismatch {
                side,
                cells,
                expected: side * side,
            }
        );
    }

    #[test]
    fn accessors_reflect_row_major_layout() {
        let grid = OccupancyGrid::new(2, vec![true, false, true, true]).expect("grid is valid");
        assert_eq!(grid.side(), 2);
        assert!(grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(0, 1));
        assert!(grid.is_occupied(1, 0));
        assert_eq!(grid.occupied_count(), 3);
        assert_eq!(grid.cells(), &[true, false, true, true]);
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn is_occupied_rejects_out_of_bounds_cells() {
        let grid = OccupancyGrid::new(1, vec![true]).expect("grid is valid");
        let _ = grid.is_occupied(0, 1);
    }
}
