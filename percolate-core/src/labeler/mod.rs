//! Connected-component labeling for occupancy grids.
//!
//! Implements the classic two-stage Hoshen–Kopelman scheme: a single raster
//! scan assigns provisional labels while recording equivalences in a
//! [`DisjointSet`], then a flatten pass rewrites every provisional label to
//! its canonical root. The scan only ever consults the up and left
//! neighbours, which the raster order guarantees are already finalized; the
//! symmetric down/right merges happen when the scan reaches those cells.

mod union_find;

#[cfg(test)]
mod property;

use tracing::{info, instrument};

use crate::{grid::OccupancyGrid, labels::LabelMatrix};

use union_find::DisjointSet;

/// Assigns a canonical cluster label to every occupied cell of `grid`.
///
/// Two cells share a positive label in the returned matrix exactly when a
/// path of occupied, edge-adjacent cells connects them. Empty cells carry
/// [`LabelMatrix::EMPTY`]. Output is fully deterministic: identical grids
/// produce bit-identical matrices.
///
/// # Examples
/// ```
/// use percolate_core::{OccupancyGrid, label};
///
/// // 1 0 1        two clusters: the pair in the left column
/// // 1 0 0        and the isolated corner cell
/// // 0 0 0
/// let grid = OccupancyGrid::new(3, vec![
///     true, false, true,
///     true, false, false,
///     false, false, false,
/// ])?;
/// let labels = label(&grid);
/// assert_eq!(labels.get(0, 0), labels.get(1, 0));
/// assert_ne!(labels.get(0, 0), labels.get(0, 2));
/// assert_eq!(labels.cluster_count(), 2);
/// # Ok::<(), percolate_core::GridError>(())
/// ```
#[must_use]
#[instrument(name = "labeler.label", skip(grid), fields(side = grid.side()))]
pub fn label(grid: &OccupancyGrid) -> LabelMatrix {
    let (mut labels, mut sets) = scan(grid);
    flatten(&mut labels, &mut sets);
    let matrix = LabelMatrix::from_scan(grid.side(), labels);
    info!(
        clusters = matrix.cluster_count(),
        allocated = sets.len(),
        "labeling completed"
    );
    matrix
}

/// Raster pass: provisional labels plus the equivalences recorded on the way.
fn scan(grid: &OccupancyGrid) -> (Vec<usize>, DisjointSet) {
    let side = grid.side();
    let mut labels = vec![LabelMatrix::EMPTY; side * side];
    let mut sets = DisjointSet::with_capacity(side);

    for row in 0..side {
        for col in 0..side {
            if !grid.is_occupied(row, col) {
                continue;
            }
            let up = if row > 0 {
                labels[(row - 1) * side + col]
            } else {
                LabelMatrix::EMPTY
            };
            let left = if col > 0 {
                labels[row * side + col - 1]
            } else {
                LabelMatrix::EMPTY
            };

            labels[row * side + col] = match (up, left) {
                (LabelMatrix::EMPTY, LabelMatrix::EMPTY) => sets.make_set(),
                (id, LabelMatrix::EMPTY) | (LabelMatrix::EMPTY, id) => id,
                (up, left) if up == left => up,
                (up, left) => sets.union(up, left),
            };
        }
    }

    (labels, sets)
}

/// Flatten pass: rewrite every provisional label to its canonical root.
///
/// Mandatory after [`scan`]: a label assigned early in the raster pass can
/// reference an identifier that a later union subsumed.
fn flatten(labels: &mut [usize], sets: &mut DisjointSet) {
    for slot in labels.iter_mut() {
        if *slot != LabelMatrix::EMPTY {
            *slot = sets.find(*slot);
        }
    }
}
