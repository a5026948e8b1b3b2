//! Property-based tests for the cluster labeler.
//!
//! Verifies the raster-scan labeler against a brute-force flood-fill oracle
//! across randomly generated grids spanning several sizes and densities. The
//! oracle computes connected components under 4-adjacency directly, without
//! union-find, so the two implementations share no code paths.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{OccupancyGrid, label};

/// Largest grid side exercised by the properties. Kept modest so the
/// quadratic oracle stays fast under proptest's case counts.
const MAX_SIDE: usize = 24;

/// Generates grids across the full density range, including the degenerate
/// all-empty and all-occupied extremes.
fn grid_strategy() -> impl Strategy<Value = OccupancyGrid> {
    (1..=MAX_SIDE, any::<u64>(), 0u8..=10).prop_map(|(side, seed, density)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let probability = f64::from(density) / 10.0;
        let cells = (0..side * side)
            .map(|_| rng.gen_range(0.0..1.0) < probability)
            .collect();
        OccupancyGrid::new(side, cells).expect("generated cell count matches the side")
    })
}

/// Flood-fill oracle: assigns each occupied cell a component id via an
/// iterative worklist traversal. Component ids are arbitrary but consistent.
fn flood_components(grid: &OccupancyGrid) -> Vec<usize> {
    let side = grid.side();
    let mut components = vec![0usize; side * side];
    let mut next = 0usize;

    for start in 0..side * side {
        if !grid.cells()[start] || components[start] != 0 {
            continue;
        }
        next += 1;
        components[start] = next;
        let mut queue = vec![start];
        while let Some(cell) = queue.pop() {
            let (row, col) = (cell / side, cell % side);
            let mut visit = |neighbour: usize| {
                if grid.cells()[neighbour] && components[neighbour] == 0 {
                    components[neighbour] = next;
                    queue.push(neighbour);
                }
            };
            if row > 0 {
                visit(cell - side);
            }
            if row + 1 < side {
                visit(cell + side);
            }
            if col > 0 {
                visit(cell - 1);
            }
            if col + 1 < side {
                visit(cell + 1);
            }
        }
    }

    components
}

proptest! {
    /// Central correctness property: the labeler's partition of occupied
    /// cells matches the flood-fill oracle's partition exactly.
    #[test]
    fn labels_partition_cells_like_flood_fill(grid in grid_strategy()) {
        let labels = label(&grid);
        let oracle = flood_components(&grid);

        for (cell, &occupied) in grid.cells().iter().enumerate() {
            prop_assert_eq!(labels.labels()[cell] != 0, occupied);
        }

        let cells = grid.side() * grid.side();
        for a in 0..cells {
            if !grid.cells()[a] {
                continue;
            }
            for b in (a + 1)..cells {
                if !grid.cells()[b] {
                    continue;
                }
                prop_assert_eq!(
                    labels.labels()[a] == labels.labels()[b],
                    oracle[a] == oracle[b],
                    "cells {} and {} disagree with the oracle",
                    a,
                    b
                );
            }
        }
    }

    /// Distinct-cluster counts agree with the oracle.
    #[test]
    fn cluster_count_matches_flood_fill(grid in grid_strategy()) {
        let labels = label(&grid);
        let oracle_count = flood_components(&grid)
            .iter()
            .copied()
            .max()
            .unwrap_or(0);
        prop_assert_eq!(labels.cluster_count(), oracle_count);
    }

    /// Bit-identical grids produce bit-identical label matrices.
    #[test]
    fn labeling_is_deterministic(grid in grid_strategy()) {
        prop_assert_eq!(label(&grid), label(&grid));
    }
}
