//! Random occupancy-grid generation.
//!
//! Each site is occupied independently with the configured probability. The
//! caller supplies the random source, so identical seeds reproduce identical
//! grids and end-to-end labeling tests stay deterministic.

use std::num::NonZeroUsize;

use rand::{Rng, rngs::SmallRng};

use crate::{
    error::{Result, SimulationError},
    grid::OccupancyGrid,
};

/// Samples an L×L occupancy grid, occupying each site independently with
/// probability `probability`.
///
/// A site is occupied exactly when one uniform draw in `[0, 1)` is strictly
/// less than `probability`, so `0.0` yields an empty grid and `1.0` a full
/// one.
///
/// # Errors
/// Returns [`SimulationError::InvalidSide`] when `side` is zero and
/// [`SimulationError::InvalidProbability`] when `probability` is not in
/// `[0, 1]` (NaN included).
///
/// # Examples
/// ```
/// use percolate_core::generate;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let grid = generate(4, 0.5, &mut rng)?;
/// assert_eq!(grid.side(), 4);
/// # Ok::<(), percolate_core::SimulationError>(())
/// ```
pub fn generate(side: usize, probability: f64, rng: &mut SmallRng) -> Result<OccupancyGrid> {
    let side = NonZeroUsize::new(side).ok_or(SimulationError::InvalidSide { got: side })?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(SimulationError::InvalidProbability { got: probability });
    }
    Ok(sample(side, probability, rng))
}

/// Samples a grid from pre-validated parameters.
pub(crate) fn sample(side: NonZeroUsize, probability: f64, rng: &mut SmallRng) -> OccupancyGrid {
    let cells = (0..side.get() * side.get())
        .map(|_| rng.gen_range(0.0..1.0) < probability)
        .collect();
    OccupancyGrid::from_parts(side, cells)
}
