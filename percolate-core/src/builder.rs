//! Builder utilities for configuring percolation simulations.
//!
//! Validates lattice parameters up front so a constructed [`Simulation`] can
//! never hold an unusable side length or probability.

use std::num::NonZeroUsize;

use crate::{
    Result,
    error::SimulationError,
    simulation::Simulation,
};

/// Configures and constructs [`Simulation`] instances.
///
/// # Examples
/// ```
/// use percolate_core::SimulationBuilder;
///
/// let simulation = SimulationBuilder::new()
///     .with_side(32)
///     .with_probability(0.59)
///     .with_seed(7)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(simulation.side().get(), 32);
/// assert_eq!(simulation.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    side: usize,
    probability: f64,
    seed: u64,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            side: 16,
            probability: 0.5,
            seed: 0,
        }
    }
}

impl SimulationBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::SimulationBuilder;
    ///
    /// let builder = SimulationBuilder::new();
    /// assert_eq!(builder.side(), 16);
    /// assert_eq!(builder.probability(), 0.5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the lattice side length.
    #[must_use]
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Returns the configured side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Overrides the site-occupation probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Returns the configured occupation probability.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Overrides the random seed used for grid generation.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured random seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration and constructs a [`Simulation`].
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidSide`] when the side is zero and
    /// [`SimulationError::InvalidProbability`] when the probability is not in
    /// `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use percolate_core::{SimulationBuilder, SimulationError};
    ///
    /// let err = SimulationBuilder::new()
    ///     .with_probability(1.5)
    ///     .build()
    ///     .expect_err("probability above 1 must fail");
    /// assert!(matches!(err, SimulationError::InvalidProbability { .. }));
    /// ```
    pub fn build(self) -> Result<Simulation> {
        let side =
            NonZeroUsize::new(self.side).ok_or(SimulationError::InvalidSide { got: self.side })?;
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(SimulationError::InvalidProbability {
                got: self.probability,
            });
        }

        Ok(Simulation::new(side, self.probability, self.seed))
    }
}
