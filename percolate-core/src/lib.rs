//! Percolate core library.
//!
//! Site percolation on a square lattice: seeded Bernoulli grid generation
//! and connected-cluster labeling via a single raster scan over a union-find
//! structure. Labeling is deterministic; identical grids always produce
//! bit-identical label matrices.

mod builder;
mod error;
mod generate;
mod grid;
mod labeler;
mod labels;
mod simulation;

pub use crate::{
    builder::SimulationBuilder,
    error::{GridError, GridErrorCode, Result, SimulationError, SimulationErrorCode},
    generate::generate,
    grid::OccupancyGrid,
    labeler::label,
    labels::LabelMatrix,
    simulation::{Simulation, SimulationOutcome},
};
