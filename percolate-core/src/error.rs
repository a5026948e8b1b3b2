//! Error types for the percolate core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing an [`crate::OccupancyGrid`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// Grids must have at least one row and one column.
    #[error("grid side must be at least 1")]
    ZeroSide,
    /// Backing cell vector did not match the declared dimensions.
    #[error("grid of side {side} requires {expected} cells but {cells} were given")]
    CellCountMismatch {
        /// Declared side length.
        side: usize,
        /// Number of cells supplied by the caller.
        cells: usize,
        /// Number of cells the side length requires.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GridError`] variants.
    enum GridErrorCode for GridError {
        /// Grids must have at least one row and one column.
        ZeroSide => ZeroSide => "GRID_ZERO_SIDE",
        /// Backing cell vector did not match the declared dimensions.
        CellCountMismatch => CellCountMismatch { .. } => "GRID_CELL_COUNT_MISMATCH",
    }
}

/// Error type produced when configuring or running a [`crate::Simulation`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Lattice side must be greater than zero.
    #[error("side must be at least 1 (got {got})")]
    InvalidSide {
        /// The invalid side length supplied by the caller.
        got: usize,
    },
    /// Occupation probability must lie in `[0, 1]`.
    #[error("probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// Grid construction failed while running the simulation.
    #[error(transparent)]
    Grid(#[from] GridError),
}

define_error_codes! {
    /// Stable codes describing [`SimulationError`] variants.
    enum SimulationErrorCode for SimulationError {
        /// Lattice side must be greater than zero.
        InvalidSide => InvalidSide { .. } => "SIMULATION_INVALID_SIDE",
        /// Occupation probability must lie in `[0, 1]`.
        InvalidProbability => InvalidProbability { .. } => "SIMULATION_INVALID_PROBABILITY",
        /// Grid construction failed while running the simulation.
        Grid => Grid { .. } => "SIMULATION_GRID_FAILURE",
    }
}

impl SimulationError {
    /// Retrieve the inner [`GridErrorCode`] when the error originated in grid construction.
    pub const fn grid_code(&self) -> Option<GridErrorCode> {
        match self {
            Self::Grid(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SimulationError>;
