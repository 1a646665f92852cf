//! Cell grid and maze topology state.
//!
//! [`Grid`] owns a row-major matrix of [`Cell`]s and is the only place
//! wall bits change, always in symmetric pairs. [`Maze`] wraps a grid
//! with its start and end zones, optional [`ContestEnd`], per-algorithm
//! results, build progress, and the seeded RNG that drives every random
//! choice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod grid;
pub mod hash;
pub mod maze;

#[cfg(test)]
pub(crate) mod compliance;

pub use cell::Cell;
pub use grid::{Grid, Neighbors};
pub use maze::{
    end_zone, BuildProgress, ContestEnd, Maze, MAX_DIM, MIN_DIM, START_PATH, START_POS,
    START_ZONE,
};
