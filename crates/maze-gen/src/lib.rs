//! Maze construction: zones, a constrained spanning-tree carve, and a
//! secondary wall-removal pass that adds loops without ever leaving an
//! open 2×2 block.
//!
//! [`Generator`] runs the stages in order and tracks which have already
//! run on a [`Maze`](maze_grid::Maze). The individual stages are exposed
//! for callers that want to drive construction themselves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtrack;
pub mod generator;
pub mod walls;
pub mod zones;

pub use backtrack::carve_path;
pub use generator::{BuildReport, BuildStep, Generator};
pub use walls::{is_pole_empty, remove_random_walls, RemovalReport, ATTEMPTS_PER_WALL};
pub use zones::carve_zones;
