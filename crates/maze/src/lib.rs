//! Procedural maze generation with side-by-side multi-algorithm solving.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the sub-crates and adds configuration, one-call pipelines, and batch
//! mode.
//!
//! # Quick start
//!
//! ```rust
//! use maze::prelude::*;
//!
//! let config = MazeConfig {
//!     height: 12,
//!     width: 12,
//!     seed: 7,
//!     ..MazeConfig::default()
//! };
//! let run = generate_and_solve(&config, &mut NoopObserver).unwrap();
//! let report = run.solve.unwrap();
//! assert!(report.unsolved.is_empty());
//! assert_eq!(
//!     report.lengths[&Algorithm::Bfs],
//!     report.lengths[&Algorithm::Dijkstra],
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `maze-core` | Directions, positions, algorithms, errors, view and observer traits |
//! | [`grid`] | `maze-grid` | Cells, the grid, maze state, content digest |
//! | [`generation`] | `maze-gen` | Zone carving, path carving, wall removal |
//! | [`solve`] | `maze-solve` | Pathfinders, solver dispatch, statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod pipeline;

/// Core vocabulary types and traits (`maze-core`).
pub use maze_core as types;

/// Cells, grid and maze state (`maze-grid`).
pub use maze_grid as grid;

/// Staged maze construction (`maze-gen`).
pub use maze_gen as generation;

/// Pathfinders and solver dispatch (`maze-solve`).
pub use maze_solve as solve;

pub use batch::{variants, Batch};
pub use config::{ConfigError, MazeConfig, MAX_REMOVE_WALLS};
pub use pipeline::{generate, generate_and_solve, Run};

/// Common imports for typical usage.
///
/// ```rust
/// use maze::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use maze_core::{
        Algorithm, AlgorithmSet, Direction, GridView, MazeError, NoopObserver, Pos, Stage, Step,
        StepObserver, Zone,
    };

    // Maze state
    pub use maze_grid::{ContestEnd, Grid, Maze};

    // Construction and solving
    pub use maze_gen::{BuildStep, Generator};
    pub use maze_solve::{MazeStats, PathStats, Pathfinder, SolveReport, Solver};

    // Facade
    pub use crate::{generate, generate_and_solve, Batch, ConfigError, MazeConfig, Run};
}
