//! Core types and traits for maze generation and solving.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: grid
//! positions, the direction table, cell zones, the closed set of
//! pathfinding algorithms, error types, and the read-only view and
//! step-observer traits used by external renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod direction;
pub mod error;
pub mod pos;
pub mod traits;
pub mod zone;

pub use algorithm::{Algorithm, AlgorithmSet};
pub use direction::{Direction, WALL_MASK};
pub use error::MazeError;
pub use pos::Pos;
pub use traits::{GridView, NoopObserver, Stage, Step, StepObserver};
pub use zone::Zone;
