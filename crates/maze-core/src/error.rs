//! Error types for maze construction, lookup, editing and solving.

use crate::algorithm::Algorithm;
use crate::pos::Pos;
use std::error::Error;
use std::fmt;

/// Errors arising from grid access, wall edits, and solving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A coordinate is outside the grid. Callers that respect the grid
    /// dimensions never see this.
    OutOfBounds {
        /// The offending position.
        pos: Pos,
        /// Grid height.
        height: usize,
        /// Grid width.
        width: usize,
    },
    /// The requested dimensions cannot hold a maze.
    InvalidDimensions {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },
    /// A pathfinder found no route from start to end.
    ///
    /// Recoverable: the solver records it and moves on to the next
    /// algorithm.
    Unsolvable {
        /// The algorithm that failed.
        algorithm: Algorithm,
    },
    /// A wall edit was rejected; the maze is unchanged.
    InvalidModification {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, height, width } => {
                write!(f, "position {pos} out of bounds for {height}x{width} grid")
            }
            Self::InvalidDimensions { height, width } => {
                write!(f, "invalid maze dimensions {height}x{width}")
            }
            Self::Unsolvable { algorithm } => {
                write!(f, "no solution found by {algorithm}")
            }
            Self::InvalidModification { reason } => {
                write!(f, "invalid wall modification: {reason}")
            }
        }
    }
}

impl Error for MazeError {}
