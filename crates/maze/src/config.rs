//! Maze configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use maze_core::{Algorithm, MazeError};
use maze_grid::{ContestEnd, Maze, MAX_DIM, MIN_DIM};

/// Upper bound on secondary wall removals per maze.
pub const MAX_REMOVE_WALLS: usize = 50;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MazeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Height or width outside `MIN_DIM..=MAX_DIM`.
    InvalidDimensions {
        /// Requested height.
        height: usize,
        /// Requested width.
        width: usize,
    },
    /// More secondary wall removals than allowed.
    TooManyWallRemovals {
        /// The configured count.
        requested: usize,
        /// The allowed maximum.
        max: usize,
    },
    /// The contest end is not usable on this grid.
    InvalidContestEnd {
        /// Why it was rejected.
        reason: String,
    },
    /// Building the maze failed.
    Maze(MazeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => write!(
                f,
                "maze dimensions {height}x{width} outside {MIN_DIM}..={MAX_DIM}"
            ),
            Self::TooManyWallRemovals { requested, max } => {
                write!(f, "remove_walls {requested} exceeds maximum of {max}")
            }
            Self::InvalidContestEnd { reason } => write!(f, "invalid contest end: {reason}"),
            Self::Maze(e) => write!(f, "maze: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

// ── MazeConfig ─────────────────────────────────────────────────────

/// Everything needed to build and solve one maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Rows. Default: 16.
    pub height: usize,
    /// Columns. Default: 16.
    pub width: usize,
    /// RNG seed; the same seed and settings give the same maze.
    pub seed: u64,
    /// Extra walls opened after the spanning tree. Default: 15.
    pub remove_walls: usize,
    /// Fixed end cell with a required approach direction.
    pub contest: Option<ContestEnd>,
    /// Algorithms to run, in order. Empty runs all five.
    pub algorithms: Vec<Algorithm>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            height: 16,
            width: 16,
            seed: 0,
            remove_walls: 15,
            contest: None,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl MazeConfig {
    /// Switch on contest mode with the standard end for the current
    /// dimensions. Set the dimensions first.
    pub fn with_contest_mode(mut self) -> Self {
        self.contest = Some(ContestEnd::for_dimensions(self.height, self.width));
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = MIN_DIM..=MAX_DIM;
        if !dims.contains(&self.height) || !dims.contains(&self.width) {
            return Err(ConfigError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        if self.remove_walls > MAX_REMOVE_WALLS {
            return Err(ConfigError::TooManyWallRemovals {
                requested: self.remove_walls,
                max: MAX_REMOVE_WALLS,
            });
        }
        if let Some(contest) = self.contest {
            contest
                .check(self.height, self.width)
                .map_err(|reason| ConfigError::InvalidContestEnd { reason })?;
        }
        Ok(())
    }

    /// Validate and create a fully walled maze.
    pub fn new_maze(&self) -> Result<Maze, ConfigError> {
        self.validate()?;
        let maze = match self.contest {
            Some(contest) => Maze::with_contest(self.height, self.width, self.seed, contest)?,
            None => Maze::new(self.height, self.width, self.seed)?,
        };
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Direction, Pos};

    #[test]
    fn default_is_valid() {
        let config = MazeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.height, config.width), (16, 16));
        assert_eq!(config.remove_walls, 15);
        assert_eq!(config.algorithms.len(), 5);
    }

    #[test]
    fn dimensions_checked() {
        let config = MazeConfig {
            height: 4,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDimensions {
                height: 4,
                width: 16
            })
        );
        let config = MazeConfig {
            width: 200,
            ..MazeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn removal_cap_checked() {
        let config = MazeConfig {
            remove_walls: 51,
            ..MazeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyWallRemovals {
                requested: 51,
                max: 50
            })
        );
    }

    #[test]
    fn contest_mode_uses_grid_center() {
        let config = MazeConfig {
            height: 8,
            width: 8,
            ..MazeConfig::default()
        }
        .with_contest_mode();
        assert_eq!(
            config.contest,
            Some(ContestEnd {
                pos: Pos::new(4, 4),
                approach: Direction::Left
            })
        );
        assert_eq!(config.new_maze().unwrap().end(), Pos::new(4, 4));
    }

    #[test]
    fn bad_contest_end_rejected() {
        let config = MazeConfig {
            contest: Some(ContestEnd {
                pos: Pos::new(0, 0),
                approach: Direction::Left,
            }),
            ..MazeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContestEnd { .. }));
        assert!(err.to_string().starts_with("invalid contest end"));
    }

    #[test]
    fn maze_error_is_the_source() {
        let err = ConfigError::from(MazeError::InvalidDimensions {
            height: 0,
            width: 0,
        });
        assert!(err.source().is_some());
        assert!(ConfigError::TooManyWallRemovals {
            requested: 60,
            max: 50
        }
        .source()
        .is_none());
    }
}
