//! Run several pathfinders over one maze and keep their results side by side.

use crate::pathfinder::{notify, pathfinder_for};
use indexmap::IndexMap;
use maze_core::{Algorithm, AlgorithmSet, MazeError, Pos, StepObserver};
use maze_grid::Maze;
use tracing::{debug, warn};

/// Outcome of a [`Solver::solve`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveReport {
    /// Path length in cells per solved algorithm, in run order.
    pub lengths: IndexMap<Algorithm, usize>,
    /// Algorithms that found no path.
    pub unsolved: Vec<Algorithm>,
}

impl SolveReport {
    /// At least one algorithm found a path.
    pub fn is_solved(&self) -> bool {
        !self.lengths.is_empty()
    }

    /// The set of algorithms that found a path.
    pub fn solved(&self) -> AlgorithmSet {
        self.lengths.keys().copied().collect()
    }
}

/// Dispatches pathfinders and stores their paths on the maze.
///
/// Each run starts from a fresh read of the maze's start cell. Marks
/// accumulate across runs; call [`Maze::reset_solutions`] first for a
/// clean comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver;

impl Solver {
    /// Run `algorithms` in order. An empty slice runs all five.
    ///
    /// Unsolvable algorithms are listed in the report and do not stop
    /// the remaining runs.
    pub fn solve(
        maze: &mut Maze,
        algorithms: &[Algorithm],
        observer: &mut dyn StepObserver,
    ) -> Result<SolveReport, MazeError> {
        let selected: Vec<Algorithm> = if algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            algorithms.to_vec()
        };

        let mut report = SolveReport::default();
        for algorithm in selected {
            match Self::solve_one(maze, algorithm, observer) {
                Ok(path) => {
                    report.lengths.insert(algorithm, path.len());
                }
                Err(MazeError::Unsolvable { algorithm }) => {
                    if !report.unsolved.contains(&algorithm) {
                        report.unsolved.push(algorithm);
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Ok(report)
    }

    /// Run one algorithm and store its path.
    ///
    /// Returns `Err(MazeError::Unsolvable)` when no path exists.
    pub fn solve_one(
        maze: &mut Maze,
        algorithm: Algorithm,
        observer: &mut dyn StepObserver,
    ) -> Result<Vec<Pos>, MazeError> {
        let start = maze.start();
        let path = pathfinder_for(algorithm).solve(maze, start, observer)?;
        maze.record_solution(algorithm, path.clone());
        notify(
            maze,
            algorithm,
            path.last().copied().unwrap_or(start),
            true,
            observer,
        );

        if path.is_empty() {
            warn!(%algorithm, "no path found");
            return Err(MazeError::Unsolvable { algorithm });
        }
        debug!(%algorithm, length = path.len(), "path found");
        Ok(path)
    }
}
