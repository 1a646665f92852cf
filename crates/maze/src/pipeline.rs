//! One-call generation and solving.

use crate::config::{ConfigError, MazeConfig};
use maze_core::StepObserver;
use maze_gen::{BuildReport, Generator};
use maze_grid::Maze;
use maze_solve::{SolveReport, Solver};
use tracing::info;

/// A built maze and what happened while building and solving it.
#[derive(Clone, Debug)]
pub struct Run {
    /// The maze, carrying any stored paths and marks.
    pub maze: Maze,
    /// Build stages executed.
    pub build: BuildReport,
    /// Solver outcome, when solving was requested.
    pub solve: Option<SolveReport>,
}

/// Validate `config` and build a maze through every stage.
pub fn generate(config: &MazeConfig, observer: &mut dyn StepObserver) -> Result<Run, ConfigError> {
    let mut maze = config.new_maze()?;
    let build = Generator::new(config.remove_walls).generate(&mut maze, observer)?;
    info!(
        height = config.height,
        width = config.width,
        seed = config.seed,
        id = %maze.short_id(),
        "maze generated"
    );
    Ok(Run {
        maze,
        build,
        solve: None,
    })
}

/// Build a maze and run the configured algorithms over it.
pub fn generate_and_solve(
    config: &MazeConfig,
    observer: &mut dyn StepObserver,
) -> Result<Run, ConfigError> {
    let mut run = generate(config, observer)?;
    let report = Solver::solve(&mut run.maze, &config.algorithms, observer)?;
    info!(
        id = %run.maze.short_id(),
        solved = report.lengths.len(),
        unsolved = report.unsolved.len(),
        "maze solved"
    );
    run.solve = Some(report);
    Ok(run)
}
