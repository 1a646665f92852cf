//! The pathfinder trait and algorithm dispatch.

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::floodfill::FloodFill;
use maze_core::{Algorithm, MazeError, Pos, Stage, Step, StepObserver};
use maze_grid::{Grid, Maze};

/// A search strategy from a start cell to the maze's end cell.
///
/// # Contract
///
/// - Returns the cells from `start` to `maze.end()` inclusive, each
///   adjacent to the next through an open wall, or an empty vector when
///   the end is unreachable.
/// - Marks every explored cell as visited and every returned cell as on
///   the path, using only its own [`Algorithm`] tag.
/// - Calls `observer` once per processed cell. The observer sees the
///   grid read-only and cannot change the outcome.
/// - Search state is local: marks left by earlier runs are never read.
///
/// Returns `Err(MazeError::OutOfBounds)` only when `start` is outside the
/// grid.
pub trait Pathfinder {
    /// The tag this pathfinder marks cells with.
    fn algorithm(&self) -> Algorithm;

    /// Search from `start` to `maze.end()`.
    fn solve(
        &self,
        maze: &mut Maze,
        start: Pos,
        observer: &mut dyn StepObserver,
    ) -> Result<Vec<Pos>, MazeError>;
}

/// The pathfinder implementing `algorithm`.
pub fn pathfinder_for(algorithm: Algorithm) -> &'static dyn Pathfinder {
    match algorithm {
        Algorithm::FloodFill => &FloodFill,
        Algorithm::Dijkstra => &Dijkstra,
        Algorithm::AStar => &AStar,
        Algorithm::Bfs => &Bfs,
        Algorithm::Dfs => &Dfs,
    }
}

/// Mark `pos` visited by `algorithm` and report it.
pub(crate) fn visit(
    maze: &mut Maze,
    algorithm: Algorithm,
    pos: Pos,
    observer: &mut dyn StepObserver,
) -> Result<(), MazeError> {
    maze.grid_mut().cell_mut(pos)?.mark_visited(algorithm);
    notify(maze, algorithm, pos, false, observer);
    Ok(())
}

/// Report a step for `algorithm` without changing the grid.
pub(crate) fn notify(
    maze: &Maze,
    algorithm: Algorithm,
    pos: Pos,
    finished: bool,
    observer: &mut dyn StepObserver,
) {
    observer.on_step(&Step {
        stage: Stage::Solve(algorithm),
        pos,
        built: maze.progress().is_final(),
        finished,
        view: maze.grid(),
    });
}

/// Mark every cell of `path` as on `algorithm`'s path.
pub(crate) fn mark_path(
    grid: &mut Grid,
    algorithm: Algorithm,
    path: &[Pos],
) -> Result<(), MazeError> {
    for &pos in path {
        grid.cell_mut(pos)?.mark_path(algorithm);
    }
    Ok(())
}

/// Walk parent links back from `end`, returning the path start-first.
pub(crate) fn follow_parents(grid: &Grid, parents: &[Option<Pos>], end: Pos) -> Vec<Pos> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(parent) = grid.index(cur).and_then(|i| parents[i]) {
        if path.len() > grid.len() {
            return Vec::new();
        }
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    path
}

/// Reject a start outside the grid.
pub(crate) fn check_start(grid: &Grid, start: Pos) -> Result<usize, MazeError> {
    grid.index(start).ok_or(MazeError::OutOfBounds {
        pos: start,
        height: grid.height(),
        width: grid.width(),
    })
}
