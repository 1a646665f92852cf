//! Depth-first search.

use crate::pathfinder::{check_start, visit, Pathfinder};
use maze_core::{Algorithm, MazeError, Pos, StepObserver};
use maze_grid::{Maze, Neighbors};

struct Frame {
    pos: Pos,
    neighbors: Neighbors,
    next: usize,
}

/// Depth-first search returning the first path found.
///
/// Runs on an explicit stack, so large grids cannot overflow the call
/// stack. When the end is reached the stack holds the path; path marks
/// are applied from the end back to the start.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dfs;

impl Dfs {
    fn enter(
        maze: &mut Maze,
        pos: Pos,
        visited: &mut [bool],
        observer: &mut dyn StepObserver,
    ) -> Result<Frame, MazeError> {
        if let Some(i) = maze.grid().index(pos) {
            visited[i] = true;
        }
        visit(maze, Algorithm::Dfs, pos, observer)?;
        let neighbors = if pos == maze.end() {
            Neighbors::new()
        } else {
            let (grid, rng) = maze.parts_mut();
            grid.neighbors(pos, false, rng)
        };
        Ok(Frame {
            pos,
            neighbors,
            next: 0,
        })
    }
}

impl Pathfinder for Dfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn solve(
        &self,
        maze: &mut Maze,
        start: Pos,
        observer: &mut dyn StepObserver,
    ) -> Result<Vec<Pos>, MazeError> {
        check_start(maze.grid(), start)?;
        let end = maze.end();
        let mut visited = vec![false; maze.grid().len()];
        let mut stack = vec![Self::enter(maze, start, &mut visited, observer)?];

        while let Some(frame) = stack.last_mut() {
            if frame.pos == end {
                break;
            }
            let Some(&(nb, _)) = frame.neighbors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            if maze.grid().index(nb).is_none_or(|i| visited[i]) {
                continue;
            }
            stack.push(Self::enter(maze, nb, &mut visited, observer)?);
        }

        if stack.is_empty() {
            return Ok(Vec::new());
        }
        for frame in stack.iter().rev() {
            maze.grid_mut().cell_mut(frame.pos)?.mark_path(self.algorithm());
        }
        Ok(stack.into_iter().map(|frame| frame.pos).collect())
    }
}
