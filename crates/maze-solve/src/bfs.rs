//! Breadth-first search.

use crate::pathfinder::{check_start, follow_parents, mark_path, visit, Pathfinder};
use maze_core::{Algorithm, MazeError, Pos, StepObserver};
use maze_grid::Maze;
use std::collections::VecDeque;

/// Level-order search with parent pointers set on first discovery.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bfs;

impl Pathfinder for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn solve(
        &self,
        maze: &mut Maze,
        start: Pos,
        observer: &mut dyn StepObserver,
    ) -> Result<Vec<Pos>, MazeError> {
        let algorithm = self.algorithm();
        let start_idx = check_start(maze.grid(), start)?;
        let cells = maze.grid().len();
        let end = maze.end();
        let mut parents: Vec<Option<Pos>> = vec![None; cells];
        let mut discovered = vec![false; cells];
        discovered[start_idx] = true;

        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            visit(maze, algorithm, cur, observer)?;
            if cur == end {
                let path = follow_parents(maze.grid(), &parents, end);
                mark_path(maze.grid_mut(), algorithm, &path)?;
                return Ok(path);
            }
            let (grid, rng) = maze.parts_mut();
            for (nb, _) in grid.neighbors(cur, false, rng) {
                let Some(ni) = grid.index(nb) else { continue };
                if !discovered[ni] {
                    discovered[ni] = true;
                    parents[ni] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
        Ok(Vec::new())
    }
}
