//! Dijkstra's algorithm on unit-weight edges.

use crate::pathfinder::{check_start, follow_parents, mark_path, visit, Pathfinder};
use maze_core::{Algorithm, MazeError, Pos, StepObserver};
use maze_grid::Maze;
use std::collections::VecDeque;

/// Uniform-cost search with explicit distance relaxation.
///
/// Every edge costs 1, so a FIFO frontier pops cells in distance order.
/// Stops as soon as the end cell is popped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dijkstra;

impl Pathfinder for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
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
        let mut distance: Vec<Option<usize>> = vec![None; cells];
        let mut parents: Vec<Option<Pos>> = vec![None; cells];
        let mut done = vec![false; cells];
        distance[start_idx] = Some(0);

        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            let Some(ci) = maze.grid().index(cur) else { continue };
            if done[ci] {
                continue;
            }
            done[ci] = true;
            visit(maze, algorithm, cur, observer)?;

            if cur == end {
                let path = follow_parents(maze.grid(), &parents, end);
                mark_path(maze.grid_mut(), algorithm, &path)?;
                return Ok(path);
            }

            let tentative = distance[ci].map_or(0, |d| d + 1);
            let (grid, rng) = maze.parts_mut();
            for (nb, _) in grid.neighbors(cur, false, rng) {
                let Some(ni) = grid.index(nb) else { continue };
                if done[ni] {
                    continue;
                }
                if distance[ni].is_none_or(|d| tentative < d) {
                    distance[ni] = Some(tentative);
                    parents[ni] = Some(cur);
                    queue.push_back(nb);
                }
            }
        }
        Ok(Vec::new())
    }
}
