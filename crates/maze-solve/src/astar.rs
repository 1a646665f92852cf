//! A* search with a Manhattan heuristic.

use crate::pathfinder::{check_start, follow_parents, mark_path, visit, Pathfinder};
use maze_core::{Algorithm, MazeError, Pos, StepObserver};
use maze_grid::Maze;
use std::collections::BTreeSet;

/// Best-first search on `g + manhattan(end)`.
///
/// The open set is ordered by `(f, row, col)`, so among equal `f` the
/// lowest `(row, col)` expands first. A cell is in the open set at most
/// once; improving its `g` replaces its entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl Pathfinder for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
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
        let mut g: Vec<Option<usize>> = vec![None; cells];
        let mut parents: Vec<Option<Pos>> = vec![None; cells];
        let mut closed = vec![false; cells];
        g[start_idx] = Some(0);

        let mut open = BTreeSet::from([(start.manhattan(end), start)]);
        while let Some((_, cur)) = open.pop_first() {
            let Some(ci) = maze.grid().index(cur) else { continue };
            closed[ci] = true;
            visit(maze, algorithm, cur, observer)?;

            if cur == end {
                let path = follow_parents(maze.grid(), &parents, end);
                mark_path(maze.grid_mut(), algorithm, &path)?;
                return Ok(path);
            }

            let tentative = g[ci].map_or(0, |d| d + 1);
            let (grid, rng) = maze.parts_mut();
            for (nb, _) in grid.neighbors(cur, false, rng) {
                let Some(ni) = grid.index(nb) else { continue };
                if closed[ni] {
                    continue;
                }
                match g[ni] {
                    Some(old) if tentative >= old => continue,
                    Some(old) => {
                        open.remove(&(old + nb.manhattan(end), nb));
                    }
                    None => {}
                }
                g[ni] = Some(tentative);
                parents[ni] = Some(cur);
                open.insert((tentative + nb.manhattan(end), nb));
            }
        }
        Ok(Vec::new())
    }
}
