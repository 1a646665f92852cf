//! Flood-fill: distance and turn labelling, then a greedy walk back.

use crate::pathfinder::{check_start, mark_path, visit, Pathfinder};
use maze_core::{Algorithm, Direction, MazeError, Pos, StepObserver};
use maze_grid::Maze;
use std::collections::VecDeque;

/// Breadth-first labelling of every reachable cell with its distance
/// from the start and the number of turns taken to get there.
///
/// The path is rebuilt from the end by repeatedly stepping to the open
/// neighbour with the smallest `(turns, distance)`. Ties go to whichever
/// neighbour the shuffle put first, so the result favours straight runs
/// but is not necessarily shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFill;

impl Pathfinder for FloodFill {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FloodFill
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
        let mut distance: Vec<Option<usize>> = vec![None; cells];
        let mut turns = vec![0usize; cells];
        distance[start_idx] = Some(0);

        // The start has no heading until it expands its first neighbour.
        let mut queue: VecDeque<(Pos, Option<Direction>)> = VecDeque::from([(start, None)]);
        while let Some((cur, mut heading)) = queue.pop_front() {
            visit(maze, algorithm, cur, observer)?;
            let (grid, rng) = maze.parts_mut();
            let Some(ci) = grid.index(cur) else { continue };
            for (nb, dir) in grid.neighbors(cur, false, rng) {
                let Some(ni) = grid.index(nb) else { continue };
                if distance[ni].is_some() {
                    continue;
                }
                distance[ni] = distance[ci].map(|d| d + 1);
                let facing = *heading.get_or_insert(dir);
                turns[ni] = turns[ci] + usize::from(dir != facing);
                queue.push_back((nb, Some(dir)));
            }
        }

        let end = maze.end();
        let (grid, rng) = maze.parts_mut();
        if grid.index(end).and_then(|i| distance[i]).is_none() {
            return Ok(Vec::new());
        }

        let mut path = vec![end];
        let mut cur = end;
        while cur != start {
            let next = grid
                .neighbors(cur, false, rng)
                .into_iter()
                .filter_map(|(nb, _)| {
                    let i = grid.index(nb)?;
                    distance[i].map(|d| ((turns[i], d), nb))
                })
                .min_by_key(|(key, _)| *key);
            match next {
                Some((_, nb)) if path.len() <= cells => {
                    path.push(nb);
                    cur = nb;
                }
                _ => return Ok(Vec::new()),
            }
        }
        path.reverse();
        mark_path(grid, algorithm, &path)?;
        Ok(path)
    }
}
