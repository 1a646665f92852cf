//! Constrained randomized depth-first carving.

use maze_core::{MazeError, Pos, Stage, Step, StepObserver, Zone};
use maze_grid::{Maze, Neighbors};

/// One cell on the carve stack, with its shuffled candidate list.
struct Frame {
    pos: Pos,
    neighbors: Neighbors,
    next: usize,
}

/// Carve a spanning tree from the start cell.
///
/// Walks every in-bounds neighbour regardless of walls, skipping cells
/// that are already carved or forbidden. End-zone cells are attached but
/// never expanded, so exactly one end-zone cell joins the tree. In
/// contest mode the contest cell may only be entered while travelling in
/// its approach direction.
///
/// Returns the number of cells carved. All carve and algorithm marks are
/// cleared before returning.
pub fn carve_path(maze: &mut Maze, observer: &mut dyn StepObserver) -> Result<usize, MazeError> {
    let contest = maze.contest();
    let start = maze.start();
    let mut carved = 0;

    let mut stack = vec![enter(maze, start, observer)?];
    carved += 1;

    while let Some(frame) = stack.last_mut() {
        let Some(&(nb, dir)) = frame.neighbors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        let from = frame.pos;

        let cell = maze.grid().cell(nb)?;
        if cell.is_carved() || cell.is_forbidden() {
            continue;
        }
        if let Some(contest) = contest {
            if nb == contest.pos && dir != contest.approach {
                continue;
            }
        }

        maze.grid_mut().remove_wall(from, dir)?;
        stack.push(enter(maze, nb, observer)?);
        carved += 1;
    }

    maze.grid_mut().clear_marks();
    Ok(carved)
}

/// Mark `pos` carved, report it, and list where to go next.
fn enter(maze: &mut Maze, pos: Pos, observer: &mut dyn StepObserver) -> Result<Frame, MazeError> {
    let (grid, rng) = maze.parts_mut();
    let cell = grid.cell_mut(pos)?;
    cell.set_carved(true);
    let is_end = cell.zone() == Zone::End;

    observer.on_step(&Step {
        stage: Stage::Generation,
        pos,
        built: false,
        finished: false,
        view: &*grid,
    });

    let neighbors = if is_end {
        Neighbors::new()
    } else {
        grid.neighbors(pos, true, rng)
    };
    Ok(Frame {
        pos,
        neighbors,
        next: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::carve_zones;
    use maze_core::{Direction, NoopObserver};
    use maze_grid::ContestEnd;
    use maze_test_utils::{assert_all_reachable, assert_walls_symmetric, RecordingObserver};

    fn carved(maze: &mut Maze) -> usize {
        carve_zones(maze, &mut NoopObserver).unwrap();
        carve_path(maze, &mut NoopObserver).unwrap()
    }

    #[test]
    fn reaches_every_open_cell() {
        for seed in 0..10 {
            let mut maze = Maze::new(12, 9, seed).unwrap();
            let count = carved(&mut maze);
            // 108 cells minus 6 forbidden start cells and 3 forbidden end cells.
            assert_eq!(count, 99, "seed {seed}");
            assert_all_reachable(&maze);
            assert_walls_symmetric(maze.grid());
        }
    }

    #[test]
    fn tree_has_one_edge_per_carved_cell() {
        let mut maze = Maze::new(8, 8, 3).unwrap();
        carve_zones(&mut maze, &mut NoopObserver).unwrap();
        let zone_walls = maze.grid().open_walls();
        let count = carve_path(&mut maze, &mut NoopObserver).unwrap();
        // Start path cells were already joined by the zone carving.
        assert_eq!(maze.grid().open_walls() - zone_walls, count - 3);
    }

    #[test]
    fn marks_are_cleared() {
        let mut maze = Maze::new(8, 8, 5).unwrap();
        carved(&mut maze);
        assert!(maze.grid().cells().all(|c| !c.is_carved()));
    }

    #[test]
    fn single_entrance_into_end_zone() {
        for seed in 0..10 {
            let mut maze = Maze::new(10, 10, seed).unwrap();
            carved(&mut maze);
            let mut entrances = 0;
            for &pos in maze.end_zone() {
                for dir in Direction::ALL {
                    let Some(nb) = maze.grid().step(pos, dir) else { continue };
                    if !maze.in_end_zone(nb) && !maze.grid().has_wall(pos, dir).unwrap() {
                        entrances += 1;
                    }
                }
            }
            assert_eq!(entrances, 1, "seed {seed}");
        }
    }

    #[test]
    fn contest_end_entered_from_approach_side() {
        for seed in 0..10 {
            let contest = ContestEnd::for_dimensions(8, 8);
            let mut maze = Maze::with_contest(8, 8, seed, contest).unwrap();
            carved(&mut maze);
            let grid = maze.grid();
            assert!(!grid.has_wall(Pos::new(4, 4), Direction::Right).unwrap());
            assert!(grid.has_wall(Pos::new(4, 4), Direction::Down).unwrap());
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Maze::new(16, 16, 42).unwrap();
        let mut b = Maze::new(16, 16, 42).unwrap();
        carved(&mut a);
        carved(&mut b);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn reports_each_carved_cell() {
        let mut maze = Maze::new(8, 8, 0).unwrap();
        carve_zones(&mut maze, &mut NoopObserver).unwrap();
        let mut recorder = RecordingObserver::new();
        let count = carve_path(&mut maze, &mut recorder).unwrap();
        assert_eq!(recorder.len(), count);
        assert_eq!(recorder.steps()[0].pos, maze.start());
    }
}
