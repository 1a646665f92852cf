//! Structural invariant checks.
//!
//! Every generated maze must satisfy these regardless of seed, size, or
//! how many secondary walls were removed.

use maze_core::{Direction, GridView, Pos};
use maze_grid::Maze;
use std::collections::VecDeque;

/// Assert that every shared wall is stored on both of its cells.
pub fn assert_walls_symmetric(view: &dyn GridView) {
    for row in 0..view.height() {
        for col in 0..view.width() {
            let pos = Pos::new(row, col);
            let walls = view.walls(pos).unwrap_or_default();
            for dir in [Direction::Right, Direction::Down] {
                let Some(other) = pos.step(dir).and_then(|nb| view.walls(nb)) else {
                    continue;
                };
                assert_eq!(
                    walls & dir.wall_bit() != 0,
                    other & dir.opposite().wall_bit() != 0,
                    "wall symmetry violated at {pos} {dir}"
                );
            }
        }
    }
}

/// Assert that no wall on the outer border is open.
pub fn assert_border_closed(view: &dyn GridView) {
    let (h, w) = (view.height(), view.width());
    for row in 0..h {
        for col in 0..w {
            let pos = Pos::new(row, col);
            let walls = view.walls(pos).unwrap_or_default();
            for dir in Direction::ALL {
                let inside = pos.step(dir).is_some_and(|nb| nb.row < h && nb.col < w);
                if !inside {
                    assert_ne!(walls & dir.wall_bit(), 0, "border {dir} of {pos} open");
                }
            }
        }
    }
}

/// Cells reachable from the start through open walls, never entering a
/// forbidden cell.
fn reachable(maze: &Maze) -> Vec<bool> {
    let grid = maze.grid();
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([maze.start()]);
    if let Some(i) = grid.index(maze.start()) {
        seen[i] = true;
    }
    while let Some(cur) = queue.pop_front() {
        for dir in Direction::ALL {
            if grid.has_wall(cur, dir) != Ok(false) {
                continue;
            }
            let Some(nb) = grid.step(cur, dir) else { continue };
            let Some(i) = grid.index(nb) else { continue };
            if !seen[i] && grid.is_open_cell(nb) {
                seen[i] = true;
                queue.push_back(nb);
            }
        }
    }
    seen
}

/// Assert that every non-forbidden cell can be reached from the start.
pub fn assert_all_reachable(maze: &Maze) {
    let grid = maze.grid();
    let seen = reachable(maze);
    for pos in grid.positions() {
        if grid.is_open_cell(pos) {
            let i = grid.index(pos).unwrap_or_default();
            assert!(seen[i], "{pos} is not reachable from the start");
        }
    }
}

/// Assert that no 2×2 block outside a single zone has all four inner
/// walls open.
pub fn assert_no_open_block(maze: &Maze) {
    let grid = maze.grid();
    for row in 0..grid.height().saturating_sub(1) {
        for col in 0..grid.width().saturating_sub(1) {
            let block = [
                Pos::new(row, col),
                Pos::new(row, col + 1),
                Pos::new(row + 1, col),
                Pos::new(row + 1, col + 1),
            ];
            if block.iter().all(|&p| maze.in_start_zone(p))
                || block.iter().all(|&p| maze.in_end_zone(p))
            {
                continue;
            }
            let open = [
                (block[0], Direction::Right),
                (block[0], Direction::Down),
                (block[1], Direction::Down),
                (block[2], Direction::Right),
            ]
            .iter()
            .all(|&(p, d)| grid.has_wall(p, d) == Ok(false));
            assert!(!open, "2x2 block at {} has no inner wall", block[0]);
        }
    }
}

/// Check that `path` is empty or walks from the start to the end through
/// open walls and traversable cells.
pub fn check_path(maze: &Maze, path: &[Pos]) -> Result<(), String> {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return Ok(());
    };
    if first != maze.start() {
        return Err(format!("path starts at {first}, not {}", maze.start()));
    }
    if last != maze.end() {
        return Err(format!("path ends at {last}, not {}", maze.end()));
    }
    let grid = maze.grid();
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let Some(dir) = a.direction_to(b) else {
            return Err(format!("{a} and {b} are not adjacent"));
        };
        if grid.has_wall(a, dir) != Ok(false) {
            return Err(format!("wall between {a} and {b}"));
        }
        if !grid.is_open_cell(b) {
            return Err(format!("{b} is forbidden"));
        }
    }
    Ok(())
}

/// Panicking form of [`check_path`].
pub fn assert_valid_path(maze: &Maze, path: &[Pos]) {
    if let Err(reason) = check_path(maze, path) {
        panic!("invalid path: {reason}");
    }
}
