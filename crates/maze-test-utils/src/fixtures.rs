//! Hand-built grids and mazes with known layouts.

use maze_core::{Direction, Pos};
use maze_grid::{Grid, Maze};

/// A grid with every interior wall removed.
pub fn open_grid(height: usize, width: usize) -> Grid {
    let mut grid = Grid::new(height, width).expect("fixture dimensions");
    for pos in grid.positions().collect::<Vec<_>>() {
        for dir in [Direction::Right, Direction::Down] {
            if grid.step(pos, dir).is_some() {
                grid.remove_wall(pos, dir).expect("interior wall");
            }
        }
    }
    grid
}

/// A maze with no interior walls and no zones.
pub fn open_maze(height: usize, width: usize, seed: u64) -> Maze {
    let mut maze = Maze::new(height, width, seed).expect("fixture dimensions");
    let bytes = open_grid(height, width).wall_bytes();
    maze.grid_mut()
        .load_wall_bytes(&bytes)
        .expect("open grid is consistent");
    maze
}

/// A comb: the top row is one corridor and every column hangs from it.
///
/// Exactly one route joins any two cells, so the path from `(0,0)` to
/// `(r, c)` has `r + c + 1` cells.
pub fn comb_maze(height: usize, width: usize, seed: u64) -> Maze {
    let mut maze = Maze::new(height, width, seed).expect("fixture dimensions");
    for col in 0..width {
        if col + 1 < width {
            maze.remove_wall(Pos::new(0, col), Direction::Right)
                .expect("top corridor");
        }
        for row in 0..height - 1 {
            maze.remove_wall(Pos::new(row, col), Direction::Down)
                .expect("column");
        }
    }
    maze
}

/// A comb whose end cell is walled in on every side.
pub fn sealed_end_maze(height: usize, width: usize, seed: u64) -> Maze {
    let mut maze = comb_maze(height, width, seed);
    let end = maze.end();
    for dir in Direction::ALL {
        if maze.grid().step(end, dir).is_some() {
            maze.insert_wall(end, dir).expect("interior wall");
        }
    }
    maze
}
