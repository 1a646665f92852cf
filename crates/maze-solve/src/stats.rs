//! Path and layout statistics.

use maze_core::{Algorithm, Direction, Pos};
use maze_grid::{Grid, Maze};

/// Number of open, traversable neighbours of `pos`.
fn open_degree(grid: &Grid, pos: Pos) -> usize {
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            grid.has_wall(pos, dir) == Ok(false)
                && grid.step(pos, dir).is_some_and(|nb| grid.is_open_cell(nb))
        })
        .count()
}

/// Figures for one algorithm's stored path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathStats {
    /// Cells on the path, both ends included.
    pub length: usize,
    /// Changes of direction along the path.
    pub turns: usize,
    /// Path cells with more than two open neighbours.
    pub branches: usize,
    /// Cells the algorithm explored.
    pub visited: usize,
}

impl PathStats {
    /// Statistics for `algorithm`, or `None` if it has no stored path.
    pub fn for_algorithm(maze: &Maze, algorithm: Algorithm) -> Option<Self> {
        let path = maze.path(algorithm)?;
        let grid = maze.grid();
        let turns = path
            .windows(3)
            .filter(|w| w[0].row != w[2].row && w[0].col != w[2].col)
            .count();
        let branches = path.iter().filter(|&&p| open_degree(grid, p) > 2).count();
        let visited = grid.cells().filter(|c| c.is_visited(algorithm)).count();
        Some(Self {
            length: path.len(),
            turns,
            branches,
            visited,
        })
    }
}

/// Figures for the maze layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MazeStats {
    /// Cells that are not forbidden.
    pub open_cells: usize,
    /// Open cells with more than two open neighbours.
    pub branch_cells: usize,
    /// Interior walls still standing.
    pub closed_walls: usize,
}

impl MazeStats {
    /// Compute the layout statistics of `maze`.
    pub fn of(maze: &Maze) -> Self {
        let grid = maze.grid();
        let (h, w) = (grid.height(), grid.width());
        let interior = h * (w - 1) + w * (h - 1);
        let open: Vec<Pos> = grid.positions().filter(|&p| grid.is_open_cell(p)).collect();
        Self {
            open_cells: open.len(),
            branch_cells: open.iter().filter(|&&p| open_degree(grid, p) > 2).count(),
            closed_walls: interior - grid.open_walls(),
        }
    }
}
