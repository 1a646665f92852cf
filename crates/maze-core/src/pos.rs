//! Grid coordinates.

use crate::direction::Direction;
use std::fmt;

/// A `(row, col)` coordinate on the maze grid.
///
/// Ordering is row-major, which pathfinders rely on for deterministic
/// tie-breaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Pos {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `dir`, or `None` if that would leave the first
    /// quadrant. Upper bounds are the grid's business.
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dy, dx) = dir.delta();
        Some(Pos {
            row: self.row.checked_add_signed(dy)?,
            col: self.col.checked_add_signed(dx)?,
        })
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The direction that leads from `self` to an adjacent `other`.
    pub fn direction_to(self, other: Pos) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
