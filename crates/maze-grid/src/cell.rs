//! A single maze cell.

use maze_core::{Algorithm, AlgorithmSet, Direction, Pos, Zone, WALL_MASK};

/// One square of the maze.
///
/// The wall byte is only ever changed through [`Grid`](crate::Grid) so
/// that both sides of a shared wall stay in sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    walls: u8,
    zone: Zone,
    forbidden: bool,
    carved: bool,
    visited: AlgorithmSet,
    path: AlgorithmSet,
}

impl Cell {
    /// A fresh cell with every wall present (`0xFF`) and no marks.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            walls: 0xFF,
            zone: Zone::None,
            forbidden: false,
            carved: false,
            visited: AlgorithmSet::empty(),
            path: AlgorithmSet::empty(),
        }
    }

    /// Position of this cell.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The full wall byte: low nibble current, high nibble previous.
    pub fn walls(&self) -> u8 {
        self.walls
    }

    /// The four current wall bits.
    pub fn current_walls(&self) -> u8 {
        self.walls & WALL_MASK
    }

    /// The previous-generation snapshot stored in the high nibble.
    pub fn previous_walls(&self) -> u8 {
        self.walls >> 4
    }

    /// Whether the wall in `dir` is present.
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls & dir.wall_bit() != 0
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, present: bool) {
        if present {
            self.walls |= dir.wall_bit();
        } else {
            self.walls &= !dir.wall_bit();
        }
    }

    pub(crate) fn set_walls(&mut self, walls: u8) {
        self.walls = walls;
    }

    pub(crate) fn set_previous_walls(&mut self, previous: u8) {
        self.walls = (self.walls & WALL_MASK) | ((previous & WALL_MASK) << 4);
    }

    /// Zone tag.
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Tag this cell with a zone.
    pub fn set_zone(&mut self, zone: Zone) {
        self.zone = zone;
    }

    /// Whether the cell is excluded from traversal.
    pub fn is_forbidden(&self) -> bool {
        self.forbidden
    }

    /// Include or exclude the cell from traversal.
    pub fn set_forbidden(&mut self, forbidden: bool) {
        self.forbidden = forbidden;
    }

    /// Whether the carver has already reached this cell.
    pub fn is_carved(&self) -> bool {
        self.carved
    }

    /// Set the carver's scratch mark.
    pub fn set_carved(&mut self, carved: bool) {
        self.carved = carved;
    }

    /// Record that `algorithm` explored this cell.
    pub fn mark_visited(&mut self, algorithm: Algorithm) {
        self.visited.insert(algorithm);
    }

    /// Record that this cell lies on `algorithm`'s path.
    pub fn mark_path(&mut self, algorithm: Algorithm) {
        self.path.insert(algorithm);
    }

    /// Whether `algorithm` explored this cell.
    pub fn is_visited(&self, algorithm: Algorithm) -> bool {
        self.visited.contains(algorithm)
    }

    /// Whether this cell is on `algorithm`'s path.
    pub fn is_path(&self, algorithm: Algorithm) -> bool {
        self.path.contains(algorithm)
    }

    /// Every algorithm that explored this cell.
    pub fn visited(&self) -> AlgorithmSet {
        self.visited
    }

    /// Every algorithm whose path crosses this cell.
    pub fn paths(&self) -> AlgorithmSet {
        self.path
    }

    /// Clear the carve mark and all algorithm marks.
    pub fn clear_marks(&mut self) {
        self.carved = false;
        self.visited.clear();
        self.path.clear();
    }

    /// Clear only the algorithm marks.
    pub fn clear_algorithm_marks(&mut self) {
        self.visited.clear();
        self.path.clear();
    }
}
