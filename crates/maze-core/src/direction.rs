//! The four cardinal directions and their static wall/displacement table.

use std::fmt;

/// Mask selecting the four "current" wall bits of a cell's wall byte.
///
/// The high nibble is reserved for the previous-generation snapshot.
pub const WALL_MASK: u8 = 0x0F;

/// A cardinal direction on the maze grid.
///
/// Each direction owns one bit of a cell's wall byte. A wall is always
/// stored twice: once on the cell with this direction's bit and once on
/// the neighbour with the [`opposite`](Direction::opposite) bit.
///
/// The "no heading yet" sentinel is expressed as `Option<Direction>`;
/// see [`Direction::options_from`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
}

impl Direction {
    /// All four directions in clockwise order starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Displacement `(dy, dx)` of one step in this direction.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// The wall bit this direction owns in a cell's wall byte.
    pub const fn wall_bit(self) -> u8 {
        match self {
            Self::Up => 0x01,
            Self::Right => 0x02,
            Self::Down => 0x04,
            Self::Left => 0x08,
        }
    }

    /// The direction pointing back the way this one came.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// The next direction clockwise (`Up -> Right -> Down -> Left -> Up`).
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Up => Self::Right,
            Self::Right => Self::Down,
            Self::Down => Self::Left,
            Self::Left => Self::Up,
        }
    }

    /// Directions that never reverse the current heading.
    pub const fn move_options(self) -> [Direction; 3] {
        match self {
            Self::Up => [Self::Up, Self::Right, Self::Left],
            Self::Right => [Self::Up, Self::Right, Self::Down],
            Self::Down => [Self::Right, Self::Down, Self::Left],
            Self::Left => [Self::Up, Self::Down, Self::Left],
        }
    }

    /// Move options for an optional heading. `None` allows every direction.
    pub fn options_from(heading: Option<Direction>) -> Vec<Direction> {
        match heading {
            Some(dir) => dir.move_options().to_vec(),
            None => Self::ALL.to_vec(),
        }
    }

    /// Upper-case name, matching the labels external tooling prints.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
