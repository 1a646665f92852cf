//! Cell zone tags.

/// Which special region, if any, a cell belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Ordinary maze cell.
    #[default]
    None,
    /// Part of the 3×3 start block in the top-left corner.
    Start,
    /// Part of the 2×2 goal block in the middle of the grid.
    End,
}

impl Zone {
    /// `true` for start and end cells.
    pub fn is_special(self) -> bool {
        self != Zone::None
    }
}
