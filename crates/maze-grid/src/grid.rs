//! Bounds-checked cell matrix with symmetric wall edits.

use crate::cell::Cell;
use maze_core::{Algorithm, Direction, GridView, MazeError, Pos, Zone};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Up to four `(neighbour, direction-from-origin)` pairs.
pub type Neighbors = SmallVec<[(Pos, Direction); 4]>;

/// A `height × width` matrix of [`Cell`]s stored row-major.
///
/// Every wall is stored on both cells that share it. All wall edits go
/// through [`remove_wall`](Grid::remove_wall) and
/// [`insert_wall`](Grid::insert_wall), which update both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a fully walled grid.
    ///
    /// Returns `Err(MazeError::InvalidDimensions)` if either dimension is 0.
    pub fn new(height: usize, width: usize) -> Result<Self, MazeError> {
        if height == 0 || width == 0 {
            return Err(MazeError::InvalidDimensions { height, width });
        }
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::new(Pos::new(row, col))))
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Row-major flat index of `pos`, or `None` outside the grid.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.width + pos.col)
    }

    fn out_of_bounds(&self, pos: Pos) -> MazeError {
        MazeError::OutOfBounds {
            pos,
            height: self.height,
            width: self.width,
        }
    }

    /// Borrow the cell at `pos`.
    pub fn cell(&self, pos: Pos) -> Result<&Cell, MazeError> {
        match self.index(pos) {
            Some(i) => Ok(&self.cells[i]),
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// Mutably borrow the cell at `pos`.
    pub fn cell_mut(&mut self, pos: Pos) -> Result<&mut Cell, MazeError> {
        match self.index(pos) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_bounds(pos)),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Pos::new(row, col)))
    }

    /// One step from `pos` in `dir`, if it stays inside the grid.
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.step(dir).filter(|p| self.contains(*p))
    }

    /// Whether the wall on side `dir` of `pos` is present.
    pub fn has_wall(&self, pos: Pos, dir: Direction) -> Result<bool, MazeError> {
        Ok(self.cell(pos)?.has_wall(dir))
    }

    /// Whether `pos` can be entered by a traversal.
    pub fn is_open_cell(&self, pos: Pos) -> bool {
        self.cell(pos).is_ok_and(|c| !c.is_forbidden())
    }

    /// Adjacent cells of `pos`, shuffled with `rng`.
    ///
    /// With `include_walled == false` only neighbours reachable through an
    /// open wall and not forbidden are returned. With `include_walled ==
    /// true` every in-bounds neighbour is returned regardless of walls or
    /// the forbidden flag. Positions outside the grid yield nothing.
    pub fn neighbors<R: Rng + ?Sized>(
        &self,
        pos: Pos,
        include_walled: bool,
        rng: &mut R,
    ) -> Neighbors {
        let mut out = Neighbors::new();
        let Ok(cell) = self.cell(pos) else {
            return out;
        };
        for dir in Direction::ALL {
            if !include_walled && cell.has_wall(dir) {
                continue;
            }
            let Some(nb) = self.step(pos, dir) else {
                continue;
            };
            if !include_walled && !self.is_open_cell(nb) {
                continue;
            }
            out.push((nb, dir));
        }
        out.shuffle(rng);
        out
    }

    /// A single neighbour of `pos`.
    ///
    /// With a direction, the adjacent cell in that direction (no wall or
    /// forbidden check); otherwise the first of a fresh
    /// [`neighbors`](Grid::neighbors) shuffle.
    pub fn neighbor<R: Rng + ?Sized>(
        &self,
        pos: Pos,
        dir: Option<Direction>,
        include_walled: bool,
        rng: &mut R,
    ) -> Option<(Pos, Direction)> {
        match dir {
            Some(dir) => self.step(pos, dir).map(|nb| (nb, dir)),
            None => self.neighbors(pos, include_walled, rng).first().copied(),
        }
    }

    fn interior_edge(&self, pos: Pos, dir: Direction) -> Result<(usize, usize), MazeError> {
        let a = self.index(pos).ok_or_else(|| MazeError::InvalidModification {
            reason: format!("{pos} is outside the {}x{} grid", self.height, self.width),
        })?;
        let nb = self
            .step(pos, dir)
            .ok_or_else(|| MazeError::InvalidModification {
                reason: format!("{dir} side of {pos} is on the outer border"),
            })?;
        let b = nb.row * self.width + nb.col;
        Ok((a, b))
    }

    /// Open the wall on side `dir` of `pos` and the matching wall of its
    /// neighbour.
    ///
    /// Returns whether anything changed. Border walls cannot be removed.
    pub fn remove_wall(&mut self, pos: Pos, dir: Direction) -> Result<bool, MazeError> {
        self.set_wall_pair(pos, dir, false)
    }

    /// Close the wall on side `dir` of `pos` and the matching wall of its
    /// neighbour.
    ///
    /// Returns whether anything changed; inserting twice is a no-op.
    pub fn insert_wall(&mut self, pos: Pos, dir: Direction) -> Result<bool, MazeError> {
        self.set_wall_pair(pos, dir, true)
    }

    fn set_wall_pair(&mut self, pos: Pos, dir: Direction, present: bool) -> Result<bool, MazeError> {
        let (a, b) = self.interior_edge(pos, dir)?;
        let changed = self.cells[a].has_wall(dir) != present;
        self.cells[a].set_wall(dir, present);
        self.cells[b].set_wall(dir.opposite(), present);
        Ok(changed)
    }

    /// One byte per cell, row-major: the raw wall matrix.
    pub fn wall_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(Cell::walls).collect()
    }

    /// Replace every cell's wall byte from a row-major matrix.
    ///
    /// The matrix must hold exactly `height * width` bytes, keep the outer
    /// border closed, and store every shared wall on both sides. On error
    /// the grid is unchanged.
    pub fn load_wall_bytes(&mut self, bytes: &[u8]) -> Result<(), MazeError> {
        if bytes.len() != self.cells.len() {
            return Err(MazeError::InvalidModification {
                reason: format!(
                    "wall matrix has {} bytes, expected {}",
                    bytes.len(),
                    self.cells.len()
                ),
            });
        }
        for pos in self.positions() {
            let walls = bytes[pos.row * self.width + pos.col];
            for dir in Direction::ALL {
                let present = walls & dir.wall_bit() != 0;
                match self.step(pos, dir) {
                    None if !present => {
                        return Err(MazeError::InvalidModification {
                            reason: format!("border wall {dir} of {pos} is open"),
                        });
                    }
                    None => {}
                    Some(nb) => {
                        let other = bytes[nb.row * self.width + nb.col];
                        if (other & dir.opposite().wall_bit() != 0) != present {
                            return Err(MazeError::InvalidModification {
                                reason: format!("wall {dir} between {pos} and {nb} is one-sided"),
                            });
                        }
                    }
                }
            }
        }
        for (cell, &walls) in self.cells.iter_mut().zip(bytes) {
            cell.set_walls(walls);
        }
        Ok(())
    }

    /// Store `previous`'s current walls in this grid's high nibble.
    pub fn record_previous(&mut self, previous: &Grid) -> Result<(), MazeError> {
        if previous.height != self.height || previous.width != self.width {
            return Err(MazeError::InvalidDimensions {
                height: previous.height,
                width: previous.width,
            });
        }
        for (cell, old) in self.cells.iter_mut().zip(&previous.cells) {
            cell.set_previous_walls(old.current_walls());
        }
        Ok(())
    }

    /// Clear carve, visited and path marks on every cell.
    pub fn clear_marks(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_marks);
    }

    /// Clear visited and path marks on every cell.
    pub fn clear_algorithm_marks(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear_algorithm_marks);
    }

    /// Number of open walls between adjacent cells.
    pub fn open_walls(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| {
                        self.step(pos, dir).is_some()
                            && self.cell(pos).is_ok_and(|c| !c.has_wall(dir))
                    })
                    .count()
            })
            .sum()
    }
}

impl GridView for Grid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn walls(&self, pos: Pos) -> Option<u8> {
        self.cell(pos).ok().map(Cell::walls)
    }

    fn zone(&self, pos: Pos) -> Option<Zone> {
        self.cell(pos).ok().map(Cell::zone)
    }

    fn is_forbidden(&self, pos: Pos) -> bool {
        self.cell(pos).is_ok_and(Cell::is_forbidden)
    }

    fn is_visited(&self, pos: Pos, algorithm: Algorithm) -> bool {
        self.cell(pos).is_ok_and(|c| c.is_visited(algorithm))
    }

    fn is_path(&self, pos: Pos, algorithm: Algorithm) -> bool {
        self.cell(pos).is_ok_and(|c| c.is_path(algorithm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use maze_test_utils::{assert_border_closed, assert_walls_symmetric};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(MazeError::InvalidDimensions {
                height: 0,
                width: 4
            })
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn cells_know_their_position() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.len(), 15);
        for pos in grid.positions() {
            assert_eq!(grid.cell(pos).unwrap().pos(), pos);
        }
    }

    #[test]
    fn out_of_range_lookup_errors() {
        let grid = Grid::new(4, 4).unwrap();
        let err = grid.cell(Pos::new(4, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::OutOfBounds {
                pos: Pos::new(4, 0),
                height: 4,
                width: 4
            }
        );
        assert!(grid.step(Pos::new(3, 3), Direction::Right).is_none());
    }

    // ── Walls ───────────────────────────────────────────────────

    #[test]
    fn remove_wall_is_symmetric() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(grid.remove_wall(Pos::new(1, 1), Direction::Down).unwrap());
        assert!(!grid.has_wall(Pos::new(1, 1), Direction::Down).unwrap());
        assert!(!grid.has_wall(Pos::new(2, 1), Direction::Up).unwrap());
        assert_eq!(grid.open_walls(), 1);
        assert_walls_symmetric(&grid);
    }

    #[test]
    fn insert_wall_twice_is_idempotent() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.remove_wall(Pos::new(0, 0), Direction::Right).unwrap();
        assert!(grid.insert_wall(Pos::new(0, 0), Direction::Right).unwrap());
        let once = grid.wall_bytes();
        assert!(!grid.insert_wall(Pos::new(0, 0), Direction::Right).unwrap());
        assert_eq!(grid.wall_bytes(), once);
    }

    #[test]
    fn border_edits_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        let before = grid.wall_bytes();
        assert!(matches!(
            grid.remove_wall(Pos::new(0, 2), Direction::Up),
            Err(MazeError::InvalidModification { .. })
        ));
        assert!(matches!(
            grid.insert_wall(Pos::new(9, 9), Direction::Up),
            Err(MazeError::InvalidModification { .. })
        ));
        assert_eq!(grid.wall_bytes(), before);
    }

    // ── Neighbours ──────────────────────────────────────────────

    #[test]
    fn walled_neighbors_include_everything_in_bounds() {
        let grid = Grid::new(4, 4).unwrap();
        let mut rng = rng();
        assert_eq!(grid.neighbors(Pos::new(0, 0), true, &mut rng).len(), 2);
        assert_eq!(grid.neighbors(Pos::new(0, 1), true, &mut rng).len(), 3);
        assert_eq!(grid.neighbors(Pos::new(1, 1), true, &mut rng).len(), 4);
        assert!(grid.neighbors(Pos::new(1, 1), false, &mut rng).is_empty());
    }

    #[test]
    fn open_neighbors_skip_forbidden() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = rng();
        grid.remove_wall(Pos::new(1, 1), Direction::Right).unwrap();
        grid.remove_wall(Pos::new(1, 1), Direction::Down).unwrap();
        grid.cell_mut(Pos::new(2, 1)).unwrap().set_forbidden(true);
        let nbs = grid.neighbors(Pos::new(1, 1), false, &mut rng);
        assert_eq!(nbs.as_slice(), &[(Pos::new(1, 2), Direction::Right)]);
        assert_eq!(grid.neighbors(Pos::new(1, 1), true, &mut rng).len(), 4);
    }

    #[test]
    fn neighbor_with_direction_ignores_walls() {
        let grid = Grid::new(4, 4).unwrap();
        let mut rng = rng();
        assert_eq!(
            grid.neighbor(Pos::new(1, 1), Some(Direction::Left), false, &mut rng),
            Some((Pos::new(1, 0), Direction::Left))
        );
        assert_eq!(
            grid.neighbor(Pos::new(1, 0), Some(Direction::Left), false, &mut rng),
            None
        );
        assert_eq!(grid.neighbor(Pos::new(1, 1), None, false, &mut rng), None);
    }

    // ── Wall matrix ─────────────────────────────────────────────

    #[test]
    fn wall_matrix_round_trips() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.remove_wall(Pos::new(0, 0), Direction::Right).unwrap();
        grid.remove_wall(Pos::new(1, 1), Direction::Up).unwrap();
        let bytes = grid.wall_bytes();
        let mut copy = Grid::new(3, 3).unwrap();
        copy.load_wall_bytes(&bytes).unwrap();
        assert_eq!(copy.wall_bytes(), bytes);
    }

    #[test]
    fn wall_matrix_rejects_bad_input() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.load_wall_bytes(&[0xFF; 3]).is_err());

        // (0,0) opens Right but (0,1) keeps Left.
        let one_sided = [0xFD, 0xFF, 0xFF, 0xFF];
        assert!(grid.load_wall_bytes(&one_sided).is_err());

        // (0,0) opens its Up border.
        let open_border = [0xFE, 0xFF, 0xFF, 0xFF];
        assert!(grid.load_wall_bytes(&open_border).is_err());
        assert_eq!(grid.wall_bytes(), vec![0xFF; 4]);
    }

    #[test]
    fn record_previous_fills_high_nibble() {
        let base = Grid::new(2, 2).unwrap();
        let mut next = base.clone();
        next.remove_wall(Pos::new(0, 0), Direction::Right).unwrap();
        next.record_previous(&base).unwrap();
        assert_eq!(next.cell(Pos::new(0, 0)).unwrap().walls(), 0xFD);
        assert_eq!(next.cell(Pos::new(0, 0)).unwrap().previous_walls(), 0x0F);
        assert_eq!(next.wall_bytes()[1] & maze_core::WALL_MASK, 0x07);
        assert!(next.record_previous(&Grid::new(3, 2).unwrap()).is_err());
    }

    #[test]
    fn view_contract() {
        let grid = Grid::new(3, 4).unwrap();
        assert_walls_symmetric(&grid);
        assert_border_closed(&grid);
        compliance::assert_out_of_range_is_empty(&grid);
    }

    proptest! {
        #[test]
        fn random_edits_keep_symmetry(
            edits in prop::collection::vec((0usize..6, 0usize..6, 0usize..4, any::<bool>()), 0..60)
        ) {
            let mut grid = Grid::new(6, 6).unwrap();
            for (row, col, d, open) in edits {
                let pos = Pos::new(row, col);
                let dir = Direction::ALL[d];
                let result = if open {
                    grid.remove_wall(pos, dir)
                } else {
                    grid.insert_wall(pos, dir)
                };
                prop_assert_eq!(result.is_ok(), grid.step(pos, dir).is_some());
            }
            assert_walls_symmetric(&grid);
            assert_border_closed(&grid);
        }
    }
}
