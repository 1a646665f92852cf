//! Content digest of a maze layout.
//!
//! Uses FNV-1a for a fast, deterministic fingerprint. Not
//! cryptographically secure; it only names layouts so that files and
//! renderings of the same maze can be matched up.

use crate::grid::Grid;
use maze_core::WALL_MASK;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash the dimensions and the current wall nibble of every cell.
///
/// Marks, solutions and the previous-walls nibble do not contribute, so
/// solving a maze or recording batch history leaves its digest unchanged.
pub fn layout_digest(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, grid.height() as u64);
    hash = fnv1a_u64(hash, grid.width() as u64);
    for cell in grid.cells() {
        hash = fnv1a_byte(hash, cell.walls() & WALL_MASK);
    }
    hash
}

/// First eight hex digits of a digest (its high 32 bits).
pub fn short_id(digest: u64) -> String {
    format!("{:016x}", digest)[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::{Algorithm, Direction, Pos};

    #[test]
    fn empty_input_is_offset_basis() {
        let mut hash = FNV_OFFSET;
        for b in [] as [u8; 0] {
            hash = fnv1a_byte(hash, b);
        }
        assert_eq!(hash, FNV_OFFSET);
    }

    #[test]
    fn digest_depends_on_walls_only() {
        let mut grid = Grid::new(8, 8).unwrap();
        let before = layout_digest(&grid);

        grid.cell_mut(Pos::new(2, 2)).unwrap().mark_visited(Algorithm::Bfs);
        grid.cell_mut(Pos::new(2, 2)).unwrap().set_forbidden(true);
        assert_eq!(layout_digest(&grid), before);

        grid.remove_wall(Pos::new(2, 2), Direction::Down).unwrap();
        assert_ne!(layout_digest(&grid), before);

        grid.insert_wall(Pos::new(2, 2), Direction::Down).unwrap();
        assert_eq!(layout_digest(&grid), before);
    }

    #[test]
    fn digest_depends_on_shape() {
        let a = Grid::new(8, 16).unwrap();
        let b = Grid::new(16, 8).unwrap();
        assert_ne!(layout_digest(&a), layout_digest(&b));
    }

    #[test]
    fn previous_nibble_ignored() {
        let base = Grid::new(8, 8).unwrap();
        let mut next = base.clone();
        next.remove_wall(Pos::new(1, 1), Direction::Right).unwrap();
        let digest = layout_digest(&next);
        next.record_previous(&base).unwrap();
        assert_eq!(layout_digest(&next), digest);
    }

    #[test]
    fn short_id_is_eight_hex_chars() {
        let id = short_id(0x0123_4567_89ab_cdef);
        assert_eq!(id, "01234567");
        assert_eq!(short_id(0).len(), 8);
    }
}
