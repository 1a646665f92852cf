//! GridView contract test helpers.
//!
//! Wall symmetry and border checks live in `maze-test-utils`; this
//! module holds the lookup contract that only the view itself can break.

use maze_core::{GridView, Pos};

/// Assert that lookups just past the grid report nothing.
pub fn assert_out_of_range_is_empty(view: &dyn GridView) {
    let probes = [
        Pos::new(view.height(), 0),
        Pos::new(0, view.width()),
        Pos::new(view.height(), view.width()),
    ];
    for pos in probes {
        assert_eq!(view.walls(pos), None, "walls({pos}) should be None");
        assert_eq!(view.zone(pos), None, "zone({pos}) should be None");
        assert!(!view.is_forbidden(pos));
    }
}
