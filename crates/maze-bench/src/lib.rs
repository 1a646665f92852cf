//! Benchmark profiles for maze generation and solving.
//!
//! Provides pre-built [`MazeConfig`] profiles for benchmarks and the demo:
//!
//! - [`reference_profile`]: 32x32 grid with the default 15 extra walls
//! - [`stress_profile`]: 128x128 grid, the largest accepted, with 50 extra walls
//! - [`contest_profile`]: 16x16 grid in contest mode

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use maze::MazeConfig;

/// Build the reference profile: 32x32 grid (1K cells).
pub fn reference_profile(seed: u64) -> MazeConfig {
    MazeConfig {
        height: 32,
        width: 32,
        seed,
        ..MazeConfig::default()
    }
}

/// Build the stress profile: 128x128 grid (16K cells).
pub fn stress_profile(seed: u64) -> MazeConfig {
    MazeConfig {
        height: 128,
        width: 128,
        seed,
        remove_walls: maze::MAX_REMOVE_WALLS,
        ..MazeConfig::default()
    }
}

/// Build the contest profile: 16x16 grid with the fixed contest end.
pub fn contest_profile(seed: u64) -> MazeConfig {
    MazeConfig {
        seed,
        ..MazeConfig::default()
    }
    .with_contest_mode()
}
