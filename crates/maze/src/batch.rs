//! Incremental batch mode: many loop variants of one spanning tree.
//!
//! The base maze is built once (zones and single path). Each variant is a
//! copy of the base with its own secondary wall-removal pass, seeded
//! `seed ^ (index + 1)`. The high nibble of every variant cell holds the
//! walls of the variant before it, so a renderer can highlight what
//! changed from one variant to the next.

use crate::config::{ConfigError, MazeConfig};
use maze_core::{MazeError, NoopObserver, StepObserver};
use maze_gen::{BuildStep, Generator};
use maze_grid::{Grid, Maze};
use tracing::debug;

/// Produces successive variants of a base maze.
#[derive(Clone, Debug)]
pub struct Batch {
    base: Maze,
    generator: Generator,
    seed: u64,
    previous: Grid,
    index: u64,
}

impl Batch {
    /// Validate `config` and build the shared base.
    pub fn new(config: &MazeConfig) -> Result<Self, ConfigError> {
        let mut base = config.new_maze()?;
        let generator = Generator::new(config.remove_walls);
        generator.run(
            &mut base,
            &[BuildStep::Zones, BuildStep::Path],
            &mut NoopObserver,
        )?;
        let previous = base.grid().clone();
        Ok(Self {
            base,
            generator,
            seed: config.seed,
            previous,
            index: 0,
        })
    }

    /// The single-path maze every variant starts from.
    pub fn base(&self) -> &Maze {
        &self.base
    }

    /// Number of variants produced so far.
    pub fn produced(&self) -> u64 {
        self.index
    }

    /// Build the next variant, reporting its wall removals to `observer`.
    pub fn next_variant(&mut self, observer: &mut dyn StepObserver) -> Result<Maze, MazeError> {
        let mut variant = self.base.clone();
        variant.reseed(self.seed ^ (self.index + 1));
        let report = self
            .generator
            .run(&mut variant, &[BuildStep::Multiple], observer)?;
        variant.grid_mut().record_previous(&self.previous)?;
        self.previous = variant.grid().clone();
        self.index += 1;
        debug!(
            index = self.index,
            id = %variant.short_id(),
            removed = report.removal.map_or(0, |r| r.removed),
            "batch variant built"
        );
        Ok(variant)
    }
}

impl Iterator for Batch {
    type Item = Result<Maze, MazeError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_variant(&mut NoopObserver))
    }
}

/// Build `count` variants of the maze described by `config`.
pub fn variants(config: &MazeConfig, count: usize) -> Result<Vec<Maze>, ConfigError> {
    let batch = Batch::new(config)?;
    batch
        .take(count)
        .map(|variant| variant.map_err(ConfigError::from))
        .collect()
}
