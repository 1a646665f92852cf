//! Maze topology state: grid, zones, endpoints, results and RNG.

use crate::grid::Grid;
use crate::hash;
use indexmap::IndexMap;
use maze_core::{Algorithm, AlgorithmSet, Direction, MazeError, Pos};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Smallest accepted height or width.
pub const MIN_DIM: usize = 8;
/// Largest accepted height or width.
pub const MAX_DIM: usize = 128;

/// The 3×3 start block in the top-left corner.
pub const START_ZONE: [Pos; 9] = [
    Pos::new(0, 0),
    Pos::new(0, 1),
    Pos::new(0, 2),
    Pos::new(1, 0),
    Pos::new(1, 1),
    Pos::new(1, 2),
    Pos::new(2, 0),
    Pos::new(2, 1),
    Pos::new(2, 2),
];

/// Cells of the start zone that stay traversable.
pub const START_PATH: [Pos; 3] = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)];

/// Where every traversal begins.
pub const START_POS: Pos = Pos::new(0, 0);

/// The 2×2 goal block in the middle of a `height × width` grid.
pub fn end_zone(height: usize, width: usize) -> [Pos; 4] {
    let (r, c) = (height / 2, width / 2);
    [
        Pos::new(r - 1, c - 1),
        Pos::new(r - 1, c),
        Pos::new(r, c - 1),
        Pos::new(r, c),
    ]
}

/// A fixed end cell that must be entered while travelling in a given
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContestEnd {
    /// The end cell.
    pub pos: Pos,
    /// Direction of travel on the final step into `pos`.
    pub approach: Direction,
}

impl ContestEnd {
    /// The standard contest end: `(h/2, w/2)` entered travelling `Left`.
    pub fn for_dimensions(height: usize, width: usize) -> Self {
        Self {
            pos: Pos::new(height / 2, width / 2),
            approach: Direction::Left,
        }
    }

    /// The cell the final step must come from.
    pub fn entry(self) -> Option<Pos> {
        self.pos.step(self.approach.opposite())
    }

    /// Check that this end lies in the end zone and can be reached from
    /// outside it.
    pub fn check(self, height: usize, width: usize) -> Result<(), String> {
        let zone = end_zone(height, width);
        if !zone.contains(&self.pos) {
            return Err(format!("{} is not in the end zone", self.pos));
        }
        match self.entry() {
            Some(entry) if entry.row < height && entry.col < width => {
                if zone.contains(&entry) {
                    Err(format!(
                        "approach {} into {} starts inside the end zone",
                        self.approach, self.pos
                    ))
                } else {
                    Ok(())
                }
            }
            _ => Err(format!(
                "approach {} into {} starts outside the grid",
                self.approach, self.pos
            )),
        }
    }
}

/// Which build steps have run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildProgress {
    /// Zones carved.
    pub zones: bool,
    /// Spanning path carved.
    pub path: bool,
    /// Secondary walls removed.
    pub multiple: bool,
}

impl BuildProgress {
    /// The maze is ready to solve.
    pub fn is_final(self) -> bool {
        self.zones && (self.path || self.multiple)
    }
}

/// A maze: the grid plus everything generation and solving need.
///
/// All random choices (end cell, neighbour shuffles, wall removal) draw
/// from one seeded [`ChaCha8Rng`], so a seed fully determines the layout.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    end_zone: [Pos; 4],
    end: Pos,
    contest: Option<ContestEnd>,
    paths: IndexMap<Algorithm, Vec<Pos>>,
    solved: AlgorithmSet,
    progress: BuildProgress,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Maze {
    /// A fully walled maze with a randomly chosen end cell.
    ///
    /// Returns `Err(MazeError::InvalidDimensions)` unless both dimensions
    /// are within `MIN_DIM..=MAX_DIM`.
    pub fn new(height: usize, width: usize, seed: u64) -> Result<Self, MazeError> {
        Self::build(height, width, seed, None)
    }

    /// A fully walled maze whose end is the given contest cell.
    pub fn with_contest(
        height: usize,
        width: usize,
        seed: u64,
        contest: ContestEnd,
    ) -> Result<Self, MazeError> {
        Self::build(height, width, seed, Some(contest))
    }

    fn build(
        height: usize,
        width: usize,
        seed: u64,
        contest: Option<ContestEnd>,
    ) -> Result<Self, MazeError> {
        let dims = MIN_DIM..=MAX_DIM;
        if !dims.contains(&height) || !dims.contains(&width) {
            return Err(MazeError::InvalidDimensions { height, width });
        }
        if let Some(contest) = contest {
            contest
                .check(height, width)
                .map_err(|reason| MazeError::InvalidModification { reason })?;
        }
        let grid = Grid::new(height, width)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let end_zone = end_zone(height, width);
        let end = match contest {
            Some(contest) => contest.pos,
            None => end_zone[rng.random_range(0..end_zone.len())],
        };
        Ok(Self {
            grid,
            end_zone,
            end,
            contest,
            paths: IndexMap::new(),
            solved: AlgorithmSet::empty(),
            progress: BuildProgress::default(),
            seed,
            rng,
        })
    }

    /// The cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The cell grid, mutably.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Grid and RNG borrowed together, for algorithms that shuffle while
    /// editing.
    pub fn parts_mut(&mut self) -> (&mut Grid, &mut ChaCha8Rng) {
        (&mut self.grid, &mut self.rng)
    }

    /// The maze RNG.
    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// The seed the RNG was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseed the RNG. The layout and the end cell are unchanged.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Start cell.
    pub fn start(&self) -> Pos {
        START_POS
    }

    /// End cell.
    pub fn end(&self) -> Pos {
        self.end
    }

    /// The start block.
    pub fn start_zone(&self) -> &[Pos] {
        &START_ZONE
    }

    /// The traversable part of the start block.
    pub fn start_path(&self) -> &[Pos] {
        &START_PATH
    }

    /// The goal block.
    pub fn end_zone(&self) -> &[Pos] {
        &self.end_zone
    }

    /// Whether `pos` is in the start block.
    pub fn in_start_zone(&self, pos: Pos) -> bool {
        START_ZONE.contains(&pos)
    }

    /// Whether `pos` is in the goal block.
    pub fn in_end_zone(&self, pos: Pos) -> bool {
        self.end_zone.contains(&pos)
    }

    /// Whether `pos` is in either zone.
    pub fn in_zone(&self, pos: Pos) -> bool {
        self.in_start_zone(pos) || self.in_end_zone(pos)
    }

    /// Contest end, when contest mode is on.
    pub fn contest(&self) -> Option<ContestEnd> {
        self.contest
    }

    /// Build steps completed so far.
    pub fn progress(&self) -> BuildProgress {
        self.progress
    }

    /// Build progress, mutably.
    pub fn progress_mut(&mut self) -> &mut BuildProgress {
        &mut self.progress
    }

    /// Stored paths, in the order they were solved.
    pub fn paths(&self) -> &IndexMap<Algorithm, Vec<Pos>> {
        &self.paths
    }

    /// The stored path of one algorithm.
    pub fn path(&self, algorithm: Algorithm) -> Option<&[Pos]> {
        self.paths.get(&algorithm).map(Vec::as_slice)
    }

    /// Algorithms with a stored path.
    pub fn solved(&self) -> AlgorithmSet {
        self.solved
    }

    /// Store `path` as `algorithm`'s result. An empty path clears any
    /// earlier result for that algorithm.
    pub fn record_solution(&mut self, algorithm: Algorithm, path: Vec<Pos>) {
        if path.is_empty() {
            self.paths.shift_remove(&algorithm);
            self.solved.remove(algorithm);
        } else {
            self.paths.insert(algorithm, path);
            self.solved.insert(algorithm);
        }
    }

    /// Forget every result and clear all visited/path marks.
    pub fn reset_solutions(&mut self) {
        self.paths.clear();
        self.solved.clear();
        self.grid.clear_algorithm_marks();
    }

    /// Close an interior wall on both sides.
    pub fn insert_wall(&mut self, pos: Pos, dir: Direction) -> Result<bool, MazeError> {
        self.grid.insert_wall(pos, dir)
    }

    /// Open an interior wall on both sides.
    pub fn remove_wall(&mut self, pos: Pos, dir: Direction) -> Result<bool, MazeError> {
        self.grid.remove_wall(pos, dir)
    }

    /// FNV-1a fingerprint of the layout.
    pub fn digest(&self) -> u64 {
        hash::layout_digest(&self.grid)
    }

    /// Eight hex digits naming the layout.
    pub fn short_id(&self) -> String {
        hash::short_id(self.digest())
    }
}
