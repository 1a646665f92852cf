//! The closed set of pathfinding algorithms and the [`AlgorithmSet`] bitset.

use std::fmt;

/// A pathfinding strategy.
///
/// The set is fixed at compile time, so per-cell marks are stored as an
/// [`AlgorithmSet`] bitmask rather than a dynamic collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Breadth-first distance and turn labelling, reconstructed backwards.
    FloodFill,
    /// Uniform-cost search with explicit distance relaxation.
    Dijkstra,
    /// Best-first search on `g + manhattan`.
    AStar,
    /// Breadth-first search with parent pointers.
    Bfs,
    /// Depth-first search; first path found.
    Dfs,
}

impl Algorithm {
    /// Every algorithm, in the order the solver runs them by default.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::FloodFill,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// The bit this algorithm occupies in an [`AlgorithmSet`].
    pub const fn bit(self) -> u8 {
        match self {
            Self::FloodFill => 1 << 0,
            Self::Dijkstra => 1 << 1,
            Self::AStar => 1 << 2,
            Self::Bfs => 1 << 3,
            Self::Dfs => 1 << 4,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FloodFill => "FloodFill",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "AStar",
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`Algorithm`]s stored as a single byte.
///
/// Used for the per-cell "visited by" and "on path of" marks. Inserting
/// an algorithm twice is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlgorithmSet(u8);

impl AlgorithmSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set of all five algorithms.
    pub const fn all() -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < Algorithm::ALL.len() {
            bits |= Algorithm::ALL[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Add an algorithm.
    pub fn insert(&mut self, algorithm: Algorithm) {
        self.0 |= algorithm.bit();
    }

    /// Remove an algorithm.
    pub fn remove(&mut self, algorithm: Algorithm) {
        self.0 &= !algorithm.bit();
    }

    /// Check membership.
    pub const fn contains(self, algorithm: Algorithm) -> bool {
        self.0 & algorithm.bit() != 0
    }

    /// `true` when no algorithm is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of algorithms present.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Raw bits, for renderers that pack marks.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Iterate members in [`Algorithm::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Algorithm> {
        Algorithm::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Algorithm> for AlgorithmSet {
    fn from_iter<I: IntoIterator<Item = Algorithm>>(iter: I) -> Self {
        let mut set = Self::empty();
        for algorithm in iter {
            set.insert(algorithm);
        }
        set
    }
}
