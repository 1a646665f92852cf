//! Pathfinding over generated mazes.
//!
//! Five strategies share one [`Pathfinder`] contract and run over the
//! same [`Maze`](maze_grid::Maze), each leaving its own visited and path
//! marks so their exploration can be compared:
//!
//! - [`FloodFill`]: distance and turn labelling with a greedy walk back
//! - [`Dijkstra`]: uniform-cost search
//! - [`AStar`]: best-first on `g + manhattan`
//! - [`Bfs`]: breadth-first with parent pointers
//! - [`Dfs`]: depth-first, first path found
//!
//! [`Solver`] runs any selection of them and stores the results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floodfill;
pub mod pathfinder;
pub mod solver;
pub mod stats;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use floodfill::FloodFill;
pub use pathfinder::{pathfinder_for, Pathfinder};
pub use solver::{SolveReport, Solver};
pub use stats::{MazeStats, PathStats};
