//! Build a maze, solve it with every algorithm, and compare the results.
//!
//! Set `RUST_LOG=debug` to see per-stage and per-algorithm events.

use maze::prelude::*;
use maze_bench::reference_profile;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = reference_profile(42);
    let run = match generate_and_solve(&config, &mut NoopObserver) {
        Ok(run) => run,
        Err(e) => {
            tracing::error!(error = %e, "maze could not be built");
            std::process::exit(1);
        }
    };
    let maze = &run.maze;

    println!("=== Maze {} ===", maze.short_id());
    println!(
        "{}x{}  start {}  end {}",
        maze.height(),
        maze.width(),
        maze.start(),
        maze.end()
    );

    let layout = MazeStats::of(maze);
    println!(
        "open cells {}  branch cells {}  closed walls {}",
        layout.open_cells, layout.branch_cells, layout.closed_walls
    );
    if let Some(removal) = &run.build.removal {
        println!(
            "extra walls removed {}/{} ({} rejected by the pole test)",
            removal.removed, removal.requested, removal.rejected_pole
        );
    }

    println!();
    println!(
        "{:<10} {:>6} {:>6} {:>9} {:>8}",
        "algorithm", "length", "turns", "branches", "visited"
    );
    for algorithm in Algorithm::ALL {
        match PathStats::for_algorithm(maze, algorithm) {
            Some(stats) => println!(
                "{:<10} {:>6} {:>6} {:>9} {:>8}",
                algorithm.name(),
                stats.length,
                stats.turns,
                stats.branches,
                stats.visited
            ),
            None => println!("{:<10} unsolved", algorithm.name()),
        }
    }

    println!();
    match maze::variants(&config, 3) {
        Ok(variants) => {
            for (i, variant) in variants.iter().enumerate() {
                println!("variant {} -> {}", i + 1, variant.short_id());
            }
        }
        Err(e) => tracing::warn!(error = %e, "batch mode failed"),
    }
}
