//! Start and end zone carving.

use maze_core::{Direction, MazeError, Pos, Stage, Step, StepObserver, Zone};
use maze_grid::{Grid, Maze};

/// Tag, forbid and open up the start and end zones.
///
/// Afterwards the end zone interior is fully open, the start zone is open
/// except for the wall below the start cell, and only the start path
/// (top row of the start block) and the end cell remain traversable.
pub fn carve_zones(maze: &mut Maze, observer: &mut dyn StepObserver) -> Result<(), MazeError> {
    let start = maze.start();
    let end = maze.end();
    let start_zone = maze.start_zone().to_vec();
    let start_path = maze.start_path().to_vec();
    let end_zone = maze.end_zone().to_vec();
    let grid = maze.grid_mut();

    for &pos in &start_zone {
        let cell = grid.cell_mut(pos)?;
        cell.set_zone(Zone::Start);
        if !start_path.contains(&pos) {
            cell.set_forbidden(true);
        }
    }
    for &pos in &end_zone {
        let cell = grid.cell_mut(pos)?;
        cell.set_zone(Zone::End);
        if pos != end {
            cell.set_forbidden(true);
        }
    }

    open_zone(grid, &start_zone)?;
    grid.insert_wall(start, Direction::Down)?;
    open_zone(grid, &end_zone)?;

    for &pos in &start_path {
        grid.cell_mut(pos)?.set_forbidden(false);
    }

    for &pos in start_zone.iter().chain(&end_zone) {
        observer.on_step(&Step {
            stage: Stage::Generation,
            pos,
            built: false,
            finished: false,
            view: &*grid,
        });
    }
    Ok(())
}

/// Remove every wall between two cells of `zone`.
fn open_zone(grid: &mut Grid, zone: &[Pos]) -> Result<(), MazeError> {
    for &pos in zone {
        for dir in Direction::ALL {
            if let Some(nb) = grid.step(pos, dir) {
                if zone.contains(&nb) {
                    grid.remove_wall(pos, dir)?;
                }
            }
        }
    }
    Ok(())
}
