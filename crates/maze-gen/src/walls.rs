//! Secondary wall removal with the pole test.

use maze_core::{Direction, MazeError, Pos, Stage, Step, StepObserver};
use maze_grid::{Grid, Maze};
use rand::Rng;
use tracing::{trace, warn};

/// Random picks allowed per requested wall before giving up.
///
/// Stands in for retrying until every wall is placed. Only requests the
/// layout cannot satisfy reach the cap; valid mazes with at most 50
/// requested walls finish well before it.
pub const ATTEMPTS_PER_WALL: usize = 1000;

/// Outcome of a secondary wall-removal pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// Walls asked for.
    pub requested: usize,
    /// Walls actually opened.
    pub removed: usize,
    /// Random picks made.
    pub attempts: usize,
    /// Picks touching a zone cell.
    pub rejected_zone: usize,
    /// Picks whose wall was already open.
    pub rejected_open: usize,
    /// Picks that would have left an empty pole.
    pub rejected_pole: usize,
}

impl RemovalReport {
    /// Total rejected picks.
    pub fn rejected(&self) -> usize {
        self.rejected_zone + self.rejected_open + self.rejected_pole
    }

    /// Every requested wall was removed.
    pub fn is_complete(&self) -> bool {
        self.removed == self.requested
    }
}

/// Whether the corner reached by walking `dir` then turning clockwise
/// twice from `pos` has none of its three other walls.
///
/// Removing the wall on side `dir` of `pos` would then leave a 2×2 block
/// with no wall touching the corner. Steps that leave the grid count as
/// hitting the border, which is never empty.
pub fn is_pole_empty(grid: &Grid, pos: Pos, dir: Direction) -> bool {
    let mut cur = pos;
    let mut heading = dir;
    for _ in 0..3 {
        let Some(next) = grid.step(cur, heading) else {
            return false;
        };
        cur = next;
        heading = heading.clockwise();
        if !matches!(grid.has_wall(cur, heading), Ok(false)) {
            return false;
        }
    }
    true
}

/// Open up to `count` extra interior walls.
///
/// Each attempt picks a cell away from the border and one of its
/// neighbours at random. The pick is rejected when either cell is in a
/// zone, when the wall is already open, or when an empty pole would
/// appear at either end of the wall. Gives up after
/// `ATTEMPTS_PER_WALL * count` attempts.
pub fn remove_random_walls(
    maze: &mut Maze,
    count: usize,
    observer: &mut dyn StepObserver,
) -> Result<RemovalReport, MazeError> {
    let mut report = RemovalReport {
        requested: count,
        ..RemovalReport::default()
    };
    let (height, width) = (maze.height(), maze.width());
    if count == 0 || height < 3 || width < 3 {
        return Ok(report);
    }
    let budget = ATTEMPTS_PER_WALL * count;
    let (grid, rng) = maze.parts_mut();

    while report.removed < count && report.attempts < budget {
        report.attempts += 1;
        let pos = Pos::new(rng.random_range(1..=height - 2), rng.random_range(1..=width - 2));
        let Some((nb, dir)) = grid.neighbor(pos, None, true, rng) else {
            continue;
        };

        if grid.cell(pos)?.zone().is_special() || grid.cell(nb)?.zone().is_special() {
            report.rejected_zone += 1;
            continue;
        }
        if !grid.has_wall(pos, dir)? {
            report.rejected_open += 1;
            continue;
        }
        if is_pole_empty(grid, pos, dir) || is_pole_empty(grid, nb, dir.opposite()) {
            trace!(%pos, %dir, "wall kept: empty pole");
            report.rejected_pole += 1;
            continue;
        }

        grid.remove_wall(pos, dir)?;
        report.removed += 1;
        observer.on_step(&Step {
            stage: Stage::Generation,
            pos,
            built: false,
            finished: false,
            view: &*grid,
        });
    }

    if !report.is_complete() {
        warn!(
            requested = report.requested,
            removed = report.removed,
            attempts = report.attempts,
            "wall removal budget exhausted"
        );
    }
    Ok(report)
}
