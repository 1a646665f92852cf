//! Staged maze construction.

use crate::backtrack::carve_path;
use crate::walls::{remove_random_walls, RemovalReport};
use crate::zones::carve_zones;
use maze_core::{MazeError, Stage, Step, StepObserver};
use maze_grid::Maze;
use tracing::debug;

/// One stage of maze construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildStep {
    /// Tag and open the start and end zones.
    Zones,
    /// Carve the spanning tree.
    Path,
    /// Remove secondary walls to create loops.
    Multiple,
}

impl BuildStep {
    /// Every step in execution order.
    pub const ALL: [BuildStep; 3] = [BuildStep::Zones, BuildStep::Path, BuildStep::Multiple];
}

/// What a [`Generator::run`] call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Steps executed by this call, in order.
    pub executed: Vec<BuildStep>,
    /// Cells reached by the path carve, when it ran.
    pub carved: Option<usize>,
    /// Outcome of secondary wall removal, when it ran.
    pub removal: Option<RemovalReport>,
}

/// Builds mazes in stages.
///
/// ```
/// use maze_core::NoopObserver;
/// use maze_gen::Generator;
/// use maze_grid::Maze;
///
/// let mut maze = Maze::new(16, 16, 7).unwrap();
/// let report = Generator::new(15).generate(&mut maze, &mut NoopObserver).unwrap();
/// assert!(maze.progress().is_final());
/// assert_eq!(report.executed.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generator {
    remove_walls: usize,
}

impl Generator {
    /// A generator that opens `remove_walls` extra walls in the
    /// [`BuildStep::Multiple`] stage.
    pub fn new(remove_walls: usize) -> Self {
        Self { remove_walls }
    }

    /// Extra walls requested per build.
    pub fn remove_walls(&self) -> usize {
        self.remove_walls
    }

    /// Run the requested steps that have not yet run on `maze`.
    ///
    /// Steps always execute in [`BuildStep::ALL`] order whatever the
    /// order of `steps`. `Multiple` only runs once `Path` has completed,
    /// either earlier or in this call.
    ///
    /// When any step ran, `observer` gets one closing `Generation` step at
    /// the start cell with `finished` set and `built` reflecting whether
    /// the maze is now complete.
    pub fn run(
        &self,
        maze: &mut Maze,
        steps: &[BuildStep],
        observer: &mut dyn StepObserver,
    ) -> Result<BuildReport, MazeError> {
        let mut report = BuildReport::default();

        if !maze.progress().zones && steps.contains(&BuildStep::Zones) {
            carve_zones(maze, observer)?;
            maze.progress_mut().zones = true;
            report.executed.push(BuildStep::Zones);
            debug!(end = %maze.end(), "zones carved");
        }

        if !maze.progress().path && steps.contains(&BuildStep::Path) {
            let carved = carve_path(maze, observer)?;
            maze.progress_mut().path = true;
            report.executed.push(BuildStep::Path);
            report.carved = Some(carved);
            debug!(carved, "single path carved");
        }

        if !maze.progress().multiple
            && maze.progress().path
            && steps.contains(&BuildStep::Multiple)
        {
            let removal = remove_random_walls(maze, self.remove_walls, observer)?;
            maze.progress_mut().multiple = true;
            report.executed.push(BuildStep::Multiple);
            report.removal = Some(removal);
            debug!(
                removed = removal.removed,
                rejected = removal.rejected(),
                "secondary walls removed"
            );
        }

        if !report.executed.is_empty() {
            observer.on_step(&Step {
                stage: Stage::Generation,
                pos: maze.start(),
                built: maze.progress().is_final(),
                finished: true,
                view: maze.grid(),
            });
        }
        Ok(report)
    }

    /// Run every step.
    pub fn generate(
        &self,
        maze: &mut Maze,
        observer: &mut dyn StepObserver,
    ) -> Result<BuildReport, MazeError> {
        self.run(maze, &BuildStep::ALL, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::NoopObserver;
    use maze_test_utils::RecordingObserver;

    #[test]
    fn steps_run_once() {
        let mut maze = Maze::new(8, 8, 0).unwrap();
        let generator = Generator::new(3);
        let first = generator.generate(&mut maze, &mut NoopObserver).unwrap();
        assert_eq!(first.executed, BuildStep::ALL.to_vec());
        let digest = maze.digest();

        let second = generator.generate(&mut maze, &mut NoopObserver).unwrap();
        assert!(second.executed.is_empty());
        assert_eq!(maze.digest(), digest);
    }

    #[test]
    fn multiple_waits_for_path() {
        let mut maze = Maze::new(8, 8, 0).unwrap();
        let generator = Generator::new(3);
        let report = generator
            .run(&mut maze, &[BuildStep::Zones, BuildStep::Multiple], &mut NoopObserver)
            .unwrap();
        assert_eq!(report.executed, vec![BuildStep::Zones]);
        assert!(report.removal.is_none());
        assert!(!maze.progress().multiple);
        assert!(!maze.progress().is_final());

        let report = generator
            .run(&mut maze, &[BuildStep::Multiple, BuildStep::Path], &mut NoopObserver)
            .unwrap();
        assert_eq!(report.executed, vec![BuildStep::Path, BuildStep::Multiple]);
        assert!(maze.progress().is_final());
    }

    #[test]
    fn path_only_is_final() {
        let mut maze = Maze::new(8, 8, 2).unwrap();
        let report = Generator::new(0)
            .run(&mut maze, &[BuildStep::Zones, BuildStep::Path], &mut NoopObserver)
            .unwrap();
        assert!(maze.progress().is_final());
        assert_eq!(report.carved, Some(64 - 9));
    }

    #[test]
    fn closing_step_reports_build_state() {
        let mut maze = Maze::new(8, 8, 4).unwrap();
        let generator = Generator::new(2);
        let mut recorder = RecordingObserver::new();
        generator
            .run(&mut maze, &[BuildStep::Zones], &mut recorder)
            .unwrap();
        let last = *recorder.steps().last().unwrap();
        assert!(last.finished && !last.built);
        assert_eq!(recorder.steps().iter().filter(|s| s.finished).count(), 1);

        let mut recorder = RecordingObserver::new();
        generator.generate(&mut maze, &mut recorder).unwrap();
        let steps = recorder.steps();
        let (last, rest) = steps.split_last().unwrap();
        assert_eq!(last.stage, Stage::Generation);
        assert_eq!(last.pos, maze.start());
        assert!(last.built && last.finished);
        assert!(rest.iter().all(|s| !s.built && !s.finished));

        let mut recorder = RecordingObserver::new();
        generator.generate(&mut maze, &mut recorder).unwrap();
        assert!(recorder.is_empty());
    }
}
