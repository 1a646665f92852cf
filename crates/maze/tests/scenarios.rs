//! End-to-end scenarios through the facade.

use maze::prelude::*;
use maze_test_utils::{
    assert_all_reachable, assert_border_closed, assert_no_open_block, assert_valid_path,
    assert_walls_symmetric, RecordingObserver,
};
use proptest::prelude::*;

fn config(height: usize, width: usize, seed: u64, remove_walls: usize) -> MazeConfig {
    MazeConfig {
        height,
        width,
        seed,
        remove_walls,
        ..MazeConfig::default()
    }
}

// ── Contest mode ────────────────────────────────────────────────

#[test]
fn contest_end_is_entered_travelling_left() {
    for seed in 0..8 {
        let config = config(8, 8, seed, 0).with_contest_mode();
        let run = generate_and_solve(&config, &mut NoopObserver).unwrap();
        let maze = &run.maze;
        assert_eq!(maze.end(), Pos::new(4, 4));
        for (algorithm, path) in maze.paths() {
            assert_valid_path(maze, path);
            let n = path.len();
            assert_eq!(path[n - 2], Pos::new(4, 5), "{algorithm} seed {seed}");
            assert_eq!(
                path[n - 2].direction_to(path[n - 1]),
                Some(Direction::Left)
            );
        }
        assert_eq!(maze.paths().len(), 5);
    }
}

#[test]
fn contest_end_survives_wall_removal() {
    let config = config(16, 16, 5, 30).with_contest_mode();
    let run = generate_and_solve(&config, &mut NoopObserver).unwrap();
    let path = run.maze.path(Algorithm::Bfs).unwrap();
    assert_eq!(path[path.len() - 2], Pos::new(8, 9));
}

// ── Wall removal ────────────────────────────────────────────────

#[test]
fn five_removals_open_five_walls() {
    for seed in 0..5 {
        let mut single = config(16, 16, seed, 5).new_maze().unwrap();
        let generator = Generator::new(5);
        generator
            .run(
                &mut single,
                &[BuildStep::Zones, BuildStep::Path],
                &mut NoopObserver,
            )
            .unwrap();
        let before = single.grid().open_walls();
        let report = generator.generate(&mut single, &mut NoopObserver).unwrap();
        assert_eq!(report.removal.unwrap().removed, 5);
        assert_eq!(single.grid().open_walls(), before + 5, "seed {seed}");
    }
}

// ── Wall edits ──────────────────────────────────────────────────

#[test]
fn wall_edits_are_idempotent_and_symmetric() {
    let mut run = generate(&config(10, 10, 2, 5), &mut NoopObserver).unwrap();
    let maze = &mut run.maze;
    maze.insert_wall(Pos::new(5, 5), Direction::Up).unwrap();
    let once = maze.grid().wall_bytes();
    assert!(!maze.insert_wall(Pos::new(5, 5), Direction::Up).unwrap());
    assert_eq!(maze.grid().wall_bytes(), once);
    assert!(maze.grid().has_wall(Pos::new(4, 5), Direction::Down).unwrap());
    assert!(matches!(
        maze.remove_wall(Pos::new(9, 9), Direction::Down),
        Err(MazeError::InvalidModification { .. })
    ));
    assert_walls_symmetric(maze.grid());
}

#[test]
fn wall_matrix_round_trips_through_a_fresh_maze() {
    let run = generate(&config(12, 16, 8, 10), &mut NoopObserver).unwrap();
    let bytes = run.maze.grid().wall_bytes();
    let mut copy = Maze::new(12, 16, 0).unwrap();
    copy.grid_mut().load_wall_bytes(&bytes).unwrap();
    assert_eq!(copy.grid().wall_bytes(), bytes);
    assert_eq!(copy.digest(), run.maze.digest());
}

// ── Observation ─────────────────────────────────────────────────

#[test]
fn observer_sees_generation_then_solving() {
    let mut recorder = RecordingObserver::new();
    let config = MazeConfig {
        algorithms: vec![Algorithm::Bfs],
        ..config(8, 8, 1, 3)
    };
    let run = generate_and_solve(&config, &mut recorder).unwrap();
    let steps = recorder.steps();
    let first_solve = steps
        .iter()
        .position(|s| s.stage == Stage::Solve(Algorithm::Bfs))
        .unwrap();
    assert!(first_solve > 1);
    let (closing, carving) = steps[..first_solve].split_last().unwrap();
    assert!(carving.iter().all(|s| s.stage == Stage::Generation && !s.built));
    assert_eq!(closing.stage, Stage::Generation);
    assert!(closing.built && closing.finished);
    assert!(steps[first_solve..].iter().all(|s| s.built));
    assert!(steps.last().unwrap().finished);
    assert_eq!(run.maze.solved().len(), 1);
}

#[test]
fn reset_allows_clean_comparison() {
    let mut run = generate_and_solve(&config(10, 10, 6, 5), &mut NoopObserver).unwrap();
    run.maze.reset_solutions();
    assert!(run.maze.paths().is_empty());
    Solver::solve(&mut run.maze, &[Algorithm::Dfs], &mut NoopObserver).unwrap();
    let stats = PathStats::for_algorithm(&run.maze, Algorithm::Dfs).unwrap();
    let marked = run
        .maze
        .grid()
        .cells()
        .filter(|c| !c.visited().is_empty())
        .count();
    assert_eq!(marked, stats.visited);
}

// ── Properties ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_mazes_hold_structural_invariants(
        height in 8usize..24,
        width in 8usize..24,
        seed in any::<u64>(),
        remove_walls in 0usize..=50,
        contest in any::<bool>(),
    ) {
        let mut config = config(height, width, seed, remove_walls);
        if contest {
            config = config.with_contest_mode();
        }
        let run = generate(&config, &mut NoopObserver).unwrap();
        assert_walls_symmetric(run.maze.grid());
        assert_border_closed(run.maze.grid());
        assert_all_reachable(&run.maze);
        assert_no_open_block(&run.maze);
    }

    #[test]
    fn same_config_same_maze(seed in any::<u64>()) {
        let config = config(12, 12, seed, 10);
        let a = generate(&config, &mut NoopObserver).unwrap();
        let b = generate(&config, &mut NoopObserver).unwrap();
        prop_assert_eq!(a.maze.digest(), b.maze.digest());
        prop_assert_eq!(a.maze.end(), b.maze.end());
    }
}
