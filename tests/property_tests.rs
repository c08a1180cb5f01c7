//! Property-based tests for the patrol simulation.
//!
//! These tests use proptest to check run and search properties across
//! many small randomly generated grids.

use patrol::core::{Direction, Outcome};
use patrol::grid::{Cell, Grid};
use patrol::machine::GuardStateMachine;
use patrol::search::{CandidateStrategy, ObstructionSearch};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_direction()(variant in 0..4usize) -> Direction {
        Direction::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_grid()(rows in 1usize..7, cols in 1usize..7)(
        obstacles in prop::collection::vec(prop::bool::weighted(0.25), rows * cols),
        guard in 0..rows * cols,
        direction in arbitrary_direction(),
        cols in Just(cols)
    ) -> Grid {
        let mut text = String::new();
        for (i, blocked) in obstacles.iter().enumerate() {
            if i > 0 && i % cols == 0 {
                text.push('\n');
            }
            text.push(if i == guard {
                direction.marker()
            } else if *blocked {
                Cell::OBSTACLE
            } else {
                Cell::EMPTY
            });
        }
        Grid::parse(&text).unwrap()
    }
}

fn sequential(strategy: CandidateStrategy) -> ObstructionSearch {
    ObstructionSearch::builder()
        .strategy(strategy)
        .parallel(false)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn run_terminates_within_bound(grid in arbitrary_grid()) {
        let report = GuardStateMachine::run(&grid).unwrap();
        prop_assert!(report.steps >= 1);
        prop_assert!(report.steps <= 4 * grid.rows() * grid.cols() + 1);
    }

    #[test]
    fn run_is_deterministic(grid in arbitrary_grid()) {
        let first = GuardStateMachine::run(&grid).unwrap();
        let second = GuardStateMachine::run(&grid).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn classify_agrees_with_run(grid in arbitrary_grid()) {
        let report = GuardStateMachine::run(&grid).unwrap();
        let outcome = GuardStateMachine::classify(&grid).unwrap();
        prop_assert_eq!(report.outcome, outcome);
    }

    #[test]
    fn path_holds_one_new_state_per_step(grid in arbitrary_grid()) {
        let report = GuardStateMachine::run(&grid).unwrap();
        prop_assert_eq!(report.path.len(), report.steps);
        prop_assert_eq!(report.path[0], grid.locate_guard_start().unwrap());
    }

    #[test]
    fn visited_cells_are_walkable(grid in arbitrary_grid()) {
        let report = GuardStateMachine::run(&grid).unwrap();
        let start = grid.locate_guard_start().unwrap();
        prop_assert!(report.visited.contains(&start.position));
        for pos in &report.visited {
            prop_assert!(!grid.cell_at(*pos).unwrap().is_obstacle());
        }
    }

    #[test]
    fn unobstructed_grid_always_exits(
        rows in 1usize..8,
        cols in 1usize..8,
        direction in arbitrary_direction(),
        row_pick in 0usize..8,
        col_pick in 0usize..8
    ) {
        let guard = (row_pick % rows) * cols + col_pick % cols;
        let text: String = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| if r * cols + c == guard { direction.marker() } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        let grid = Grid::parse(&text).unwrap();
        prop_assert_eq!(GuardStateMachine::classify(&grid).unwrap(), Outcome::Exited);
    }

    #[test]
    fn search_never_proposes_start_or_obstacle(grid in arbitrary_grid()) {
        let start = grid.locate_guard_start().unwrap();
        let found = sequential(CandidateStrategy::Exhaustive)
            .find_obstruction_positions(&grid)
            .unwrap();

        prop_assert!(!found.contains(&start.position));
        for pos in &found {
            prop_assert_eq!(grid.cell_at(*pos).unwrap(), Cell::Empty);
        }
    }

    #[test]
    fn found_obstructions_really_loop(grid in arbitrary_grid()) {
        let found = sequential(CandidateStrategy::PatrolPath)
            .find_obstruction_positions(&grid)
            .unwrap();

        for pos in found {
            let variant = grid.with_obstruction(pos).unwrap();
            prop_assert_eq!(GuardStateMachine::classify(&variant).unwrap(), Outcome::Looping);
        }
    }

    #[test]
    fn strategies_agree(grid in arbitrary_grid()) {
        let exhaustive = sequential(CandidateStrategy::Exhaustive)
            .find_obstruction_positions(&grid)
            .unwrap();
        let on_path = sequential(CandidateStrategy::PatrolPath)
            .find_obstruction_positions(&grid)
            .unwrap();
        let parallel = ObstructionSearch::new().find_obstruction_positions(&grid).unwrap();

        prop_assert_eq!(&exhaustive, &on_path);
        prop_assert_eq!(&exhaustive, &parallel);
    }
}
