//! Patrol: deterministic guard patrol simulation
//!
//! A single guard walks a rectangular grid. It steps forward while the cell
//! ahead is open, turns right when the cell ahead is an obstacle, and stops
//! when its next step would leave the grid. This crate answers two
//! questions about such a grid:
//!
//! 1. How many distinct cells does the guard visit before leaving?
//! 2. For how many single added obstructions does the guard instead patrol
//!    forever?
//!
//! # Core Concepts
//!
//! - **Grid**: Parsed, validated, read-only map (`grid` module)
//! - **GuardState**: Position and facing, the identity used for loop detection
//! - **GuardStateMachine**: Bounded single-run simulation (`machine` module)
//! - **ObstructionSearch**: Independent trials, optionally parallel (`search` module)
//!
//! # Example
//!
//! ```rust
//! use patrol::grid::Grid;
//! use patrol::search::ObstructionSearch;
//!
//! let input = "\
//! ....#.....
//! .........#
//! ..........
//! ..#.......
//! .......#..
//! ..........
//! .#..^.....
//! ........#.
//! #.........
//! ......#...";
//!
//! let summary = patrol::solve(input, &ObstructionSearch::new()).unwrap();
//! assert_eq!(summary.visited_cells, 41);
//! assert_eq!(summary.loop_obstructions, 6);
//! ```

pub mod core;
pub mod grid;
pub mod logging;
pub mod machine;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Direction, GuardState, Outcome, Position, StateHistory};
pub use crate::grid::{Cell, Grid, GridError};
pub use crate::machine::{GuardStateMachine, RunReport, SimulationError};
pub use crate::search::{find_obstruction_positions, CandidateStrategy, ObstructionSearch};

use serde::{Deserialize, Serialize};

/// The two answers for one grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Distinct cells visited by the unobstructed guard.
    pub visited_cells: usize,
    /// Cells where one added obstruction makes the guard loop.
    pub loop_obstructions: usize,
}

/// Parse `input`, run the guard, and search for loop obstructions.
pub fn solve(input: &str, search: &ObstructionSearch) -> Result<Summary, SimulationError> {
    let grid = Grid::parse(input)?;
    let report = GuardStateMachine::run(&grid)?;
    let obstructions = search.find_obstruction_positions(&grid)?;

    Ok(Summary {
        visited_cells: report.visited_count(),
        loop_obstructions: obstructions.len(),
    })
}
