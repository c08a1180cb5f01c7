//! Search for obstructions that trap the guard in a loop.
//!
//! Each candidate cell is tried on its own copy of the grid, so trials
//! share nothing but the read-only original and can run in any order or
//! on any number of worker threads.
//!
//! # Example
//!
//! ```rust
//! use patrol::core::Position;
//! use patrol::grid::Grid;
//! use patrol::search::{CandidateStrategy, ObstructionSearch};
//!
//! let grid = Grid::parse(".#..\n...#\n....\n^.#.").unwrap();
//! let search = ObstructionSearch::builder()
//!     .strategy(CandidateStrategy::Exhaustive)
//!     .parallel(false)
//!     .build()
//!     .unwrap();
//!
//! let found = search.find_obstruction_positions(&grid).unwrap();
//! assert!(!found.contains(&Position::new(3, 0)));
//! ```

mod builder;
mod error;

pub use builder::SearchBuilder;
pub use error::BuildError;

use crate::core::{GuardState, Position};
use crate::grid::Grid;
use crate::machine::{GuardStateMachine, SimulationError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, instrument, trace};

/// Which cells are tried as obstructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStrategy {
    /// Every empty cell except the guard start.
    Exhaustive,

    /// Only empty cells the unobstructed guard walks through. An obstruction
    /// anywhere else leaves the run unchanged, so the result is identical.
    /// Falls back to `Exhaustive` when the unobstructed run already loops.
    #[default]
    PatrolPath,
}

#[derive(Debug)]
pub(crate) enum Execution {
    Sequential,
    /// `None` uses the global rayon pool.
    Parallel(Option<rayon::ThreadPool>),
}

/// Finds every cell whose obstruction leaves the guard patrolling forever.
#[derive(Debug)]
pub struct ObstructionSearch {
    strategy: CandidateStrategy,
    execution: Execution,
}

impl ObstructionSearch {
    /// Parallel search over the patrol path.
    pub fn new() -> Self {
        Self {
            strategy: CandidateStrategy::default(),
            execution: Execution::Parallel(None),
        }
    }

    pub fn builder() -> SearchBuilder {
        SearchBuilder::new()
    }

    pub fn strategy(&self) -> CandidateStrategy {
        self.strategy
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self.execution, Execution::Parallel(_))
    }

    /// Cells to try, in raster order.
    ///
    /// Never includes the start cell or a pre-existing obstacle.
    pub fn candidates(
        &self,
        grid: &Grid,
        start: GuardState,
    ) -> Result<Vec<Position>, SimulationError> {
        let exhaustive = || -> Vec<Position> {
            grid.empty_positions()
                .filter(|pos| *pos != start.position)
                .collect()
        };

        let candidates = match self.strategy {
            CandidateStrategy::Exhaustive => exhaustive(),
            CandidateStrategy::PatrolPath => {
                let mut machine = GuardStateMachine::from_state(grid, start);
                if machine.run_to_end()?.is_loop() {
                    // Already looping: every off-path obstruction keeps it so.
                    return Ok(exhaustive());
                }

                let mut on_path = Vec::new();
                for pos in machine.history().positions() {
                    if pos != start.position && grid.cell_at(pos)?.is_empty() {
                        on_path.push(pos);
                    }
                }
                on_path.sort_unstable();
                on_path
            }
        };
        Ok(candidates)
    }

    /// Every candidate whose obstruction makes the guard loop.
    #[instrument(skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
    pub fn find_obstruction_positions(
        &self,
        grid: &Grid,
    ) -> Result<BTreeSet<Position>, SimulationError> {
        let start = grid.locate_guard_start()?;
        let candidates = self.candidates(grid, start)?;
        info!(
            candidates = candidates.len(),
            strategy = ?self.strategy,
            parallel = self.is_parallel(),
            "searching for loop obstructions"
        );

        let trial = |candidate: &Position| try_obstruction(grid, start, *candidate).transpose();
        let found: Result<BTreeSet<Position>, SimulationError> = match &self.execution {
            Execution::Sequential => candidates.iter().filter_map(trial).collect(),
            Execution::Parallel(None) => candidates.par_iter().filter_map(trial).collect(),
            Execution::Parallel(Some(pool)) => {
                pool.install(|| candidates.par_iter().filter_map(trial).collect())
            }
        };
        let found = found?;

        info!(found = found.len(), "obstruction search finished");
        Ok(found)
    }
}

impl Default for ObstructionSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify one obstruction trial on a private copy of the grid.
fn try_obstruction(
    grid: &Grid,
    start: GuardState,
    candidate: Position,
) -> Result<Option<Position>, SimulationError> {
    let variant = grid.with_obstruction(candidate)?;
    let outcome = GuardStateMachine::classify_from(&variant, start)?;
    if outcome.is_loop() {
        trace!(%candidate, "obstruction traps the guard");
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

/// Loop-inducing obstructions using the default search.
pub fn find_obstruction_positions(grid: &Grid) -> Result<BTreeSet<Position>, SimulationError> {
    ObstructionSearch::new().find_obstruction_positions(grid)
}
