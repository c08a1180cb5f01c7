//! The guard's transition rule.

use crate::core::{GuardState, Outcome};
use crate::grid::{Grid, GridError};

/// Result of executing a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Moved one cell forward, facing unchanged.
    Moved(GuardState),

    /// Blocked by an obstacle; rotated clockwise in place.
    Turned(GuardState),

    /// The next step would leave the grid. Carries the last state inside it.
    Exited(GuardState),

    /// Reached a state that was already recorded.
    Looped(GuardState),
}

impl StepResult {
    /// The guard state after this step.
    pub fn state(&self) -> GuardState {
        match *self {
            Self::Moved(state) | Self::Turned(state) | Self::Exited(state) | Self::Looped(state) => {
                state
            }
        }
    }

    /// Terminal outcome, if this step ended the run.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Exited(_) => Some(Outcome::Exited),
            Self::Looped(_) => Some(Outcome::Looping),
            Self::Moved(_) | Self::Turned(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Apply the movement rule once (pure).
///
/// Looks at the cell ahead: leaving the grid exits, an obstacle turns the
/// guard clockwise without moving, anything else is walked onto. Never
/// returns `Looped`; repetition is the state machine's concern.
pub fn transition(grid: &Grid, state: GuardState) -> Result<StepResult, GridError> {
    let Some(next) = grid.offset(state.position, state.direction) else {
        return Ok(StepResult::Exited(state));
    };

    if grid.cell_at(next)?.is_obstacle() {
        Ok(StepResult::Turned(state.turned()))
    } else {
        Ok(StepResult::Moved(GuardState::new(next, state.direction)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Position};

    fn at(row: usize, col: usize, direction: Direction) -> GuardState {
        GuardState::new(Position::new(row, col), direction)
    }

    #[test]
    fn open_cell_is_walked_onto() {
        let grid = Grid::parse("...\n.^.\n...").unwrap();
        let result = transition(&grid, at(1, 1, Direction::North)).unwrap();
        assert_eq!(result, StepResult::Moved(at(0, 1, Direction::North)));
        assert!(!result.is_terminal());
    }

    #[test]
    fn obstacle_turns_in_place() {
        let grid = Grid::parse(".#.\n.^.\n...").unwrap();
        let result = transition(&grid, at(1, 1, Direction::North)).unwrap();
        assert_eq!(result, StepResult::Turned(at(1, 1, Direction::East)));
    }

    #[test]
    fn guard_start_cell_is_walkable() {
        let grid = Grid::parse("^..").unwrap();
        let result = transition(&grid, at(0, 1, Direction::West)).unwrap();
        assert_eq!(result, StepResult::Moved(at(0, 0, Direction::West)));
    }

    #[test]
    fn edge_exits() {
        let grid = Grid::parse("^").unwrap();
        let result = transition(&grid, at(0, 0, Direction::North)).unwrap();
        assert_eq!(result, StepResult::Exited(at(0, 0, Direction::North)));
        assert_eq!(result.outcome(), Some(Outcome::Exited));
    }

    #[test]
    fn far_edge_exits() {
        let grid = Grid::parse("..\n.>").unwrap();
        let result = transition(&grid, at(1, 1, Direction::East)).unwrap();
        assert_eq!(result.outcome(), Some(Outcome::Exited));
    }
}
