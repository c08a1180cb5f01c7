//! Guard state and run outcomes.
//!
//! A `GuardState` is the full identity of the guard at one instant. The
//! simulation is deterministic, so two runs that reach the same
//! `GuardState` on the same grid have identical futures.

use super::position::{Direction, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position and facing of the guard.
///
/// This is the key used for loop detection. Comparing positions alone is
/// not enough: the guard legitimately crosses its own path facing another way.
///
/// # Example
///
/// ```rust
/// use patrol::core::{Direction, GuardState, Position};
///
/// let state = GuardState::new(Position::new(6, 4), Direction::North);
/// let turned = state.turned();
///
/// assert_eq!(turned.position, state.position);
/// assert_eq!(turned.direction, Direction::East);
/// assert_ne!(state, turned);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardState {
    pub position: Position,
    pub direction: Direction,
}

impl GuardState {
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Same position, facing rotated clockwise.
    pub const fn turned(self) -> Self {
        Self {
            position: self.position,
            direction: self.direction.turn_right(),
        }
    }

    /// Position in front of the guard, if it has non-negative coordinates.
    pub fn ahead(self) -> Option<Position> {
        self.position.step(self.direction)
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}

/// Terminal classification of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The guard's next step would leave the grid.
    Exited,
    /// A guard state repeated; the guard patrols forever.
    Looping,
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Exited => "Exited",
            Self::Looping => "Looping",
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, Self::Looping)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turned_keeps_position() {
        let state = GuardState::new(Position::new(2, 3), Direction::West);
        let turned = state.turned();
        assert_eq!(turned.position, Position::new(2, 3));
        assert_eq!(turned.direction, Direction::North);
    }

    #[test]
    fn ahead_follows_direction() {
        let state = GuardState::new(Position::new(2, 3), Direction::South);
        assert_eq!(state.ahead(), Some(Position::new(3, 3)));

        let edge = GuardState::new(Position::new(0, 3), Direction::North);
        assert_eq!(edge.ahead(), None);
    }

    #[test]
    fn states_differ_by_direction() {
        let pos = Position::new(1, 1);
        assert_ne!(
            GuardState::new(pos, Direction::North),
            GuardState::new(pos, Direction::South)
        );
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::Exited.name(), "Exited");
        assert_eq!(Outcome::Looping.name(), "Looping");
        assert!(Outcome::Looping.is_loop());
        assert!(!Outcome::Exited.is_loop());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = GuardState::new(Position::new(4, 7), Direction::East);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GuardState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
