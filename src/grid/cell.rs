//! Grid cell contents.

use crate::core::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Obstacle,
    /// The guard's starting cell and initial facing. Walkable.
    GuardStart(Direction),
}

impl Cell {
    pub const EMPTY: char = '.';
    pub const OBSTACLE: char = '#';

    /// Parse a single map character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::EMPTY => Some(Self::Empty),
            Self::OBSTACLE => Some(Self::Obstacle),
            other => Direction::from_marker(other).map(Self::GuardStart),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Empty => Self::EMPTY,
            Self::Obstacle => Self::OBSTACLE,
            Self::GuardStart(direction) => direction.marker(),
        }
    }

    pub fn is_obstacle(self) -> bool {
        matches!(self, Self::Obstacle)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn guard_direction(self) -> Option<Direction> {
        match self {
            Self::GuardStart(direction) => Some(direction),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
