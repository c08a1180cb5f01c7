//! Grid coordinates and compass headings.
//!
//! Both types are small `Copy` values. Neither knows the grid's size:
//! `Position::step` only rejects moves below row or column zero, and the
//! upper bound is checked by the grid itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate, row first.
///
/// Ordering is raster order: top to bottom, then left to right.
///
/// # Example
///
/// ```rust
/// use patrol::core::{Direction, Position};
///
/// let pos = Position::new(0, 3);
/// assert_eq!(pos.step(Direction::East), Some(Position::new(0, 4)));
/// assert_eq!(pos.step(Direction::North), None);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one unit towards `direction`.
    ///
    /// Returns `None` when the step would produce a negative coordinate.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.displacement();
        Some(Self {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Facing of the guard.
///
/// Rotation is always clockwise: North, East, South, West, then North again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order starting from North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit displacement as `(row delta, column delta)`.
    pub const fn displacement(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }

    /// The heading after a 90 degree clockwise turn.
    pub const fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Parse a guard marker (`^`, `>`, `v`, `<`).
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '^' => Some(Self::North),
            '>' => Some(Self::East),
            'v' => Some(Self::South),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    /// The guard marker for this heading.
    pub const fn marker(self) -> char {
        match self {
            Self::North => '^',
            Self::East => '>',
            Self::South => 'v',
            Self::West => '<',
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
