//! The patrol grid.
//!
//! A `Grid` is parsed once from text and treated as read-only afterwards.
//! Obstruction trials never mutate it: `with_obstruction` returns an
//! independent copy, so any number of trials can share the original.

mod cell;
mod error;
mod validation;

pub use cell::Cell;
pub use error::{GridError, ValidationError};

use crate::core::{Direction, GuardState, Position};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Fixed `rows x cols` array of cells, stored in raster order.
///
/// # Example
///
/// ```rust
/// use patrol::core::{Direction, Position};
/// use patrol::grid::{Cell, Grid};
///
/// let grid = Grid::parse("..#\n.^.\n...").unwrap();
///
/// assert_eq!(grid.rows(), 3);
/// assert_eq!(grid.cell_at(Position::new(0, 2)).unwrap(), Cell::Obstacle);
///
/// let start = grid.locate_guard_start().unwrap();
/// assert_eq!(start.position, Position::new(1, 1));
/// assert_eq!(start.direction, Direction::North);
///
/// let blocked = grid.with_obstruction(Position::new(0, 1)).unwrap();
/// assert_eq!(blocked.cell_at(Position::new(0, 1)).unwrap(), Cell::Obstacle);
/// assert_eq!(grid.cell_at(Position::new(0, 1)).unwrap(), Cell::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parse grid text, one row per line.
    ///
    /// Trailing line terminators at the end of the input are ignored. Any
    /// other stray character, trailing spaces included, is a violation. All
    /// shape and character violations are collected into `GridError::Invalid`.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = input.trim_end_matches(['\n', '\r']).lines().collect();
        let validated = validation::validate_rows(&lines).map_err(GridError::Invalid)?;

        debug!(
            rows = validated.rows,
            cols = validated.cols,
            "parsed grid"
        );

        Ok(Self {
            rows: validated.rows,
            cols: validated.cols,
            cells: validated.cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// The in-bounds neighbour of `pos` towards `direction`, if any.
    pub fn offset(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|next| self.is_in_bounds(*next))
    }

    pub fn cell_at(&self, pos: Position) -> Result<Cell, GridError> {
        self.index(pos)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// All positions in raster order.
    ///
    /// The iterator does not borrow the grid and can be cloned to restart.
    pub fn positions(&self) -> impl Iterator<Item = Position> + Clone {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Position::new(i / cols, i % cols))
    }

    /// All cells with their positions, in raster order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + Clone + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Positions of cells that are `Empty`, in raster order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + Clone + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
    }

    /// Find the single guard marker.
    pub fn locate_guard_start(&self) -> Result<GuardState, GridError> {
        let mut markers = self.cells().filter_map(|(pos, cell)| {
            cell.guard_direction()
                .map(|direction| GuardState::new(pos, direction))
        });

        let start = markers.next().ok_or(GridError::NoGuard)?;
        let extra: Vec<Position> = markers.map(|state| state.position).collect();
        if !extra.is_empty() {
            let mut positions = Vec::with_capacity(extra.len() + 1);
            positions.push(start.position);
            positions.extend(extra);
            return Err(GridError::MultipleGuards { positions });
        }

        Ok(start)
    }

    /// A copy of this grid with `pos` turned into an obstacle.
    ///
    /// Only `Empty` cells can be obstructed; the guard start and existing
    /// obstacles are rejected. The receiver is left unchanged.
    pub fn with_obstruction(&self, pos: Position) -> Result<Self, GridError> {
        let cell = self.cell_at(pos)?;
        if !cell.is_empty() {
            return Err(GridError::InvalidObstruction {
                position: pos,
                cell,
            });
        }

        let mut cells = self.cells.clone();
        cells[pos.row * self.cols + pos.col] = Cell::Obstacle;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.is_in_bounds(pos).then(|| pos.row * self.cols + pos.col)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
