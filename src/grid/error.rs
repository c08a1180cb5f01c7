//! Grid error types.

use crate::core::Position;
use crate::grid::Cell;
use thiserror::Error;

/// A single problem found while validating grid text.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Grid input is empty")]
    EmptyGrid,

    #[error("Row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown character {found:?} at row {row}, column {col}")]
    UnknownCharacter { row: usize, col: usize, found: char },
}

/// Errors raised by grid construction and lookup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GridError {
    /// Input text failed validation. Every violation is listed.
    #[error("Grid failed validation: {}", join_violations(.0))]
    Invalid(Vec<ValidationError>),

    #[error("No guard marker found in grid")]
    NoGuard,

    #[error("Found {} guard markers, expected exactly one", .positions.len())]
    MultipleGuards { positions: Vec<Position> },

    #[error("Position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("Cannot place an obstruction at {position}: cell is {cell:?}")]
    InvalidObstruction { position: Position, cell: Cell },
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let err = GridError::Invalid(vec![
            ValidationError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            },
            ValidationError::UnknownCharacter {
                row: 2,
                col: 0,
                found: 'x',
            },
        ]);

        let message = err.to_string();
        assert!(message.contains("Row 1 has length 2, expected 3"));
        assert!(message.contains("'x' at row 2, column 0"));
    }

    #[test]
    fn multiple_guards_reports_count() {
        let err = GridError::MultipleGuards {
            positions: vec![Position::new(0, 0), Position::new(1, 1)],
        };
        assert_eq!(
            err.to_string(),
            "Found 2 guard markers, expected exactly one"
        );
    }
}
