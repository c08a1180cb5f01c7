//! Validation of grid text using accumulating `Validation`.
//!
//! Every row and every character is checked, and all violations are
//! reported together instead of stopping at the first bad row.

use crate::grid::cell::Cell;
use crate::grid::error::ValidationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check<T> = Validation<T, NonEmptyVec<ValidationError>>;

/// Cells of a validated grid in raster order, with its dimensions.
#[derive(Debug, PartialEq)]
pub(crate) struct ValidatedGrid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Cell>,
}

/// Validate grid rows, accumulating ALL violations.
///
/// The first row fixes the expected width. Cells are decoded straight into
/// the result buffer; only violations are kept as `Validation` failures, in
/// row order.
pub(crate) fn validate_rows(lines: &[&str]) -> Result<ValidatedGrid, Vec<ValidationError>> {
    let Some(first) = lines.first() else {
        return Err(vec![ValidationError::EmptyGrid]);
    };
    let cols = first.chars().count();

    let mut checks: Vec<Check<()>> = Vec::with_capacity(lines.len());
    let mut cells = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        checks.push(if found == cols {
            Validation::success(())
        } else {
            Validation::fail(ValidationError::RaggedRow {
                row,
                expected: cols,
                found,
            })
        });

        for (col, c) in line.chars().enumerate() {
            match Cell::from_char(c) {
                Some(cell) => cells.push(cell),
                None => checks.push(Validation::fail(ValidationError::UnknownCharacter {
                    row,
                    col,
                    found: c,
                })),
            }
        }
    }

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(ValidatedGrid {
            rows: lines.len(),
            cols,
            cells,
        }),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}
