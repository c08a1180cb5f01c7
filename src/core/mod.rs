//! Core value types for the patrol simulation.
//!
//! This module contains the pure building blocks shared by the grid,
//! the state machine and the obstruction search:
//! - `Position` and `Direction` for coordinates and headings
//! - `GuardState` and `Outcome` for run identity and classification
//! - `StateHistory` for loop detection
//!
//! Nothing here performs I/O or knows about grid bounds.

mod history;
mod position;
mod state;

pub use history::StateHistory;
pub use position::{Direction, Position};
pub use state::{GuardState, Outcome};
