//! Simulation error types.

use crate::core::GuardState;
use crate::grid::GridError;
use thiserror::Error;

/// Errors that can occur while simulating a patrol.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// The grid was unusable (missing guard, several guards, bad lookup).
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The run performed more transitions than its state space allows.
    ///
    /// A correct transition function can never reach this.
    #[error("Run from {start} exceeded the limit of {limit} transitions")]
    StepLimitExceeded { limit: usize, start: GuardState },
}
