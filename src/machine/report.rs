//! Result of a completed run.

use crate::core::{GuardState, Outcome, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything observed during one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Every position the guard occupied, including the start.
    pub visited: HashSet<Position>,
    /// Distinct states in the order they were first reached, starting with
    /// the initial state.
    pub path: Vec<GuardState>,
    /// Transitions performed, including the final exit or repeat.
    pub steps: usize,
}

impl RunReport {
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
