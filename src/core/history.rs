//! Guard state history and loop detection.
//!
//! Every state the guard occupies during one run is recorded here. A state
//! that is recorded twice means the run has entered a cycle.

use super::position::Position;
use super::state::GuardState;
use std::collections::HashSet;

/// Set of guard states seen during a single run.
///
/// Membership is keyed on the full `GuardState`, so crossing an earlier
/// position with a different facing is not reported as a repeat.
///
/// By default only the set is kept. `with_path` additionally keeps the
/// ordered sequence of recorded states for inspection after the run.
///
/// # Example
///
/// ```rust
/// use patrol::core::{Direction, GuardState, Position, StateHistory};
///
/// let mut history = StateHistory::with_path();
/// let start = GuardState::new(Position::new(1, 1), Direction::North);
///
/// assert!(history.record(start));
/// assert!(history.record(start.turned()));
/// assert!(!history.record(start));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateHistory {
    seen: HashSet<GuardState>,
    path: Option<Vec<GuardState>>,
}

impl StateHistory {
    /// Create an empty history that only tracks membership.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history that also keeps the order of recorded states.
    pub fn with_path() -> Self {
        Self {
            seen: HashSet::new(),
            path: Some(Vec::new()),
        }
    }

    /// Pre-size the set for a grid with `area` cells.
    pub fn with_capacity(area: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(area),
            path: None,
        }
    }

    /// Record a state.
    ///
    /// Returns `true` if the state is new and `false` if it was already
    /// present. A repeated state is not appended to the path.
    pub fn record(&mut self, state: GuardState) -> bool {
        let inserted = self.seen.insert(state);
        if inserted {
            if let Some(path) = self.path.as_mut() {
                path.push(state);
            }
        }
        inserted
    }

    pub fn contains(&self, state: &GuardState) -> bool {
        self.seen.contains(state)
    }

    /// Number of distinct states recorded.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Recorded states in order. Empty unless created with `with_path`.
    pub fn get_path(&self) -> &[GuardState] {
        self.path.as_deref().unwrap_or(&[])
    }

    /// Distinct positions across all recorded states.
    pub fn positions(&self) -> HashSet<Position> {
        self.seen.iter().map(|state| state.position).collect()
    }

    /// Consume the history, returning the ordered path if one was kept.
    pub fn into_path(self) -> Vec<GuardState> {
        self.path.unwrap_or_default()
    }
}
