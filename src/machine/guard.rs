//! State machine that walks one guard to completion.

use crate::core::{GuardState, Outcome, StateHistory};
use crate::grid::Grid;
use crate::machine::error::SimulationError;
use crate::machine::report::RunReport;
use crate::machine::step::{transition, StepResult};
use tracing::{debug, trace};

/// Single deterministic run of the guard over a borrowed grid.
///
/// The initial state is recorded before the first step. Every step either
/// ends the run or records a new state; recording a state twice ends the
/// run as `Looping`.
///
/// A grid with `R x C` cells has at most `4RC` guard states, so a run needs
/// at most `4RC + 1` transitions. Going past that limit is reported as
/// `SimulationError::StepLimitExceeded` instead of spinning forever.
pub struct GuardStateMachine<'g> {
    grid: &'g Grid,
    start: GuardState,
    current: GuardState,
    history: StateHistory,
    steps: usize,
    step_limit: usize,
    outcome: Option<Outcome>,
}

impl<'g> GuardStateMachine<'g> {
    /// Create a machine starting at the grid's guard marker.
    pub fn new(grid: &'g Grid) -> Result<Self, SimulationError> {
        let start = grid.locate_guard_start()?;
        Ok(Self::from_state(grid, start))
    }

    /// Create a machine starting from an explicit state.
    ///
    /// Only loop membership is tracked; no ordered path is kept.
    pub fn from_state(grid: &'g Grid, start: GuardState) -> Self {
        Self::with_history(grid, start, StateHistory::with_capacity(grid.area()))
    }

    /// Create a machine that also records the ordered path of states.
    pub fn recording_path(grid: &'g Grid, start: GuardState) -> Self {
        Self::with_history(grid, start, StateHistory::with_path())
    }

    fn with_history(grid: &'g Grid, start: GuardState, mut history: StateHistory) -> Self {
        history.record(start);
        Self {
            grid,
            start,
            current: start,
            history,
            steps: 0,
            step_limit: Self::step_bound(grid),
            outcome: None,
        }
    }

    /// Upper bound on transitions for any run on `grid`.
    pub fn step_bound(grid: &Grid) -> usize {
        grid.area().saturating_mul(4).saturating_add(1)
    }

    /// Override the transition limit.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = limit;
        self
    }

    pub fn current_state(&self) -> GuardState {
        self.current
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Transitions performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Terminal outcome, once the run has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_final(&self) -> bool {
        self.outcome.is_some()
    }

    /// Execute one transition.
    ///
    /// After the run has ended this keeps returning the terminal result
    /// without performing further transitions.
    pub fn step(&mut self) -> Result<StepResult, SimulationError> {
        match self.outcome {
            Some(Outcome::Exited) => return Ok(StepResult::Exited(self.current)),
            Some(Outcome::Looping) => return Ok(StepResult::Looped(self.current)),
            None => {}
        }

        if self.steps >= self.step_limit {
            return Err(SimulationError::StepLimitExceeded {
                limit: self.step_limit,
                start: self.start,
            });
        }
        self.steps += 1;

        let result = transition(self.grid, self.current)?;
        if let StepResult::Exited(_) = result {
            self.outcome = Some(Outcome::Exited);
            return Ok(result);
        }

        self.current = result.state();
        if !self.history.record(self.current) {
            self.outcome = Some(Outcome::Looping);
            return Ok(StepResult::Looped(self.current));
        }

        Ok(result)
    }

    /// Step until the run ends.
    pub fn run_to_end(&mut self) -> Result<Outcome, SimulationError> {
        loop {
            if let Some(outcome) = self.step()?.outcome() {
                return Ok(outcome);
            }
        }
    }

    /// Run the guard found on `grid` and report everything it did.
    pub fn run(grid: &Grid) -> Result<RunReport, SimulationError> {
        let start = grid.locate_guard_start()?;
        let mut machine = GuardStateMachine::recording_path(grid, start);
        let outcome = machine.run_to_end()?;

        let visited = machine.history.positions();
        debug!(
            %outcome,
            steps = machine.steps,
            visited = visited.len(),
            "run finished"
        );

        Ok(RunReport {
            outcome,
            visited,
            steps: machine.steps,
            path: machine.history.into_path(),
        })
    }

    /// Outcome of the run found on `grid`, without collecting visited cells.
    pub fn classify(grid: &Grid) -> Result<Outcome, SimulationError> {
        let start = grid.locate_guard_start()?;
        Self::classify_from(grid, start)
    }

    /// Outcome of a run on `grid` starting from `start`.
    pub fn classify_from(grid: &Grid, start: GuardState) -> Result<Outcome, SimulationError> {
        let mut machine = GuardStateMachine::from_state(grid, start);
        let outcome = machine.run_to_end()?;
        trace!(%start, %outcome, steps = machine.steps, "classified run");
        Ok(outcome)
    }
}
