//! Guard simulation.
//!
//! `transition` is the pure movement rule. `GuardStateMachine` drives it
//! one step at a time, records every state in a `StateHistory`, and stops
//! when the guard leaves the grid or repeats a state.
//!
//! # Example
//!
//! ```rust
//! use patrol::core::Outcome;
//! use patrol::grid::Grid;
//! use patrol::machine::GuardStateMachine;
//!
//! let grid = Grid::parse("..#\n...\n.^.").unwrap();
//! let report = GuardStateMachine::run(&grid).unwrap();
//!
//! assert_eq!(report.outcome, Outcome::Exited);
//! assert_eq!(report.visited_count(), 3);
//! ```

mod error;
mod guard;
mod report;
mod step;

pub use error::SimulationError;
pub use guard::GuardStateMachine;
pub use report::RunReport;
pub use step::{transition, StepResult};
