//! Builder for configuring an obstruction search.

use crate::search::error::BuildError;
use crate::search::{CandidateStrategy, Execution, ObstructionSearch};

/// Fluent configuration for `ObstructionSearch`.
///
/// Defaults: `CandidateStrategy::PatrolPath`, parallel on the global
/// rayon pool.
#[derive(Clone, Debug)]
pub struct SearchBuilder {
    strategy: CandidateStrategy,
    parallel: bool,
    threads: Option<usize>,
}

impl SearchBuilder {
    pub fn new() -> Self {
        Self {
            strategy: CandidateStrategy::default(),
            parallel: true,
            threads: None,
        }
    }

    /// Choose which cells are tried as obstructions.
    pub fn strategy(mut self, strategy: CandidateStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Run trials on worker threads (`true`) or on the calling thread.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use a dedicated pool with exactly `n` workers.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }

    /// Build the search.
    /// Returns an error if the thread configuration is invalid.
    pub fn build(self) -> Result<ObstructionSearch, BuildError> {
        let execution = match (self.parallel, self.threads) {
            (_, Some(0)) => return Err(BuildError::ZeroThreads),
            (false, Some(_)) => return Err(BuildError::ThreadsRequireParallel),
            (false, None) => Execution::Sequential,
            (true, None) => Execution::Parallel(None),
            (true, Some(n)) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("patrol-search-{i}"))
                    .build()?;
                Execution::Parallel(Some(pool))
            }
        };

        Ok(ObstructionSearch {
            strategy: self.strategy,
            execution,
        })
    }
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
