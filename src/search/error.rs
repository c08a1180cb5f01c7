//! Build errors for the obstruction search builder.

use thiserror::Error;

/// Errors that can occur when building an `ObstructionSearch`.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Worker thread count must be at least 1")]
    ZeroThreads,

    #[error("A worker thread count was set on a sequential search. Call .parallel(true)")]
    ThreadsRequireParallel,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
