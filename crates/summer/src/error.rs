//! Error taxonomy for summation runs.

use thiserror::Error;

/// Result type alias for summation operations.
pub type SumResult<T> = Result<T, SumError>;

/// Errors surfaced by [`ParallelSummer`](crate::ParallelSummer).
///
/// Configuration problems are reported before any task is dispatched;
/// `Cancelled` and `Timeout` are terminal outcomes of a run's wait and are
/// never retried internally.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum SumError {
    /// The run was cancelled while waiting for workers to finish.
    #[error("run cancelled before all workers completed")]
    Cancelled,

    /// The configured maximum wait elapsed before all workers finished.
    #[error("wait expired before all workers completed")]
    Timeout,

    /// The run was rejected before dispatch.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    PoolBuild(String),
}
