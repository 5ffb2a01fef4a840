//! Fan-out/fan-in orchestration of partial sums.

use crate::cancel::CancelToken;
use crate::error::SumError;
use crate::latch::{CountdownLatch, WaitOutcome};
use crate::partition::partition;
use crate::pool::{Executor, WorkerPool};
use log::{debug, trace};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

/// Lifecycle of one summation run.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum RunState {
    Pending,
    Dispatched,
    AwaitingCompletion,
    Completed,
    Cancelled,
}

/// Aggregated output of a successful run.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RunReport {
    /// Partial sums in worker-index order.
    pub per_worker: Vec<i64>,
    /// Sum of all partial sums, equal to the sequential sum of the array.
    pub total: i64,
}

/// Orchestrates concurrent partial-sum computation over a fixed worker pool.
///
/// Each run partitions the array's index space, submits one task per
/// partition, parks on a countdown latch until every worker has published
/// its partial sum, and aggregates in worker-index order. The pool is
/// released when the summer is dropped, on every exit path.
pub struct ParallelSummer<E: Executor = WorkerPool> {
    executor: E,
    workers: usize,
    max_wait: Option<Duration>,
}

impl ParallelSummer {
    /// Create a summer with `workers` concurrent workers and no wait bound.
    pub fn new(workers: usize) -> Result<Self, SumError> {
        validate(workers)?;
        let executor = WorkerPool::new(Some(workers))?;
        Ok(Self {
            executor,
            workers,
            max_wait: None,
        })
    }
}

impl<E: Executor> ParallelSummer<E> {
    /// Create a summer on top of a caller-supplied executor.
    pub fn with_executor(executor: E, workers: usize) -> Result<Self, SumError> {
        validate(workers)?;
        Ok(Self {
            executor,
            workers,
            max_wait: None,
        })
    }

    /// Bound every run's wait, failing with [`SumError::Timeout`] on expiry.
    #[must_use]
    pub fn with_max_wait(mut self, limit: Duration) -> Self {
        self.max_wait = Some(limit);
        self
    }

    /// Sum `array` across the worker pool.
    pub fn run(&self, array: &Arc<[i64]>) -> Result<RunReport, SumError> {
        self.run_with(array, &CancelToken::new())
    }

    /// Like [`run`](Self::run), but abandonable through `cancel`.
    ///
    /// Workers already running are not stopped when the run is cancelled;
    /// their slots are discarded unread along with the run.
    pub fn run_with(&self, array: &Arc<[i64]>, cancel: &CancelToken) -> Result<RunReport, SumError> {
        let mut state = RunState::Pending;
        trace!(
            "run {state:?}: {} elements across {} workers",
            array.len(),
            self.workers
        );

        let partitions = partition(array.len(), self.workers);
        let latch = CountdownLatch::new(self.workers);
        let slots: Arc<[AtomicI64]> = (0..self.workers).map(|_| AtomicI64::new(0)).collect();
        cancel.attach(&latch);

        for (worker, part) in partitions.iter().copied().enumerate() {
            let array = Arc::clone(array);
            let slots = Arc::clone(&slots);
            let latch = latch.clone();
            self.executor.submit(Box::new(move || {
                let partial: i64 = array[part.as_range()].iter().sum();
                slots[worker].store(partial, Ordering::Release);
                latch.count_down();
            }));
        }
        state = RunState::Dispatched;
        trace!("run {state:?}: {} tasks submitted", self.workers);

        state = RunState::AwaitingCompletion;
        trace!("run {state:?}");
        let outcome = latch.wait(self.max_wait);
        cancel.detach();

        match outcome {
            WaitOutcome::Completed => {
                state = RunState::Completed;
                let per_worker: Vec<i64> = slots
                    .iter()
                    .map(|slot| slot.load(Ordering::Acquire))
                    .collect();
                let total = per_worker.iter().sum();
                debug!("run {state:?}: total {total}");
                Ok(RunReport { per_worker, total })
            }
            WaitOutcome::Interrupted => {
                state = RunState::Cancelled;
                debug!("run {state:?}: wait interrupted");
                Err(SumError::Cancelled)
            }
            WaitOutcome::TimedOut => {
                state = RunState::Cancelled;
                debug!("run {state:?}: wait expired");
                Err(SumError::Timeout)
            }
        }
    }
}

fn validate(workers: usize) -> Result<(), SumError> {
    if workers == 0 {
        return Err(SumError::InvalidConfiguration(
            "worker count must be at least 1".into(),
        ));
    }
    Ok(())
}
