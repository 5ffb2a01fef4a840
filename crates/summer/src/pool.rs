//! Fixed-size worker pool behind a minimal executor seam.

use crate::error::SumError;
use log::debug;
use rayon::ThreadPoolBuilder;

/// Capability to run tasks on a pool of workers.
///
/// The orchestrator synchronizes through the completion latch, so the only
/// capability it needs from a pool is fire-and-forget submission. Tests
/// substitute executors that stall or drop tasks to exercise the failure
/// paths.
pub trait Executor {
    /// Queue a task for execution on some worker.
    fn submit(&self, task: Box<dyn FnOnce() + Send + 'static>);
}

/// Rayon-backed fixed-size pool.
///
/// Dropping the pool releases its threads, which covers every exit path of
/// a run.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `threads` workers, or one thread per CPU core when
    /// `None`.
    pub fn new(threads: Option<usize>) -> Result<Self, SumError> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|worker| format!("summer-worker-{worker}"));

        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }

        let pool = builder
            .build()
            .map_err(|err| SumError::PoolBuild(err.to_string()))?;
        debug!("worker pool ready with {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    /// Number of threads in the pool.
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for WorkerPool {
    fn submit(&self, task: Box<dyn FnOnce() + Send + 'static>) {
        self.pool.spawn(task);
    }
}
