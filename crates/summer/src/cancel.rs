//! Caller-side cancellation of in-flight runs.

use crate::latch::CountdownLatch;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle used to abandon a run that is waiting on its workers.
///
/// The token is created by the caller and passed to
/// [`ParallelSummer::run_with`](crate::ParallelSummer::run_with). Cancelling
/// wakes the orchestrator, which reports the run as cancelled without
/// reading any worker result. Workers already running are not stopped;
/// whatever they publish afterwards is discarded with the run.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    shared: Arc<TokenShared>,
}

#[derive(Debug, Default)]
struct TokenShared {
    cancelled: AtomicBool,
    attached: Mutex<Option<CountdownLatch>>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.shared.cancelled.load(Ordering::Acquire)
    }

    /// Cancel the attached run, waking its orchestrator if it is waiting.
    ///
    /// Cancelling is idempotent and sticks: a run attached after this call
    /// is interrupted at attach time.
    pub fn cancel(&self) {
        self.shared.cancelled.store(true, Ordering::Release);
        if let Some(latch) = self.shared.attached.lock().as_ref() {
            latch.interrupt();
        }
    }

    /// Tie this token to a run's completion latch.
    pub(crate) fn attach(&self, latch: &CountdownLatch) {
        let mut attached = self.shared.attached.lock();
        *attached = Some(latch.clone());
        if self.shared.cancelled.load(Ordering::Acquire) {
            latch.interrupt();
        }
    }

    /// Disconnect the token once its run has reached a terminal state.
    pub(crate) fn detach(&self) {
        *self.shared.attached.lock() = None;
    }
}
