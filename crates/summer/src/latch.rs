//! Countdown latch used as the fan-in barrier for worker completion.
//!
//! Workers call [`CountdownLatch::count_down`] exactly once when they have
//! published their result; the orchestrator parks in
//! [`CountdownLatch::wait`] until the count reaches zero, an interrupt
//! arrives, or an optional deadline passes. The latch's internal lock is
//! what orders every publication before the waiter's wakeup.

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of waiting on the latch.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum WaitOutcome {
    /// Every registered completion signal arrived.
    Completed,
    /// The wait was interrupted via [`CountdownLatch::interrupt`].
    Interrupted,
    /// The deadline passed before the count reached zero.
    TimedOut,
}

#[derive(Debug)]
struct LatchState {
    remaining: usize,
    interrupted: bool,
}

#[derive(Debug)]
struct LatchShared {
    state: Mutex<LatchState>,
    released: Condvar,
}

/// A clonable countdown barrier.
///
/// Clones are shallow: every clone observes the same counter, so one clone
/// can be handed to each worker while the orchestrator waits on another.
#[derive(Clone, Debug)]
pub struct CountdownLatch {
    shared: Arc<LatchShared>,
}

impl CountdownLatch {
    /// Create a latch expecting `count` completion signals.
    pub fn new(count: usize) -> Self {
        Self {
            shared: Arc::new(LatchShared {
                state: Mutex::new(LatchState {
                    remaining: count,
                    interrupted: false,
                }),
                released: Condvar::new(),
            }),
        }
    }

    /// Record one completion signal.
    ///
    /// Signals past zero are ignored.
    pub fn count_down(&self) {
        let mut state = self.shared.state.lock();
        if state.remaining > 0 {
            state.remaining -= 1;
            if state.remaining == 0 {
                self.shared.released.notify_all();
            }
        }
    }

    /// Interrupt any waiter, forcing [`WaitOutcome::Interrupted`].
    pub fn interrupt(&self) {
        let mut state = self.shared.state.lock();
        state.interrupted = true;
        self.shared.released.notify_all();
    }

    /// Number of completion signals still outstanding.
    pub fn remaining(&self) -> usize {
        self.shared.state.lock().remaining
    }

    /// Park until the count reaches zero, an interrupt arrives, or the
    /// optional `limit` elapses.
    ///
    /// A completion that races the deadline is still reported as
    /// [`WaitOutcome::Completed`].
    pub fn wait(&self, limit: Option<Duration>) -> WaitOutcome {
        let deadline = limit.map(|limit| Instant::now() + limit);
        let mut state = self.shared.state.lock();
        loop {
            if state.interrupted {
                return WaitOutcome::Interrupted;
            }
            if state.remaining == 0 {
                return WaitOutcome::Completed;
            }
            match deadline {
                Some(deadline) => {
                    let result = self.shared.released.wait_until(&mut state, deadline);
                    if result.timed_out() {
                        if state.interrupted {
                            return WaitOutcome::Interrupted;
                        }
                        if state.remaining == 0 {
                            return WaitOutcome::Completed;
                        }
                        return WaitOutcome::TimedOut;
                    }
                }
                None => self.shared.released.wait(&mut state),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn opens_once_all_signals_arrive() {
        let latch = CountdownLatch::new(3);
        for _ in 0..3 {
            latch.count_down();
        }
        assert_eq!(latch.wait(None), WaitOutcome::Completed);
        assert_eq!(latch.remaining(), 0);
    }

    #[test]
    fn signals_past_zero_are_ignored() {
        let latch = CountdownLatch::new(1);
        latch.count_down();
        latch.count_down();
        assert_eq!(latch.remaining(), 0);
        assert_eq!(latch.wait(None), WaitOutcome::Completed);
    }

    #[test]
    fn releases_a_parked_waiter() {
        let latch = CountdownLatch::new(4);
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let latch = latch.clone();
                thread::spawn(move || latch.count_down())
            })
            .collect();

        assert_eq!(latch.wait(None), WaitOutcome::Completed);
        for worker in workers {
            worker.join().unwrap();
        }
    }

    #[test]
    fn interrupt_wakes_a_parked_waiter() {
        let latch = CountdownLatch::new(1);
        let interrupter = {
            let latch = latch.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                latch.interrupt();
            })
        };

        assert_eq!(latch.wait(None), WaitOutcome::Interrupted);
        interrupter.join().unwrap();
    }

    #[test]
    fn deadline_expires_when_signals_never_arrive() {
        let latch = CountdownLatch::new(1);
        let outcome = latch.wait(Some(Duration::from_millis(10)));
        assert_eq!(outcome, WaitOutcome::TimedOut);
    }

    #[test]
    fn completion_beats_the_deadline() {
        let latch = CountdownLatch::new(1);
        latch.count_down();
        let outcome = latch.wait(Some(Duration::from_millis(10)));
        assert_eq!(outcome, WaitOutcome::Completed);
    }
}
