use std::sync::Arc;
use std::thread;
use std::time::Duration;
use summer::{CancelToken, Executor, ParallelSummer, SumError};

/// Discards every task, so the completion latch never opens.
struct StalledExecutor;

impl Executor for StalledExecutor {
    fn submit(&self, _task: Box<dyn FnOnce() + Send + 'static>) {}
}

#[test]
fn pre_cancelled_token_aborts_the_run() {
    let _ = env_logger::builder().is_test(true).try_init();

    let token = CancelToken::new();
    token.cancel();

    let array: Arc<[i64]> = (0..100).collect::<Vec<i64>>().into();
    let summer = ParallelSummer::new(4).unwrap();
    let result = summer.run_with(&array, &token);

    assert_eq!(result, Err(SumError::Cancelled));
}

#[test]
fn cancel_wakes_the_waiting_orchestrator() {
    let _ = env_logger::builder().is_test(true).try_init();

    let summer = ParallelSummer::with_executor(StalledExecutor, 4).unwrap();
    let token = CancelToken::new();
    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            token.cancel();
        })
    };

    let array: Arc<[i64]> = (0..64).collect::<Vec<i64>>().into();
    let result = summer.run_with(&array, &token);
    canceller.join().unwrap();

    assert_eq!(result, Err(SumError::Cancelled));
    assert!(token.is_cancelled());
}

#[test]
fn bounded_wait_expires_when_workers_stall() {
    let _ = env_logger::builder().is_test(true).try_init();

    let summer = ParallelSummer::with_executor(StalledExecutor, 2)
        .unwrap()
        .with_max_wait(Duration::from_millis(20));

    let array: Arc<[i64]> = (0..16).collect::<Vec<i64>>().into();
    let result = summer.run(&array);

    assert_eq!(result, Err(SumError::Timeout));
}

#[test]
fn bounded_wait_still_completes_fast_runs() {
    let _ = env_logger::builder().is_test(true).try_init();

    let summer = ParallelSummer::new(4)
        .unwrap()
        .with_max_wait(Duration::from_secs(5));

    let array: Arc<[i64]> = (0..1000).collect::<Vec<i64>>().into();
    let report = summer.run(&array).unwrap();

    assert_eq!(report.total, 499_500);
}
