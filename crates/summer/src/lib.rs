//! Fan-out/fan-in parallel summation over contiguous array chunks.
//!
//! This crate sums an integer array by splitting its index space into
//! contiguous partitions, summing each partition on a fixed-size worker
//! pool, and aggregating the partial sums once a countdown barrier confirms
//! that every worker has published its result.
//!
//! # Architecture
//!
//! ```text
//! partition: [0, len) -> disjoint [start, end) ranges, one per worker
//!     ↓
//! dispatch: one task per partition on a fixed-size pool
//!     ↓
//! barrier: countdown latch, one completion signal per worker
//!     ↓
//! aggregate: partial sums combined in worker-index order
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use summer::ParallelSummer;
//!
//! let array: Arc<[i64]> = (0..100).collect::<Vec<i64>>().into();
//! let summer = ParallelSummer::new(10)?;
//! let report = summer.run(&array)?;
//!
//! assert_eq!(report.total, 4950);
//! assert_eq!(report.per_worker.len(), 10);
//! # Ok::<(), summer::SumError>(())
//! ```
//!
//! Runs can be abandoned from another thread through a
//! [`CancelToken`], or bounded with
//! [`ParallelSummer::with_max_wait`]; both surface as typed errors and
//! never expose partial results.

#![allow(clippy::missing_errors_doc, reason = "Errors are typed and documented on SumError")]

mod cancel;
mod error;
mod latch;
mod orchestrator;
mod partition;
mod pool;
mod report;

// Re-exports
pub use cancel::CancelToken;
pub use error::{SumError, SumResult};
pub use latch::{CountdownLatch, WaitOutcome};
pub use orchestrator::{ParallelSummer, RunReport};
pub use partition::{Partition, partition};
pub use pool::{Executor, WorkerPool};
pub use report::ReportSink;
