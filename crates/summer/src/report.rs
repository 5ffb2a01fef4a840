//! Reporting seam for run results.

use crate::orchestrator::RunReport;

/// Consumer of run results.
///
/// Presentation stays outside the engine: the CLI installs a console
/// implementation, tests can capture output in memory.
pub trait ReportSink {
    /// Present the input array.
    fn input(&mut self, array: &[i64]);

    /// Present per-worker partial sums and the aggregated total.
    fn results(&mut self, report: &RunReport);
}
