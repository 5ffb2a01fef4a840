//! Console presentation of run results.

use summer::{ReportSink, RunReport};

/// Writes the generated array, per-worker sums, and the total to stdout.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::print_stdout, reason = "The console sink is the program's output surface")]
impl ReportSink for ConsoleSink {
    fn input(&mut self, array: &[i64]) {
        println!("Generated array:");
        let rendered: Vec<String> = array.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
    }

    fn results(&mut self, report: &RunReport) {
        println!("\nPer-worker sums:");
        for (worker, partial) in report.per_worker.iter().enumerate() {
            println!("Worker {worker}: {partial}");
        }
        println!("\nTotal sum: {}", report.total);
    }
}
