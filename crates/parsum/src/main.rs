//! Console front end: generates a random array, sums it across a fixed
//! worker pool, and reports per-worker partial sums plus the total.

use crate::config::Config;
use crate::sink::ConsoleSink;
use anyhow::Error;
use log::error;
use std::process::exit;
use std::sync::Arc;
use summer::{ParallelSummer, ReportSink as _};

mod config;
mod generate;
mod sink;

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        error!("parsum failed: {error:?}");
        exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_args()?;
    let array: Arc<[i64]> = generate::random_array(config.length).into();

    // One summer per invocation: the pool is created for the run and
    // released when the summer drops, on every exit path.
    let summer = ParallelSummer::new(config.workers)?;
    let report = summer.run(&array)?;

    let mut sink = ConsoleSink::new();
    sink.input(&array);
    sink.results(&report);
    Ok(())
}
