//! # simbench
//!
//! Micro-benchmark algorithms against simulated CPUs.
//!
//! Each trial times one algorithm call on the host. A parametric
//! [`CpuModel`] then turns that wall-clock measurement, together with the
//! memory accesses the algorithm reported, into a *simulated* time:
//! - the clock multiplier scales the measured seconds
//! - the cache-miss penalty and rate charge latency per reported access
//!
//! Repeating the trial over fresh random inputs yields a time series whose
//! mean and population standard deviation are reported per
//! (algorithm, CPU model, input size) experiment.
//!
//! ## Access Counting Contract
//!
//! Algorithms must report accesses with a fixed convention, because the
//! cache-miss term is linear in that count. See [`algorithm`] for the
//! conventions of the bundled variants.
//!
//! ## Quick Start
//!
//! ```
//! use simbench::{CpuModel, LinearSearch};
//!
//! let cpu = CpuModel::new("Fast", 4.0, 10.0, 0.01)?;
//! let report = simbench::run_experiment(&LinearSearch, &cpu, 1000, 5);
//!
//! println!("{}: {:.6}s ± {:.6}s", report.algorithm, report.mean, report.stddev);
//! # Ok::<(), simbench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod cpu;
mod error;
mod result;
mod runner;

// Functional modules
pub mod algorithm;
pub mod input;
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use algorithm::{Algorithm, AlgorithmOutput, BubbleSort, LinearSearch};
pub use config::{Config, RUNS_ENV, SEED_ENV};
pub use cpu::CpuModel;
pub use error::{Error, Result};
pub use measurement::{MemoryAccessCounter, Timer, TrialResult};
pub use output::{JsonLinesReporter, OutputFormat, Reporter, TableReporter};
pub use result::ExperimentReport;
pub use runner::ExperimentRunner;
pub use statistics::{SummaryStatistics, TimeSeries};

/// Run one experiment with an unseeded default runner.
///
/// Executes `runs` trials of `algorithm` on fresh inputs of length
/// `input_size`, maps each through `cpu`, and returns the summary record.
///
/// Use [`ExperimentRunner`] directly for seeding or reporter-driven grids.
pub fn run_experiment<A>(algorithm: &A, cpu: &CpuModel, input_size: usize, runs: usize) -> ExperimentReport
where
    A: Algorithm + ?Sized,
{
    ExperimentRunner::new().runs(runs).run(algorithm, cpu, input_size)
}
