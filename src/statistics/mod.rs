//! Statistical summaries of simulated trial times.
//!
//! This module provides:
//! - Arithmetic mean and population standard deviation
//! - [`TimeSeries`], the per-experiment sequence of simulated times
//! - [`SummaryStatistics`], the `(mean, stddev)` pair that gets reported
//!
//! Empty input is a defined degenerate case: both statistics are `0.0`.

mod series;
mod summary;

pub use series::TimeSeries;
pub use summary::{mean, stddev, SummaryStatistics};
