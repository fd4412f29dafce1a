//! Experiment report record.

use serde::{Deserialize, Serialize};

use crate::statistics::SummaryStatistics;

/// One record per completed experiment, handed to a reporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// Algorithm display name.
    pub algorithm: String,

    /// CPU model name.
    pub cpu: String,

    /// Length of each generated input.
    pub input_size: usize,

    /// Trials that contributed to the summary.
    pub runs: usize,

    /// Mean simulated time in seconds.
    pub mean: f64,

    /// Population standard deviation of simulated time in seconds.
    pub stddev: f64,
}

impl ExperimentReport {
    /// Assemble a record from its identifying triple and summary.
    pub fn new(
        algorithm: impl Into<String>,
        cpu: impl Into<String>,
        input_size: usize,
        runs: usize,
        summary: SummaryStatistics,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            cpu: cpu.into(),
            input_size,
            runs,
            mean: summary.mean,
            stddev: summary.stddev,
        }
    }

    /// The `(mean, stddev)` pair.
    pub fn summary(&self) -> SummaryStatistics {
        SummaryStatistics {
            mean: self.mean,
            stddev: self.stddev,
        }
    }
}
