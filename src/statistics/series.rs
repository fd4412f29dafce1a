//! Ordered simulated times for one experiment.

use super::SummaryStatistics;

/// Simulated trial times in execution order, one entry per trial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    times: Vec<f64>,
}

impl TimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `runs` trials.
    pub fn with_capacity(runs: usize) -> Self {
        Self {
            times: Vec::with_capacity(runs),
        }
    }

    /// Append the next trial's simulated time.
    pub fn push(&mut self, simulated_secs: f64) {
        self.times.push(simulated_secs);
    }

    /// Number of trials recorded.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no trials were recorded.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Recorded times in trial order.
    pub fn as_slice(&self) -> &[f64] {
        &self.times
    }

    /// Mean and population standard deviation of the series.
    pub fn summary(&self) -> SummaryStatistics {
        SummaryStatistics::from_slice(&self.times)
    }
}

impl From<Vec<f64>> for TimeSeries {
    fn from(times: Vec<f64>) -> Self {
        Self { times }
    }
}

impl FromIterator<f64> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            times: iter.into_iter().collect(),
        }
    }
}
