//! Mean and population standard deviation.

use serde::{Deserialize, Serialize};

/// Arithmetic mean of `data`.
///
/// Returns `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population standard deviation of `data` around a precomputed `mean`.
///
/// Divides by `N`, not `N - 1`. Returns `0.0` for an empty slice.
pub fn stddev(data: &[f64], mean: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = data.iter().map(|&x| (x - mean) * (x - mean)).sum();
    (sum_sq / data.len() as f64).sqrt()
}

/// Summary of one experiment's time series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Mean simulated time in seconds.
    pub mean: f64,
    /// Population standard deviation in seconds.
    pub stddev: f64,
}

impl SummaryStatistics {
    /// Compute mean, then standard deviation around it.
    pub fn from_slice(data: &[f64]) -> Self {
        let mean = mean(data);
        Self {
            mean,
            stddev: stddev(data, mean),
        }
    }
}
