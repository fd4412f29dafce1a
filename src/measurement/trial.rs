//! Raw outcome of a single trial.

/// What one trial measured before the CPU model transform.
///
/// Produced per trial and consumed immediately; only the simulated time
/// derived from it survives into the time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    /// Elapsed wall-clock seconds around the algorithm call.
    pub raw_secs: f64,
    /// Memory accesses the algorithm reported.
    pub memory_accesses: u64,
}

impl TrialResult {
    /// Create a new trial result.
    pub fn new(raw_secs: f64, memory_accesses: u64) -> Self {
        Self {
            raw_secs,
            memory_accesses,
        }
    }
}
