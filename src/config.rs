//! Configuration for experiment runs.

use std::env;

/// Environment variable overriding [`Config::runs`].
pub const RUNS_ENV: &str = "SIMBENCH_RUNS";

/// Environment variable overriding [`Config::seed`].
pub const SEED_ENV: &str = "SIMBENCH_SEED";

/// Configuration options for `ExperimentRunner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Trials per experiment (default: 5).
    ///
    /// Zero is accepted and yields an empty time series whose summary is
    /// `(0.0, 0.0)`.
    pub runs: usize,

    /// Optional deterministic seed for input generation.
    ///
    /// When `None`, every experiment draws a fresh seed from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs: 5,
            seed: None,
        }
    }
}

impl Config {
    /// Merge overrides from `SIMBENCH_RUNS` and `SIMBENCH_SEED`.
    ///
    /// Values that do not parse are ignored and the existing setting is kept.
    pub fn from_env(mut self) -> Self {
        if let Some(runs) = parse_env(RUNS_ENV) {
            self.runs = runs;
        }
        if let Some(seed) = parse_env(SEED_ENV) {
            self.seed = Some(seed);
        }
        self
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
