//! Parametric CPU performance model.
//!
//! A [`CpuModel`] turns a raw wall-clock measurement into a *simulated* time
//! for a hypothetical processor:
//!
//! ```text
//! simulated = measured / clock_multiplier
//!           + (cache_miss_penalty_us / 1e6) * cache_miss_rate * memory_accesses
//! ```
//!
//! The first term models a faster (or slower) clock scaling the observed cost;
//! the second charges a fixed latency for the expected number of cache misses
//! among the accesses the algorithm reported.

use crate::error::{Error, Result};

/// Microseconds per second.
const US_PER_SEC: f64 = 1e6;

/// A named, immutable CPU performance model.
///
/// Construct with [`CpuModel::new`], which rejects parameters that would make
/// simulated times infinite or meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuModel {
    name: String,
    clock_multiplier: f64,
    cache_miss_penalty_us: f64,
    cache_miss_rate: f64,
}

impl CpuModel {
    /// Create a validated CPU model.
    ///
    /// # Arguments
    ///
    /// * `name` - Non-empty identifier shown in reports
    /// * `clock_multiplier` - Relative clock speed, must be finite and `> 0`
    /// * `cache_miss_penalty_us` - Latency per miss in microseconds, `>= 0`
    /// * `cache_miss_rate` - Fraction of accesses that miss, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the first offending field.
    pub fn new(
        name: impl Into<String>,
        clock_multiplier: f64,
        cache_miss_penalty_us: f64,
        cache_miss_rate: f64,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid("name", "must not be empty"));
        }
        if !clock_multiplier.is_finite() || clock_multiplier <= 0.0 {
            return Err(Error::invalid(
                "clock_multiplier",
                format!("must be finite and > 0, got {clock_multiplier}"),
            ));
        }
        if !cache_miss_penalty_us.is_finite() || cache_miss_penalty_us < 0.0 {
            return Err(Error::invalid(
                "cache_miss_penalty_us",
                format!("must be finite and >= 0, got {cache_miss_penalty_us}"),
            ));
        }
        if !(0.0..=1.0).contains(&cache_miss_rate) {
            return Err(Error::invalid(
                "cache_miss_rate",
                format!("must be in [0, 1], got {cache_miss_rate}"),
            ));
        }

        Ok(Self {
            name,
            clock_multiplier,
            cache_miss_penalty_us,
            cache_miss_rate,
        })
    }

    /// Entry-level model: nominal clock, 50 µs miss penalty, 2% miss rate.
    pub fn basic() -> Self {
        Self::preset("Basic", 1.0, 50.0, 0.02)
    }

    /// Mid-range model: 2x clock, 30 µs miss penalty, 1.5% miss rate.
    pub fn mid() -> Self {
        Self::preset("Mid", 2.0, 30.0, 0.015)
    }

    /// High-end model: 4x clock, 10 µs miss penalty, 1% miss rate.
    pub fn pro() -> Self {
        Self::preset("Pro", 4.0, 10.0, 0.01)
    }

    /// The reference lineup, in report order: Basic, Mid, Pro.
    pub fn reference_models() -> Vec<Self> {
        vec![Self::basic(), Self::mid(), Self::pro()]
    }

    // Known-valid constants only; bypasses validation.
    fn preset(name: &str, clock_multiplier: f64, cache_miss_penalty_us: f64, cache_miss_rate: f64) -> Self {
        Self {
            name: name.to_string(),
            clock_multiplier,
            cache_miss_penalty_us,
            cache_miss_rate,
        }
    }

    /// Model identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relative clock speed.
    pub fn clock_multiplier(&self) -> f64 {
        self.clock_multiplier
    }

    /// Cache-miss latency in microseconds.
    pub fn cache_miss_penalty_us(&self) -> f64 {
        self.cache_miss_penalty_us
    }

    /// Fraction of memory accesses that miss the cache.
    pub fn cache_miss_rate(&self) -> f64 {
        self.cache_miss_rate
    }

    /// Seconds charged per reported memory access.
    pub fn penalty_per_access_secs(&self) -> f64 {
        (self.cache_miss_penalty_us / US_PER_SEC) * self.cache_miss_rate
    }

    /// Transform a measured duration and access count into simulated seconds.
    ///
    /// Pure and total: degenerate inputs such as a negative measurement
    /// propagate arithmetically rather than being rejected.
    #[inline]
    pub fn simulate_time(&self, measured_secs: f64, memory_accesses: u64) -> f64 {
        let base = measured_secs / self.clock_multiplier;
        let penalty = self.penalty_per_access_secs() * memory_accesses as f64;
        base + penalty
    }
}
