//! Wall-clock timing of a single algorithm invocation.
//!
//! The CPU model consumes seconds of elapsed real time, so measurements use
//! the monotonic `std::time::Instant` clock. Only the closure passed to
//! [`Timer::measure_secs`] is inside the timed region.

use std::hint::black_box as std_black_box;
use std::time::Instant;

/// Wrapper around `std::hint::black_box` for preventing compiler optimizations.
///
/// Wrap measured calls in this so the compiler cannot elide the work or move
/// it across the timing reads.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Empirically estimate clock resolution by finding the minimum non-zero
/// difference between consecutive reads.
fn measure_resolution_secs() -> f64 {
    const PROBES: usize = 1000;

    let mut min_diff = f64::MAX;
    for _ in 0..PROBES {
        let t1 = Instant::now();
        let mut t2 = Instant::now();
        // Spin until the clock ticks so each probe yields a non-zero delta.
        while t2 == t1 {
            t2 = Instant::now();
        }
        let diff = t2.duration_since(t1).as_secs_f64();
        if diff > 0.0 && diff < min_diff {
            min_diff = diff;
        }
    }

    if min_diff == f64::MAX {
        1e-9
    } else {
        min_diff
    }
}

/// Timer for measuring algorithm execution in seconds.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Estimated clock resolution in seconds.
    resolution_secs: f64,
}

impl Timer {
    /// Create a timer, probing the clock resolution once.
    pub fn new() -> Self {
        Self {
            resolution_secs: measure_resolution_secs(),
        }
    }

    /// Create a timer with a known resolution, skipping the probe.
    ///
    /// Useful for testing or when the resolution is already known.
    pub fn with_resolution_secs(resolution_secs: f64) -> Self {
        Self { resolution_secs }
    }

    /// Estimated clock resolution in seconds.
    ///
    /// Trials shorter than this are dominated by quantization and their base
    /// term carries little information.
    pub fn resolution_secs(&self) -> f64 {
        self.resolution_secs
    }

    /// Run `f` once and return its value with the elapsed wall-clock seconds.
    #[inline]
    pub fn measure_secs<F, T>(&self, f: F) -> (T, f64)
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let value = black_box(f());
        let elapsed = start.elapsed();
        (value, elapsed.as_secs_f64())
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value_and_non_negative_time() {
        let timer = Timer::with_resolution_secs(1e-9);
        let (sum, secs) = timer.measure_secs(|| {
            let mut sum = 0u64;
            for i in 0..1000 {
                sum = sum.wrapping_add(black_box(i));
            }
            sum
        });
        assert_eq!(sum, 499_500);
        assert!(secs >= 0.0);
    }

    #[test]
    fn test_sleep_is_measured() {
        let timer = Timer::with_resolution_secs(1e-9);
        let ((), secs) = timer.measure_secs(|| std::thread::sleep(std::time::Duration::from_millis(2)));
        assert!(secs >= 0.002, "secs = {}", secs);
    }

    #[test]
    fn test_resolution_reasonable() {
        let timer = Timer::new();
        let resolution = timer.resolution_secs();
        // Between 1 ns and 20 ms covers every platform clock we run on.
        assert!(
            resolution > 0.0 && resolution < 0.02,
            "resolution_secs = {}",
            resolution
        );
    }
}
