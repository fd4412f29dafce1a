//! Memory-access accounting shared between the runner and an algorithm.

/// Count of logical memory reads/writes performed during one trial.
///
/// Owned by exactly one in-flight trial. The runner resets it before each
/// invocation and reads it right after; algorithms only ever add to it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MemoryAccessCounter {
    value: u64,
}

impl MemoryAccessCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Record `n` additional accesses.
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.value += n;
    }

    /// Record a single access.
    #[inline]
    pub fn increment(&mut self) {
        self.add(1);
    }

    /// Accesses recorded since the last reset.
    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_accumulates_and_resets() {
        let mut counter = MemoryAccessCounter::new();
        assert_eq!(counter.value(), 0);

        counter.add(2);
        counter.increment();
        counter.add(4);
        assert_eq!(counter.value(), 7);

        counter.reset();
        assert_eq!(counter.value(), 0);
    }
}
