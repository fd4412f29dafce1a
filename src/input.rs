//! Randomized trial inputs.
//!
//! Each trial gets a fresh input of the requested length with elements drawn
//! uniformly from `[0, max(1, len * 10))`, plus a target picked from the
//! input itself so search-style algorithms always have something to find.
//!
//! Generation takes the RNG as a parameter; nothing here owns ambient random
//! state, so a seeded generator reproduces the same inputs exactly.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256PlusPlus;
//! use simbench::input::TrialInput;
//!
//! let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
//! let trial = TrialInput::generate(&mut rng, 100);
//! assert_eq!(trial.values.len(), 100);
//! assert!(trial.values.contains(&trial.target.unwrap()));
//! ```

use rand::Rng;

/// Exclusive upper bound for element values at a given input length.
///
/// Never zero, so an empty input still has a valid draw range.
pub fn value_bound(len: usize) -> i64 {
    i64::try_from(len)
        .unwrap_or(i64::MAX)
        .saturating_mul(10)
        .max(1)
}

/// Draw `len` values uniformly from `[0, value_bound(len))`.
pub fn generate_values<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    let bound = value_bound(len);
    (0..len).map(|_| rng.random_range(0..bound)).collect()
}

/// Pick a uniformly random element of `values`.
///
/// Returns `None` for an empty slice: there is nothing to draw from.
pub fn pick_target<R: Rng + ?Sized>(rng: &mut R, values: &[i64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    Some(values[rng.random_range(0..values.len())])
}

/// A generated input and its target for one trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialInput {
    /// Input sequence handed to the algorithm.
    pub values: Vec<i64>,
    /// An element of `values`, or `None` when `values` is empty.
    pub target: Option<i64>,
}

impl TrialInput {
    /// Generate values and then draw the target from them.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let values = generate_values(rng, len);
        let target = pick_target(rng, &values);
        Self { values, target }
    }
}
