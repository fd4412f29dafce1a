//! Algorithms under measurement and their access-counting contract.
//!
//! Every [`Algorithm`] reports the logical memory accesses it performs into a
//! [`MemoryAccessCounter`]. The CPU model's cache-miss term is only meaningful
//! if each variant counts with a fixed, documented convention:
//!
//! | Variant | Per step | Count |
//! |---------|----------|-------|
//! | [`BubbleSort`] | adjacent comparison | 2 |
//! | [`BubbleSort`] | swap (on top of its comparison) | 4 |
//! | [`LinearSearch`] | element inspected | 1 |
//!
//! The swap charge of 4 is a fixed modeling convention, not a measured cost.

mod search;
mod sort;

pub use search::LinearSearch;
pub use sort::BubbleSort;

use crate::measurement::MemoryAccessCounter;

/// Value returned by an algorithm run.
///
/// The runner never inspects it; it exists so callers and tests can check
/// correctness alongside the access count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmOutput {
    /// A sorted copy of the input.
    Sorted(Vec<i64>),
    /// Position of the first match, or `None` if the target is absent.
    Index(Option<usize>),
}

impl AlgorithmOutput {
    /// Signed index encoding: the 0-based position, or `-1` when not found.
    ///
    /// Returns `None` for outputs that are not search results.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            AlgorithmOutput::Index(Some(i)) => Some(*i as i64),
            AlgorithmOutput::Index(None) => Some(-1),
            AlgorithmOutput::Sorted(_) => None,
        }
    }

    /// The sorted sequence, if this is a sort result.
    pub fn as_sorted(&self) -> Option<&[i64]> {
        match self {
            AlgorithmOutput::Sorted(v) => Some(v),
            AlgorithmOutput::Index(_) => None,
        }
    }
}

/// An algorithm the harness can time.
///
/// # Contract
///
/// - `input` is borrowed; variants that reorder data work on a private copy.
/// - `target` is `None` when the input is empty and no target could be drawn.
///   Search-style variants treat it as "not found".
/// - `counter` arrives reset. Implementations only add to it, following the
///   accounting convention documented for the variant.
/// - Logic is deterministic for identical inputs; randomness belongs to input
///   generation.
pub trait Algorithm {
    /// Display name used in reports.
    fn name(&self) -> &str;

    /// Execute once against `input`, recording accesses into `counter`.
    fn run(
        &self,
        input: &[i64],
        target: Option<i64>,
        counter: &mut MemoryAccessCounter,
    ) -> AlgorithmOutput;
}

impl<A: Algorithm + ?Sized> Algorithm for &A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(
        &self,
        input: &[i64],
        target: Option<i64>,
        counter: &mut MemoryAccessCounter,
    ) -> AlgorithmOutput {
        (**self).run(input, target, counter)
    }
}

impl<A: Algorithm + ?Sized> Algorithm for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(
        &self,
        input: &[i64],
        target: Option<i64>,
        counter: &mut MemoryAccessCounter,
    ) -> AlgorithmOutput {
        (**self).run(input, target, counter)
    }
}

/// The reference algorithm lineup, in report order.
pub fn reference_algorithms() -> Vec<Box<dyn Algorithm>> {
    vec![Box::new(BubbleSort), Box::new(LinearSearch)]
}
