//! Bubble sort variant.

use super::{Algorithm, AlgorithmOutput};
use crate::measurement::MemoryAccessCounter;

/// Reads charged per adjacent comparison.
pub const COMPARE_ACCESSES: u64 = 2;

/// Extra accesses charged per swap: two writes, doubled for the temporary.
pub const SWAP_ACCESSES: u64 = 4;

/// Classic bubble sort on a private copy of the input.
///
/// Accesses: [`COMPARE_ACCESSES`] per comparison plus [`SWAP_ACCESSES`] per
/// swap, so for `n` elements and `s` swaps the count is
/// `2 * n * (n - 1) / 2 + 4 * s`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSort;

impl Algorithm for BubbleSort {
    fn name(&self) -> &str {
        "Bubble Sort"
    }

    fn run(
        &self,
        input: &[i64],
        _target: Option<i64>,
        counter: &mut MemoryAccessCounter,
    ) -> AlgorithmOutput {
        let mut sorted = input.to_vec();
        let n = sorted.len();

        for i in 0..n {
            for j in 0..n - i - 1 {
                counter.add(COMPARE_ACCESSES);
                if sorted[j] > sorted[j + 1] {
                    sorted.swap(j, j + 1);
                    counter.add(SWAP_ACCESSES);
                }
            }
        }

        AlgorithmOutput::Sorted(sorted)
    }
}
