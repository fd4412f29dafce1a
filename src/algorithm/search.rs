//! Linear search variant.

use super::{Algorithm, AlgorithmOutput};
use crate::measurement::MemoryAccessCounter;

/// Front-to-back scan returning the first matching position.
///
/// Accesses: one per element inspected, so the count never exceeds the
/// input length. A missing target (`None`) inspects nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearSearch;

impl Algorithm for LinearSearch {
    fn name(&self) -> &str {
        "Linear Search"
    }

    fn run(
        &self,
        input: &[i64],
        target: Option<i64>,
        counter: &mut MemoryAccessCounter,
    ) -> AlgorithmOutput {
        let Some(target) = target else {
            return AlgorithmOutput::Index(None);
        };

        for (i, &value) in input.iter().enumerate() {
            counter.increment();
            if value == target {
                return AlgorithmOutput::Index(Some(i));
            }
        }

        AlgorithmOutput::Index(None)
    }
}
