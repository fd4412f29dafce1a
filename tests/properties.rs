//! Property tests for the CPU transform, statistics, and access conventions.

use proptest::prelude::*;
use simbench::statistics::{mean, stddev, SummaryStatistics};
use simbench::{Algorithm, BubbleSort, CpuModel, LinearSearch, MemoryAccessCounter};

fn cpu_strategy() -> impl Strategy<Value = CpuModel> {
    (0.01f64..16.0, 0.0f64..500.0, 0.0f64..=1.0).prop_map(|(clock, penalty, rate)| {
        CpuModel::new("Prop", clock, penalty, rate).expect("strategy yields valid params")
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

/// Reference bubble sort that counts swaps independently of the counter.
fn count_swaps(input: &[i64]) -> u64 {
    let mut v = input.to_vec();
    let mut swaps = 0;
    for i in 0..v.len() {
        for j in 0..v.len() - i - 1 {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                swaps += 1;
            }
        }
    }
    swaps
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn simulate_time_is_linear(
        cpu in cpu_strategy(),
        secs in 0.0f64..10.0,
        accesses in 0u64..1_000_000,
    ) {
        let expected = secs / cpu.clock_multiplier()
            + cpu.cache_miss_penalty_us() * 1e-6 * cpu.cache_miss_rate() * accesses as f64;
        prop_assert!(close(cpu.simulate_time(secs, accesses), expected));

        // Additive in each argument separately.
        let split = cpu.simulate_time(secs, 0) + cpu.simulate_time(0.0, accesses);
        prop_assert!(close(cpu.simulate_time(secs, accesses), split));
        prop_assert_eq!(cpu.simulate_time(0.0, 0), 0.0);
    }

    #[test]
    fn constant_series_has_zero_stddev(value in -1e3f64..1e3, len in 1usize..64) {
        let data = vec![value; len];
        let summary = SummaryStatistics::from_slice(&data);
        prop_assert!(close(summary.mean, value));
        prop_assert!(summary.stddev.abs() < 1e-9);
    }

    #[test]
    fn stddev_non_negative(data in prop::collection::vec(-1e3f64..1e3, 0..64)) {
        let m = mean(&data);
        prop_assert!(stddev(&data, m) >= 0.0);
    }

    #[test]
    fn sort_is_sorted_permutation(input in prop::collection::vec(-1000i64..1000, 0..64)) {
        let original = input.clone();
        let mut counter = MemoryAccessCounter::new();
        let out = BubbleSort.run(&input, None, &mut counter);
        let sorted = out.as_sorted().expect("sort output");

        let mut expected = original.clone();
        expected.sort();
        prop_assert_eq!(sorted, &expected[..]);
        prop_assert_eq!(&input, &original);

        let n = input.len() as u64;
        let comparisons = n * n.saturating_sub(1) / 2;
        prop_assert_eq!(counter.value(), 2 * comparisons + 4 * count_swaps(&input));
    }

    #[test]
    fn search_finds_target_within_bounds(
        input in prop::collection::vec(0i64..20, 0..64),
        target in 0i64..25,
    ) {
        let mut counter = MemoryAccessCounter::new();
        let out = LinearSearch.run(&input, Some(target), &mut counter);
        let index = out.as_index().expect("search output");

        match input.iter().position(|&v| v == target) {
            Some(first) => {
                prop_assert_eq!(index, first as i64);
                prop_assert_eq!(input[index as usize], target);
                prop_assert_eq!(counter.value(), first as u64 + 1);
            }
            None => {
                prop_assert_eq!(index, -1);
                prop_assert_eq!(counter.value(), input.len() as u64);
            }
        }
        prop_assert!(counter.value() <= input.len() as u64);
    }
}
