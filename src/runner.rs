//! `ExperimentRunner` entry point and grid driver.

use std::sync::OnceLock;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, info, warn};

use crate::algorithm::Algorithm;
use crate::config::Config;
use crate::cpu::CpuModel;
use crate::error::Result;
use crate::input::TrialInput;
use crate::measurement::{MemoryAccessCounter, Timer, TrialResult};
use crate::output::Reporter;
use crate::result::ExperimentReport;
use crate::statistics::TimeSeries;

/// Drives repeated randomized trials and summarizes their simulated times.
///
/// # Example
///
/// ```
/// use simbench::{BubbleSort, CpuModel, ExperimentRunner};
///
/// let report = ExperimentRunner::new()
///     .runs(3)
///     .seed(42)
///     .run(&BubbleSort, &CpuModel::mid(), 50);
///
/// assert_eq!(report.runs, 3);
/// assert!(report.mean > 0.0);
/// ```
///
/// # Trial pipeline
///
/// For each of `runs` trials, strictly in sequence:
/// 1. Generate a fresh input and draw its target
/// 2. Reset the memory-access counter
/// 3. Time only the `Algorithm::run` call
/// 4. Map `(seconds, accesses)` through the CPU model and append to the series
#[derive(Debug, Clone)]
pub struct ExperimentRunner {
    config: Config,
    /// Probed on first use unless supplied through [`ExperimentRunner::timer`].
    timer: OnceLock<Timer>,
}

impl Default for ExperimentRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperimentRunner {
    /// Create with default configuration (5 runs, unseeded).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create from an explicit configuration.
    ///
    /// The clock resolution is probed lazily, before the first trial.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            timer: OnceLock::new(),
        }
    }

    /// Use `timer` instead of probing the clock resolution.
    pub fn timer(mut self, timer: Timer) -> Self {
        self.timer = OnceLock::from(timer);
        self
    }

    /// The timer used for trials, probing the clock on first call.
    pub fn active_timer(&self) -> &Timer {
        self.timer.get_or_init(|| {
            let timer = Timer::new();
            debug!(resolution_secs = timer.resolution_secs(), "timer calibrated");
            timer
        })
    }

    /// Set trials per experiment.
    pub fn runs(mut self, n: usize) -> Self {
        self.config.runs = n;
        self
    }

    /// Set deterministic input-generation seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Merge `SIMBENCH_*` environment overrides into the configuration.
    pub fn from_env(mut self) -> Self {
        self.config = self.config.from_env();
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one experiment and return its report record.
    ///
    /// Inputs come from a `Xoshiro256PlusPlus` seeded with the configured
    /// seed, or from the thread RNG when no seed is set.
    pub fn run<A>(&self, algorithm: &A, cpu: &CpuModel, input_size: usize) -> ExperimentReport
    where
        A: Algorithm + ?Sized,
    {
        let mut rng = self.rng_for(0);
        self.run_with_rng(algorithm, cpu, input_size, &mut rng)
    }

    /// Run one experiment using a caller-provided RNG.
    pub fn run_with_rng<A, R>(
        &self,
        algorithm: &A,
        cpu: &CpuModel,
        input_size: usize,
        rng: &mut R,
    ) -> ExperimentReport
    where
        A: Algorithm + ?Sized,
        R: Rng + ?Sized,
    {
        let series = self.run_series(algorithm, cpu, input_size, rng);
        let summary = series.summary();

        info!(
            algorithm = algorithm.name(),
            cpu = cpu.name(),
            input_size,
            runs = series.len(),
            mean = summary.mean,
            stddev = summary.stddev,
            "experiment complete"
        );

        ExperimentReport::new(algorithm.name(), cpu.name(), input_size, series.len(), summary)
    }

    /// Run the configured number of trials and return the raw time series.
    ///
    /// The series always has exactly `config().runs` entries.
    pub fn run_series<A, R>(
        &self,
        algorithm: &A,
        cpu: &CpuModel,
        input_size: usize,
        rng: &mut R,
    ) -> TimeSeries
    where
        A: Algorithm + ?Sized,
        R: Rng + ?Sized,
    {
        let runs = self.config.runs;
        if runs == 0 {
            warn!(
                algorithm = algorithm.name(),
                cpu = cpu.name(),
                "run count is zero; summary will be (0.0, 0.0)"
            );
        }

        let mut series = TimeSeries::with_capacity(runs);
        let mut counter = MemoryAccessCounter::new();

        for trial in 0..runs {
            let input = TrialInput::generate(rng, input_size);
            let result = self.run_trial(algorithm, &input, &mut counter);
            let simulated = cpu.simulate_time(result.raw_secs, result.memory_accesses);

            let resolution_secs = self.active_timer().resolution_secs();
            if result.raw_secs < resolution_secs {
                debug!(
                    trial,
                    raw_secs = result.raw_secs,
                    resolution_secs,
                    "trial shorter than timer resolution"
                );
            }

            debug!(
                trial,
                raw_secs = result.raw_secs,
                memory_accesses = result.memory_accesses,
                simulated_secs = simulated,
                "trial complete"
            );

            series.push(simulated);
        }

        series
    }

    /// Time a single algorithm invocation against a prepared input.
    ///
    /// Only the `run` call sits inside the timed region.
    pub fn run_trial<A>(
        &self,
        algorithm: &A,
        input: &TrialInput,
        counter: &mut MemoryAccessCounter,
    ) -> TrialResult
    where
        A: Algorithm + ?Sized,
    {
        counter.reset();
        let (_output, raw_secs) = self
            .active_timer()
            .measure_secs(|| algorithm.run(&input.values, input.target, counter));
        TrialResult::new(raw_secs, counter.value())
    }

    /// Run every (algorithm, CPU model, input size) combination.
    ///
    /// Iterates algorithms, then CPU models, then sizes, and hands each record
    /// to `reporter` as soon as its experiment finishes. With a configured
    /// seed, experiment `i` in that order is seeded with `seed + i`.
    ///
    /// # Errors
    ///
    /// Propagates the first reporter failure; remaining experiments are skipped.
    pub fn run_grid<A, R>(
        &self,
        algorithms: &[A],
        cpus: &[CpuModel],
        sizes: &[usize],
        reporter: &mut R,
    ) -> Result<()>
    where
        A: Algorithm,
        R: Reporter + ?Sized,
    {
        let mut index = 0u64;
        for algorithm in algorithms {
            for cpu in cpus {
                for &size in sizes {
                    let mut rng = self.rng_for(index);
                    let report = self.run_with_rng(algorithm, cpu, size, &mut rng);
                    reporter.report(&report)?;
                    index += 1;
                }
            }
        }
        Ok(())
    }

    fn rng_for(&self, offset: u64) -> Xoshiro256PlusPlus {
        match self.config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(offset)),
            None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{AlgorithmOutput, BubbleSort, LinearSearch};

    fn runner() -> ExperimentRunner {
        ExperimentRunner::new().timer(Timer::with_resolution_secs(1e-9))
    }

    /// Algorithm that reports a fixed access count and does no work.
    struct FixedAccesses(u64);

    impl Algorithm for FixedAccesses {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn run(
            &self,
            _input: &[i64],
            _target: Option<i64>,
            counter: &mut MemoryAccessCounter,
        ) -> AlgorithmOutput {
            counter.add(self.0);
            AlgorithmOutput::Index(None)
        }
    }

    #[test]
    fn test_series_length_matches_runs() {
        let runner = runner().runs(7).seed(1);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let series = runner.run_series(&LinearSearch, &CpuModel::basic(), 20, &mut rng);
        assert_eq!(series.len(), 7);
        assert!(series.as_slice().iter().all(|t| *t >= 0.0));
    }

    #[test]
    fn test_zero_runs() {
        let report = runner().runs(0).run(&BubbleSort, &CpuModel::pro(), 10);
        assert_eq!(report.runs, 0);
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.stddev, 0.0);
    }

    #[test]
    fn test_counter_reset_between_trials() {
        let runner = runner();
        let mut counter = MemoryAccessCounter::new();
        counter.add(1_000);
        let input = TrialInput {
            values: vec![1, 2, 3],
            target: Some(3),
        };
        let result = runner.run_trial(&LinearSearch, &input, &mut counter);
        assert_eq!(result.memory_accesses, 3);
    }

    #[test]
    fn test_penalty_lower_bound() {
        // Simulated time is at least the penalty term since raw time >= 0.
        let cpu = CpuModel::basic();
        let accesses = 10_000;
        let report = runner().runs(4).seed(3).run(&FixedAccesses(accesses), &cpu, 5);
        let floor = cpu.simulate_time(0.0, accesses);
        assert!(report.mean >= floor);
    }

    #[test]
    fn test_grid_order() {
        let algorithms: Vec<Box<dyn Algorithm>> = vec![Box::new(BubbleSort), Box::new(LinearSearch)];
        let cpus = CpuModel::reference_models();
        let sizes = [0, 3];
        let mut sink: Vec<ExperimentReport> = Vec::new();

        runner()
            .runs(2)
            .seed(11)
            .run_grid(&algorithms, &cpus, &sizes, &mut sink)
            .unwrap();

        let keys: Vec<_> = sink
            .iter()
            .map(|r| (r.algorithm.as_str(), r.cpu.as_str(), r.input_size))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Bubble Sort", "Basic", 0),
                ("Bubble Sort", "Basic", 3),
                ("Bubble Sort", "Mid", 0),
                ("Bubble Sort", "Mid", 3),
                ("Bubble Sort", "Pro", 0),
                ("Bubble Sort", "Pro", 3),
                ("Linear Search", "Basic", 0),
                ("Linear Search", "Basic", 3),
                ("Linear Search", "Mid", 0),
                ("Linear Search", "Mid", 3),
                ("Linear Search", "Pro", 0),
                ("Linear Search", "Pro", 3),
            ]
        );
    }

    #[test]
    fn test_timer_probe_is_lazy() {
        let runner = ExperimentRunner::new();
        assert!(runner.timer.get().is_none());

        let runner = runner.timer(Timer::with_resolution_secs(1e-9));
        assert_eq!(runner.active_timer().resolution_secs(), 1e-9);

        let probed = ExperimentRunner::new();
        assert!(probed.active_timer().resolution_secs() > 0.0);
        assert!(probed.timer.get().is_some());
    }

    #[test]
    fn test_supplied_timer_survives_runs() {
        let runner = runner().runs(2).seed(5);
        runner.run(&LinearSearch, &CpuModel::mid(), 10);
        assert_eq!(runner.active_timer().resolution_secs(), 1e-9);
    }

    #[test]
    fn test_builder_config() {
        let runner = runner().runs(9).seed(123);
        assert_eq!(runner.config().runs, 9);
        assert_eq!(runner.config().seed, Some(123));
    }
}
