//! Benchmark configuration.

use std::path::{Path, PathBuf};

use crate::error::BenchmarkError;

/// Input sizes used when none are given.
pub const DEFAULT_SIZES: [usize; 7] = [100, 500, 1000, 2500, 5000, 7500, 10_000];
/// Timed trials per (algorithm, size) cell.
pub const DEFAULT_REPETITIONS: usize = 10;
/// Inclusive range sample values are drawn from.
pub const DEFAULT_VALUE_RANGE: (u32, u32) = (0, 99);

/// Settings for one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    /// Input sizes, one table column each. Must all be positive.
    pub sizes: Vec<usize>,
    /// Timed trials per cell.
    pub repetitions: usize,
    /// Inclusive `(min, max)` range of sample values.
    pub value_range: (u32, u32),
    /// Write the raw per-trial timings to `output_dir`.
    pub persist_raw: bool,
    pub output_dir: PathBuf,
    /// Evaluate independent cells on the rayon thread pool.
    pub parallel: bool,
    /// Seed for reproducible samples; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
            value_range: DEFAULT_VALUE_RANGE,
            persist_raw: false,
            output_dir: PathBuf::from("."),
            parallel: false,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    /// Default configuration over the given sizes.
    pub fn new(sizes: Vec<usize>) -> Self {
        BenchmarkConfig {
            sizes,
            ..Default::default()
        }
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.value_range = (min, max);
        self
    }

    /// Persist raw timings into `dir` after the run.
    pub fn with_raw_output(mut self, dir: impl AsRef<Path>) -> Self {
        self.persist_raw = true;
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations the harness cannot run.
    pub fn validate(&self) -> Result<(), BenchmarkError> {
        if self.sizes.is_empty() {
            return Err(BenchmarkError::NoSizes);
        }
        if let Some(index) = self.sizes.iter().position(|&size| size == 0) {
            return Err(BenchmarkError::ZeroSize { index });
        }
        if self.repetitions == 0 {
            return Err(BenchmarkError::NoRepetitions);
        }
        let (min, max) = self.value_range;
        if min > max {
            return Err(BenchmarkError::InvalidRange { min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BenchmarkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sizes, DEFAULT_SIZES.to_vec());
        assert!(!config.persist_raw);
    }

    #[test]
    fn test_builder() {
        let config = BenchmarkConfig::new(vec![10, 20])
            .with_repetitions(3)
            .with_value_range(5, 9)
            .with_raw_output("out")
            .with_parallel(true)
            .with_seed(7);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.value_range, (5, 9));
        assert!(config.persist_raw);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = BenchmarkConfig::new(vec![10, 0, 30]);
        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::ZeroSize { index: 1 })
        ));
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let config = BenchmarkConfig::new(vec![]);
        assert!(matches!(config.validate(), Err(BenchmarkError::NoSizes)));
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let config = BenchmarkConfig::default().with_repetitions(0);
        assert!(matches!(config.validate(), Err(BenchmarkError::NoRepetitions)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = BenchmarkConfig::default().with_value_range(10, 1);
        assert!(matches!(
            config.validate(),
            Err(BenchmarkError::InvalidRange { min: 10, max: 1 })
        ));
    }
}
