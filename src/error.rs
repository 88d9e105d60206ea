use std::io;

/// Errors raised by the benchmark harness and raw-data persistence.
///
/// The sorting functions themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("input size at position {index} is 0, sizes must be positive")]
    ZeroSize { index: usize },
    #[error("no input sizes configured")]
    NoSizes,
    #[error("repetition count must be at least 1")]
    NoRepetitions,
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidRange { min: u32, max: u32 },
    #[error("raw timings i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("raw timings (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
