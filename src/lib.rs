//! Classical Sorting Algorithms and Benchmark Harness
//!
//! This crate implements five textbook sorting algorithms over in-memory slices
//! and a harness that times them across input sizes:
//! - **Insertion Sort**: O(n²) - stable, adaptive, in-place
//! - **Quicksort**: O(n log n) expected - Lomuto partition, last element as pivot
//! - **Heapsort**: O(n log n) worst case - in-place, not stable
//! - **Counting Sort**: O(n + k) - stable, for bounded non-negative integers
//! - **Introsort**: O(n log n) worst case - quicksort with heapsort and insertion sort fallbacks
//!
//! All in-place sorts return the slice they were given so calls can be chained.

pub mod benchmark;
pub mod config;
pub mod counting_sort;
pub mod error;
pub mod heapsort;
pub mod insertion_sort;
pub mod introsort;
pub mod partition;
pub mod quicksort;
pub mod raw_data;
pub mod report;

pub use benchmark::{Algorithm, BenchmarkRun, ResultRow, ResultTable};
pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use partition::partition;
pub use raw_data::RawTimings;

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
