//! Introspective Sort Implementation
//!
//! Quicksort-style partitioning with two escape hatches:
//! - ranges of at most [`INSERTION_THRESHOLD`] elements go to insertion sort
//! - once the depth budget runs out the range goes to heapsort
//!
//! The budget starts at `2 * floor(log2(n))`, which keeps the worst case at
//! O(n log n) even when every pivot is the range minimum or maximum.

use crate::{heapsort, insertion_sort, partition::partition};

/// Ranges this small are finished with insertion sort.
pub const INSERTION_THRESHOLD: usize = 20;

/// Sort a slice in-place using introsort. Not stable.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    let max_depth = depth_limit(data.len());
    sort_with_depth_limit(data, max_depth)
}

/// Initial recursion budget for a slice of `len` elements.
pub fn depth_limit(len: usize) -> usize {
    if len < 2 {
        0
    } else {
        2 * len.ilog2() as usize
    }
}

/// Sort a slice in-place using introsort with an explicit depth budget.
///
/// A budget of 0 sends any range longer than [`INSERTION_THRESHOLD`] straight
/// to heapsort.
pub fn sort_with_depth_limit<T: Ord>(data: &mut [T], max_depth: usize) -> &mut [T] {
    let end = data.len();
    sort_range(data, 0, end, max_depth);
    data
}

/// Sort the half-open range `data[start..end]`.
fn sort_range<T: Ord>(data: &mut [T], start: usize, end: usize, max_depth: usize) {
    let len = end - start;

    if len <= 1 {
        return;
    }

    if len <= INSERTION_THRESHOLD {
        insertion_sort::sort(&mut data[start..end]);
        return;
    }

    if max_depth == 0 {
        heapsort::sort(&mut data[start..end]);
        return;
    }

    let mid = partition(data, start, end - 1);
    sort_range(data, start, mid, max_depth - 1);
    sort_range(data, mid + 1, end, max_depth - 1);
}
