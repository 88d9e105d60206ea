//! Quicksort Implementation
//!
//! Lomuto quicksort with the last element of each range as pivot.
//!
//! Complexity: O(n log n) expected, O(n²) on sorted or reverse-sorted input.

use crate::partition::partition;

/// Sort a slice in-place using quicksort.
///
/// Not stable. Stack depth stays O(log n) because only the smaller side of
/// each partition is recursed into.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    if data.len() > 1 {
        let last = data.len() - 1;
        sort_range(data, 0, last);
    }
    data
}

/// Sort the inclusive range `data[start..=end]`.
fn sort_range<T: Ord>(data: &mut [T], mut start: usize, mut end: usize) {
    while start < end {
        let mid = partition(data, start, end);

        if mid - start < end - mid {
            if mid > start {
                sort_range(data, start, mid - 1);
            }
            start = mid + 1;
        } else {
            // mid > start here, so mid - 1 cannot underflow
            if mid < end {
                sort_range(data, mid + 1, end);
            }
            end = mid - 1;
        }
    }
}
