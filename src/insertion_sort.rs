//! Insertion Sort Implementation
//!
//! Builds the sorted prefix one element at a time. Used on its own and as the
//! small-range base case of introsort.
//!
//! Complexity: O(n) on sorted input, O(n²) worst case.

/// Sort a slice in-place using insertion sort.
///
/// Each element is moved left past every element strictly greater than it,
/// so equal elements keep their relative order (stable).
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    for j in 1..data.len() {
        let mut i = j;
        while i > 0 && data[i - 1] > data[i] {
            data.swap(i - 1, i);
            i -= 1;
        }
    }
    data
}
