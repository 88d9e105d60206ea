//! Counting Sort Implementation
//!
//! Non-comparison sort for bounded non-negative integers. A counting table of
//! `k + 1` slots is turned into prefix sums, then elements are scattered into a
//! new vector from the back so equal keys keep their order (stable).
//!
//! Complexity: O(n + k) time and space, where k is the largest value.

/// Sort `data` into a new vector using counting sort.
///
/// `max` is the largest value present; when `None` it is found with a full
/// scan. A hint smaller than some element panics on the out-of-range count.
pub fn sort(data: &[u32], max: Option<u32>) -> Vec<u32> {
    sort_by_key(data, max, |&value| value)
}

/// Stable counting sort of arbitrary items by a bounded integer key.
pub fn sort_by_key<T, F>(data: &[T], max: Option<u32>, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    let k = max.unwrap_or_else(|| data.iter().map(&key).max().unwrap_or(0)) as usize;

    let mut counts = vec![0usize; k + 1];
    for item in data {
        counts[key(item) as usize] += 1;
    }

    // counts[v] becomes the number of elements <= v
    for v in 1..counts.len() {
        counts[v] += counts[v - 1];
    }

    let mut output: Vec<Option<T>> = vec![None; data.len()];
    for item in data.iter().rev() {
        let slot = &mut counts[key(item) as usize];
        *slot -= 1;
        output[*slot] = Some(item.clone());
    }

    output.into_iter().flatten().collect()
}
