//! Lomuto partitioning shared by quicksort and introsort.

/// Partition `data[start..=pivot]` around the value at `pivot`.
///
/// Every element `<=` the pivot value ends up before it and every element `>`
/// it ends up after it. Returns the final index of the pivot. Not stable.
///
/// Requires `start <= pivot < data.len()`; out-of-range indices panic.
pub fn partition<T: Ord>(data: &mut [T], start: usize, pivot: usize) -> usize {
    // First slot past the "<= pivot" prefix
    let mut boundary = start;

    for i in start..pivot {
        if data[i] <= data[pivot] {
            data.swap(boundary, i);
            boundary += 1;
        }
    }

    data.swap(boundary, pivot);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_partitioned(data: &[u32], start: usize, mid: usize, end: usize) {
        let pivot = data[mid];
        assert!(data[start..mid].iter().all(|&x| x <= pivot));
        assert!(data[mid + 1..=end].iter().all(|&x| x > pivot));
    }

    #[test]
    fn test_partition_example() {
        let mut data = vec![5u32, 3, 4, 1, 2];
        let mid = partition(&mut data, 0, 4);
        assert_eq!(mid, 1);
        assert_eq!(data[mid], 2);
        assert_partitioned(&data, 0, mid, 4);
    }

    #[test]
    fn test_partition_single_element() {
        let mut data = vec![7u32];
        assert_eq!(partition(&mut data, 0, 0), 0);
        assert_eq!(data, vec![7]);
    }

    #[test]
    fn test_partition_pivot_is_max() {
        let mut data = vec![3u32, 1, 2, 9];
        assert_eq!(partition(&mut data, 0, 3), 3);
        assert_eq!(data[3], 9);
    }

    #[test]
    fn test_partition_pivot_is_min() {
        let mut data = vec![3u32, 5, 4, 0];
        assert_eq!(partition(&mut data, 0, 3), 0);
        assert_eq!(data[0], 0);
        assert_partitioned(&data, 0, 0, 3);
    }

    #[test]
    fn test_partition_duplicates_go_left() {
        let mut data = vec![2u32, 2, 3, 2, 1, 2];
        let mid = partition(&mut data, 0, 5);
        assert_eq!(mid, 4);
        assert_partitioned(&data, 0, mid, 5);
    }

    #[test]
    fn test_partition_sub_range_leaves_rest_alone() {
        let mut data = vec![100u32, 8, 6, 9, 7, 0];
        let mid = partition(&mut data, 1, 4);
        assert_eq!(data[0], 100);
        assert_eq!(data[5], 0);
        assert_eq!(data[mid], 7);
        assert_partitioned(&data, 1, mid, 4);
    }

    #[test]
    fn test_partition_random_preserves_elements() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let len = rng.gen_range(1..200);
            let mut data: Vec<u32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
            let mut before = data.clone();
            let start = rng.gen_range(0..len);
            let end = rng.gen_range(start..len);

            let mid = partition(&mut data, start, end);
            assert!((start..=end).contains(&mid));
            assert_partitioned(&data, start, mid, end);

            before.sort_unstable();
            let mut after = data.clone();
            after.sort_unstable();
            assert_eq!(before, after);
        }
    }
}
