//! Heapsort Implementation
//!
//! Builds a max-heap over the whole slice, then repeatedly moves the root
//! (the current maximum) behind the shrinking heap prefix.
//!
//! Complexity: O(n log n) worst case, O(1) extra space, not stable.

/// Sort a slice in-place using heapsort.
pub fn sort<T: Ord>(data: &mut [T]) -> &mut [T] {
    build_max_heap(data);

    // data[..heap_size] is a max-heap, data[heap_size..] is sorted
    let mut heap_size = data.len();
    while heap_size > 0 {
        heap_size -= 1;
        data.swap(0, heap_size);
        max_heapify(data, heap_size, 0);
    }
    data
}

/// Turn the whole slice into a max-heap, bottom-up from the last parent.
fn build_max_heap<T: Ord>(data: &mut [T]) {
    let n = data.len();
    for i in (0..n / 2).rev() {
        max_heapify(data, n, i);
    }
}

/// Sift `data[i]` down within `data[..heap_size]`.
///
/// Both child subtrees of `i` must already be max-heaps.
fn max_heapify<T: Ord>(data: &mut [T], heap_size: usize, mut i: usize) {
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut largest = i;

        if left < heap_size && data[left] > data[largest] {
            largest = left;
        }
        if right < heap_size && data[right] > data[largest] {
            largest = right;
        }

        if largest == i {
            break;
        }
        data.swap(i, largest);
        i = largest;
    }
}
