//! Heapsort
//!
//! Sorts by building a max-heap over the input and then repeatedly swapping
//! the root (the current maximum) into the end of the shrinking live region
//! `[0, i)`. The sorted suffix grows by one element per step.
//!
//! Every entry point has a copying form that leaves its input untouched and
//! an `_in_place` form that rearranges the caller's storage. Ordering can come
//! from `Ord`, from a key projection, or from a comparator, so float keys can
//! be sorted with [`f64::total_cmp`].
//!
//! Heapsort is not stable: elements with equal keys may be reordered.
//!
//! # Time Complexity
//!
//! O(n log n) for every input, including already sorted ones. Build plus
//! extraction always runs in full. In-place sorting needs O(1) extra space,
//! the copying forms O(n).
//!
//! # Example
//!
//! ```rust
//! use rust_heap_scheduler::heapsort::{heapsort, heapsort_in_place};
//!
//! let original = vec![12, 11, 13, 5, 6, 7];
//! assert_eq!(heapsort(&original), vec![5, 6, 7, 11, 12, 13]);
//! assert_eq!(original, vec![12, 11, 13, 5, 6, 7]);
//!
//! let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! heapsort_in_place(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

use std::cmp::Ordering;

use crate::binary::{build_heap_by, sift_down_by, sift_up_by};
use crate::traits::HeapError;

/// Sort a copy of `items` in ascending order
pub fn heapsort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    heapsort_in_place(&mut sorted);
    sorted
}

/// Sort a copy of `items` in ascending order of `key`
pub fn heapsort_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted = items.to_vec();
    heapsort_in_place_by_key(&mut sorted, key);
    sorted
}

/// Sort a copy of `items` with a comparator
pub fn heapsort_by<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    heapsort_in_place_by(&mut sorted, compare);
    sorted
}

/// Sort `data` in place in ascending order
pub fn heapsort_in_place<T: Ord>(data: &mut [T]) {
    heapsort_in_place_by(data, T::cmp);
}

/// Sort `data` in place in ascending order of `key`
pub fn heapsort_in_place_by_key<T, K, F>(data: &mut [T], mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heapsort_in_place_by(data, |a, b| key(a).cmp(&key(b)));
}

/// Sort `data` in place with a comparator
pub fn heapsort_in_place_by<T, F>(data: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut above = |a: &T, b: &T| compare(a, b) == Ordering::Greater;

    build_heap_by(data, &mut above);

    for end in (1..data.len()).rev() {
        // data[..=end] is a max-heap, data[end + 1..] is sorted
        data.swap(0, end);
        sift_down_by(&mut data[..end], 0, &mut above);
    }
}

/// Push `item` onto a max-heap stored in `heap`, ordered by `key`
pub fn heap_push_by_key<T, K, F>(heap: &mut Vec<T>, item: T, mut key: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    heap.push(item);
    let last = heap.len() - 1;
    sift_up_by(heap, last, |a, b| key(a) > key(b));
}

/// Remove and return the maximum of a max-heap stored in `heap`, ordered by `key`
///
/// # Errors
/// Returns [`HeapError::EmptyQueue`] if `heap` is empty.
pub fn heap_pop_max_by_key<T, K, F>(heap: &mut Vec<T>, mut key: F) -> Result<T, HeapError>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    if heap.is_empty() {
        return Err(HeapError::EmptyQueue);
    }
    let root = heap.swap_remove(0);
    if !heap.is_empty() {
        sift_down_by(heap, 0, |a, b| key(a) > key(b));
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{is_heap, Orientation};

    #[test]
    fn test_copy_leaves_input_untouched() {
        let input = vec![12, 11, 13, 5, 6, 7];
        let sorted = heapsort(&input);
        assert_eq!(sorted, vec![5, 6, 7, 11, 12, 13]);
        assert_eq!(input, vec![12, 11, 13, 5, 6, 7]);
    }

    #[test]
    fn test_in_place() {
        let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
        heapsort_in_place(&mut data);
        assert_eq!(data, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn test_edge_cases() {
        let empty: Vec<i32> = Vec::new();
        assert!(heapsort(&empty).is_empty());
        assert_eq!(heapsort(&[42]), vec![42]);

        let mut equal = vec![7; 16];
        heapsort_in_place(&mut equal);
        assert_eq!(equal, vec![7; 16]);
    }

    #[test]
    fn test_sorted_and_reverse_sorted() {
        let ascending: Vec<i32> = (0..100).collect();
        let descending: Vec<i32> = (0..100).rev().collect();
        assert_eq!(heapsort(&ascending), ascending);
        assert_eq!(heapsort(&descending), ascending);
    }

    #[test]
    fn test_by_key() {
        let words = ["banana", "kiwi", "apple", "fig"];
        let sorted = heapsort_by_key(&words, |w| w.len());
        let lengths: Vec<usize> = sorted.iter().map(|w| w.len()).collect();
        assert_eq!(lengths, vec![3, 4, 5, 6]);

        let mut pairs = vec![(1, 'c'), (3, 'a'), (2, 'b')];
        heapsort_in_place_by_key(&mut pairs, |&(_, c)| c);
        assert_eq!(pairs, vec![(3, 'a'), (2, 'b'), (1, 'c')]);
    }

    #[test]
    fn test_by_comparator_for_floats() {
        let values = [2.5_f64, -1.0, 10.25, 0.0];
        let sorted = heapsort_by(&values, f64::total_cmp);
        assert_eq!(sorted, vec![-1.0, 0.0, 2.5, 10.25]);

        let mut descending = vec![1, 5, 3];
        heapsort_in_place_by(&mut descending, |a, b| b.cmp(a));
        assert_eq!(descending, vec![5, 3, 1]);
    }

    #[test]
    fn test_raw_push_and_pop_max() {
        let mut heap = vec![10, 5, 3, 4, 1];
        heap_push_by_key(&mut heap, 15, |&x| x);
        assert_eq!(heap, vec![15, 5, 10, 4, 1, 3]);
        assert!(is_heap(&heap, Orientation::Max));

        assert_eq!(heap_pop_max_by_key(&mut heap, |&x| x), Ok(15));
        assert_eq!(heap_pop_max_by_key(&mut heap, |&x| x), Ok(10));
        assert!(is_heap(&heap, Orientation::Max));
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn test_raw_pop_from_empty() {
        let mut heap: Vec<i32> = Vec::new();
        assert_eq!(
            heap_pop_max_by_key(&mut heap, |&x| x),
            Err(HeapError::EmptyQueue)
        );
    }
}
