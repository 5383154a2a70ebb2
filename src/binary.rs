//! Array-indexed binary heap primitives
//!
//! A binary heap is stored in a slice where the children of the node at index
//! `i` live at `2i + 1` and `2i + 2`. Every primitive here is parameterized by
//! an `above` predicate: `above(a, b)` is true when `a` must sit closer to the
//! root than `b`. A max-heap passes `a > b`, a min-heap `a < b`, so the same
//! code serves both orientations and both consumers (heapsort and the
//! priority queue).
//!
//! The predicate must be strict. Equal elements are never swapped, which is
//! what makes [`build_heap_by`] a no-op on an input that is already a heap.
//!
//! ```text
//!           0
//!     1            2
//!  3     4      5     6
//! 7 8   9 10  11 12 13 14
//! ```
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `sift_up_by`    | O(log n)   |
//! | `sift_down_by`  | O(log n)   |
//! | `build_heap_by` | O(n)       |
//! | `is_heap_by`    | O(n)       |

use std::fmt;
use std::str::FromStr;

use crate::traits::HeapError;

/// Direction of a heap, fixed when the heap is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Largest element at the root
    #[default]
    Max,
    /// Smallest element at the root
    Min,
}

impl Orientation {
    /// Returns true if `a` belongs above `b` in a heap of this orientation
    #[inline]
    pub fn should_be_above<K: Ord + ?Sized>(self, a: &K, b: &K) -> bool {
        match self {
            Orientation::Max => a > b,
            Orientation::Min => a < b,
        }
    }

    /// Returns true if moving from `old` to `new` brings an element closer to the root
    pub fn is_promotion<K: Ord + ?Sized>(self, old: &K, new: &K) -> bool {
        self.should_be_above(new, old)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Max => write!(f, "max"),
            Orientation::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Orientation {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" => Ok(Orientation::Max),
            "min" => Ok(Orientation::Min),
            other => Err(HeapError::InvalidConfiguration(format!(
                "unknown heap orientation {other:?} (expected \"max\" or \"min\")"
            ))),
        }
    }
}

/// Index of the parent of `index`
///
/// The root has no parent; calling this with `0` is a logic error.
#[inline]
pub fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "the root has no parent");
    (index - 1) / 2
}

/// Index of the left child of `index`
#[inline]
pub fn left(index: usize) -> usize {
    2 * index + 1
}

/// Index of the right child of `index`
#[inline]
pub fn right(index: usize) -> usize {
    2 * index + 2
}

/// Move the element at `index` up until its parent no longer belongs below it
///
/// Assumes every ancestor of `index` already satisfies the heap property
/// except possibly with respect to `index` itself. Returns true if the
/// element moved.
pub fn sift_up_by<T, F>(data: &mut [T], mut index: usize, mut above: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(index < data.len(), "sift_up index out of range");
    let start = index;
    while index > 0 {
        let p = parent(index);
        if above(&data[index], &data[p]) {
            data.swap(index, p);
            index = p;
        } else {
            break;
        }
    }
    index != start
}

/// Move the element at `index` down until neither child belongs above it
///
/// Assumes both child subtrees of `index` are already valid heaps. Returns
/// true if the element moved.
pub fn sift_down_by<T, F>(data: &mut [T], mut index: usize, mut above: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let len = data.len();
    debug_assert!(index < len || len == 0, "sift_down index out of range");
    let start = index;
    loop {
        let l = left(index);
        let r = right(index);
        let mut top = index;

        if l < len && above(&data[l], &data[top]) {
            top = l;
        }
        if r < len && above(&data[r], &data[top]) {
            top = r;
        }

        if top == index {
            break;
        }
        data.swap(index, top);
        index = top;
    }
    index != start
}

/// Rearrange an arbitrary slice into a heap
///
/// Sifts down every internal node from the last one back to the root. The
/// total work is bounded by the sum of subtree heights, which is O(n).
pub fn build_heap_by<T, F>(data: &mut [T], mut above: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if data.len() < 2 {
        return;
    }
    for index in (0..data.len() / 2).rev() {
        sift_down_by(data, index, &mut above);
    }
}

/// Check that no child belongs above its parent
pub fn is_heap_by<T, F>(data: &[T], mut above: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    (1..data.len()).all(|index| !above(&data[index], &data[parent(index)]))
}

/// Build a heap of `Ord` values with the given orientation
pub fn build_heap<T: Ord>(data: &mut [T], orientation: Orientation) {
    build_heap_by(data, |a, b| orientation.should_be_above(a, b));
}

/// Check the heap property of `Ord` values with the given orientation
pub fn is_heap<T: Ord>(data: &[T], orientation: Orientation) -> bool {
    is_heap_by(data, |a, b| orientation.should_be_above(a, b))
}
