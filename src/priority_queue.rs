//! Binary-heap priority queue with a fixed orientation and key updates
//!
//! [`PriorityQueue`] stores [`Prioritized`] elements in a `Vec` laid out as a
//! binary heap. The orientation is chosen once at construction: a max queue
//! yields the highest priority first, a min queue the lowest.
//!
//! Unlike `std::collections::BinaryHeap`, elements can be re-prioritized in
//! place with [`update_key`](PriorityQueue::update_key). The element is found
//! by identity through a linear scan, so an update costs O(n). Tracking each
//! element's index in a side table would make the lookup O(1); this queue
//! does not do that.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_root` | O(log n)   |
//! | `peek`         | O(1)       |
//! | `update_key`   | O(n)       |
//! | `from_vec`     | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_heap_scheduler::{PriorityQueue, Task};
//!
//! let mut queue = PriorityQueue::max();
//! queue.insert(Task::new("T1", 10, 0.0));
//! queue.insert(Task::new("T2", 5, 1.0));
//! queue.insert(Task::new("T3", 15, 2.0));
//!
//! assert_eq!(queue.extract_root().unwrap().task_id(), "T3");
//! assert_eq!(queue.peek().unwrap().task_id(), "T1");
//!
//! queue.update_key("T2", 20).unwrap();
//! assert_eq!(queue.extract_root().unwrap().task_id(), "T2");
//! ```

use std::fmt;

use crate::binary::{build_heap_by, is_heap_by, sift_down_by, sift_up_by, Orientation};
use crate::traits::{Heap, HeapError, Prioritized};

/// A priority queue backed by an array binary heap
#[derive(Clone)]
pub struct PriorityQueue<T: Prioritized> {
    /// Heap-ordered elements
    data: Vec<T>,
    orientation: Orientation,
}

impl<T: Prioritized> PriorityQueue<T> {
    /// Creates an empty queue with the given orientation
    pub fn new(orientation: Orientation) -> Self {
        Self {
            data: Vec::new(),
            orientation,
        }
    }

    /// Creates an empty queue that yields the highest priority first
    pub fn max() -> Self {
        Self::new(Orientation::Max)
    }

    /// Creates an empty queue that yields the lowest priority first
    pub fn min() -> Self {
        Self::new(Orientation::Min)
    }

    /// Creates a queue from existing elements in O(n)
    pub fn from_vec(data: Vec<T>, orientation: Orientation) -> Self {
        let mut queue = Self { data, orientation };
        build_heap_by(&mut queue.data, |a, b| {
            orientation.should_be_above(a.priority(), b.priority())
        });
        queue
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts an element
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Returns the root without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyQueue)
    }

    /// Removes and returns the root
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyQueue);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Removes and returns the highest-priority element of a max queue
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidConfiguration`] on a min queue and
    /// [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        self.expect_orientation(Orientation::Max, "extract_max")?;
        self.extract_root()
    }

    /// Removes and returns the lowest-priority element of a min queue
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidConfiguration`] on a max queue and
    /// [`HeapError::EmptyQueue`] if the queue is empty.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.expect_orientation(Orientation::Min, "extract_min")?;
        self.extract_root()
    }

    /// Changes the priority of the element whose identity is `id`
    ///
    /// The element is located by a linear scan, then moved toward the root if
    /// the new priority promotes it, or toward the leaves otherwise.
    ///
    /// # Errors
    /// Returns [`HeapError::ItemNotFound`] if no queued element has this identity.
    ///
    /// # Time Complexity
    /// O(n) for the lookup, O(log n) for the repositioning.
    pub fn update_key(&mut self, id: &T::Id, new_priority: T::Priority) -> Result<(), HeapError> {
        let index = self
            .position(id)
            .ok_or_else(|| HeapError::ItemNotFound(format!("{id:?}")))?;

        self.data[index].set_priority(new_priority);
        if !self.sift_up(index) {
            self.sift_down(index);
        }
        Ok(())
    }

    /// Returns true if the queue contains an element with this identity
    pub fn contains(&self, id: &T::Id) -> bool {
        self.position(id).is_some()
    }

    /// Checks the heap property over the whole queue
    pub fn is_valid_heap(&self) -> bool {
        let orientation = self.orientation;
        is_heap_by(&self.data, |a, b| {
            orientation.should_be_above(a.priority(), b.priority())
        })
    }

    /// Iterates over the elements in heap order, which is unspecified
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the queue, returning its elements in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.data.iter().position(|item| item.id() == id)
    }

    fn expect_orientation(&self, wanted: Orientation, operation: &str) -> Result<(), HeapError> {
        if self.orientation == wanted {
            Ok(())
        } else {
            Err(HeapError::InvalidConfiguration(format!(
                "{operation} called on a {} queue",
                self.orientation
            )))
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, index: usize) -> bool {
        let orientation = self.orientation;
        sift_up_by(&mut self.data, index, |a, b| {
            orientation.should_be_above(a.priority(), b.priority())
        })
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, index: usize) -> bool {
        let orientation = self.orientation;
        sift_down_by(&mut self.data, index, |a, b| {
            orientation.should_be_above(a.priority(), b.priority())
        })
    }
}

impl<T: Prioritized> Heap<T> for PriorityQueue<T> {
    fn new() -> Self {
        Self::max()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_root().ok()
    }
}

impl<T: Prioritized> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::max()
    }
}

impl<T: Prioritized> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), Orientation::Max)
    }
}

impl<T: Prioritized> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Prioritized> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.data.len())
            .field("orientation", &self.orientation)
            .finish()
    }
}
