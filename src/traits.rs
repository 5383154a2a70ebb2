//! Common traits for heap data structures
//!
//! This module provides the small trait surface shared by the heaps in this crate:
//!
//! - [`Heap`]: Base trait for array-backed heaps with a `BinaryHeap`-like API
//! - [`Prioritized`]: Element trait for values that carry their own mutable priority
//!   and a stable identity used to find them again for key updates
//!
//! It also defines [`HeapError`], the error type returned by every fallible
//! queue operation.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// Peek or extract on a heap with no elements
    #[error("cannot access the root of an empty queue")]
    EmptyQueue,
    /// Key update for an identity that is not in the queue
    #[error("item {0} is not present in the queue")]
    ItemNotFound(String),
    /// Unsupported orientation value, or an extract that does not match the
    /// queue's orientation
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// An element that carries its own priority and identity
///
/// Identity must be stable for as long as the element is queued: it is what
/// [`PriorityQueue::update_key`](crate::priority_queue::PriorityQueue::update_key)
/// scans for. Priority is deliberately *not* identity, since it is the value
/// being changed.
pub trait Prioritized {
    /// Ordered priority value
    type Priority: Ord + Clone;

    /// Identity used for lookup
    type Id: PartialEq + std::fmt::Debug + ?Sized;

    /// Returns the current priority
    fn priority(&self) -> &Self::Priority;

    /// Returns the identity of this element
    fn id(&self) -> &Self::Id;

    /// Replaces the priority
    ///
    /// Called by the queue during a key update. A queue owns every element it
    /// holds, so nothing outside it can reach a queued element through this
    /// method.
    fn set_priority(&mut self, priority: Self::Priority);
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the root
/// - `peek` returns the root without removing it
///
/// Which element is the root depends on the heap's orientation: the largest
/// priority for a max-heap, the smallest for a min-heap.
///
/// # Example
///
/// ```rust
/// use rust_heap_scheduler::{Heap, PriorityQueue, Task};
///
/// let mut queue: PriorityQueue<Task> = Heap::new();
/// queue.push(Task::new("low", 1, 0.0));
/// queue.push(Task::new("high", 9, 0.0));
///
/// assert_eq!(Heap::peek(&queue).map(|t| t.task_id()), Some("high"));
/// assert_eq!(queue.pop().map(|t| t.priority()), Some(9));
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the root
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}
