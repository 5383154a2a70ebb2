//! Binary Heaps, Heapsort and Priority Scheduling for Rust
//!
//! This crate provides one array-backed binary heap engine and the things built on it:
//!
//! - **Heap core** ([`binary`]): index arithmetic, sift-up, sift-down, O(n) build and a
//!   heap-property check, shared by max- and min-heaps through [`Orientation`]
//! - **Heapsort** ([`heapsort`]): O(n log n) in-place or copying sort by `Ord`, key or comparator
//! - **Priority queue** ([`priority_queue`]): insert, extract-root, peek and key updates with a
//!   fixed max or min orientation
//! - **Task scheduling** ([`task`], [`scheduler`]): a deadline-aware simulation that executes
//!   tasks in priority order and reports per-task outcomes and aggregate statistics
//!
//! # Example
//!
//! ```rust
//! use rust_heap_scheduler::{heapsort, PriorityQueue, Task};
//!
//! assert_eq!(heapsort(&[12, 11, 13, 5, 6, 7]), vec![5, 6, 7, 11, 12, 13]);
//!
//! let mut queue = PriorityQueue::max();
//! queue.insert(Task::new("T1", 10, 0.0));
//! queue.insert(Task::new("T2", 5, 1.0));
//! queue.update_key("T2", 50).unwrap();
//! assert_eq!(queue.extract_root().unwrap().task_id(), "T2");
//! ```

pub mod binary;
pub mod config;
pub mod heapsort;
pub mod logging;
pub mod priority_queue;
pub mod scheduler;
pub mod task;
pub mod traits;

// Re-export the main types for convenience
pub use binary::Orientation;
pub use config::SchedulerConfig;
pub use heapsort::{
    heapsort, heapsort_by, heapsort_by_key, heapsort_in_place, heapsort_in_place_by,
    heapsort_in_place_by_key,
};
pub use priority_queue::PriorityQueue;
pub use scheduler::{ScheduleResult, ScheduleStatistics, Scheduler};
pub use task::Task;
pub use traits::{Heap, HeapError, Prioritized};
