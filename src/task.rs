//! Task records scheduled through the priority queue
//!
//! A [`Task`] is immutable once built except for its priority, which has no
//! public setter. The only way to change it is
//! [`PriorityQueue::update_key`](crate::priority_queue::PriorityQueue::update_key),
//! which repositions the task so the heap stays valid.

use std::fmt;

use crate::traits::Prioritized;

/// Default estimated execution time for a task
pub const DEFAULT_EXECUTION_TIME: f64 = 1.0;

/// A unit of work with a priority, timing information and an optional deadline
///
/// Higher priority values mean more important work, independent of the
/// orientation of the queue a task is stored in.
///
/// # Example
///
/// ```rust
/// use rust_heap_scheduler::Task;
///
/// let task = Task::new("T1", 10, 0.0)
///     .with_deadline(100.0)
///     .with_execution_time(5.0)
///     .with_description("compile");
///
/// assert_eq!(task.task_id(), "T1");
/// assert_eq!(task.priority(), 10);
/// assert_eq!(task.time_until_deadline(40.0), Some(60.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    task_id: String,
    priority: i64,
    arrival_time: f64,
    deadline: Option<f64>,
    execution_time: f64,
    description: String,
}

impl Task {
    /// Creates a task without a deadline, with the default execution time
    pub fn new(task_id: impl Into<String>, priority: i64, arrival_time: f64) -> Self {
        Self {
            task_id: task_id.into(),
            priority,
            arrival_time,
            deadline: None,
            execution_time: DEFAULT_EXECUTION_TIME,
            description: String::new(),
        }
    }

    /// Sets the deadline
    pub fn with_deadline(mut self, deadline: f64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the estimated execution time
    pub fn with_execution_time(mut self, execution_time: f64) -> Self {
        self.execution_time = execution_time;
        self
    }

    /// Sets the free-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the task has a deadline and `current_time` is past it
    pub fn is_overdue(&self, current_time: f64) -> bool {
        self.deadline
            .is_some_and(|deadline| current_time > deadline)
    }

    /// Time left until the deadline, clamped at zero
    ///
    /// Returns `None` for tasks without a deadline.
    pub fn time_until_deadline(&self, current_time: f64) -> Option<f64> {
        self.deadline
            .map(|deadline| (deadline - current_time).max(0.0))
    }
}

impl Prioritized for Task {
    type Priority = i64;
    type Id = str;

    fn priority(&self) -> &i64 {
        &self.priority
    }

    fn id(&self) -> &str {
        &self.task_id
    }

    fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (priority {}", self.task_id, self.priority)?;
        if let Some(deadline) = self.deadline {
            write!(f, ", deadline {deadline}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let task = Task::new("T1", 10, 2.5);
        assert_eq!(task.task_id(), "T1");
        assert_eq!(task.priority(), 10);
        assert_eq!(task.arrival_time(), 2.5);
        assert_eq!(task.deadline(), None);
        assert_eq!(task.execution_time(), DEFAULT_EXECUTION_TIME);
        assert_eq!(task.description(), "");
    }

    #[test]
    fn test_overdue() {
        let task = Task::new("T1", 1, 0.0).with_deadline(10.0);
        assert!(!task.is_overdue(5.0));
        assert!(!task.is_overdue(10.0));
        assert!(task.is_overdue(10.5));

        let open = Task::new("T2", 1, 0.0);
        assert!(!open.is_overdue(1e9));
    }

    #[test]
    fn test_time_until_deadline() {
        let task = Task::new("T1", 1, 0.0).with_deadline(10.0);
        assert_eq!(task.time_until_deadline(4.0), Some(6.0));
        assert_eq!(task.time_until_deadline(12.0), Some(0.0));
        assert_eq!(Task::new("T2", 1, 0.0).time_until_deadline(3.0), None);
    }

    #[test]
    fn test_prioritized_identity() {
        let mut task = Task::new("T1", 3, 0.0);
        assert_eq!(Prioritized::id(&task), "T1");
        task.set_priority(8);
        assert_eq!(*Prioritized::priority(&task), 8);
        assert_eq!(task.priority(), 8);
    }

    #[test]
    fn test_display() {
        let task = Task::new("T9", 4, 0.0).with_deadline(7.5);
        assert_eq!(task.to_string(), "T9 (priority 4, deadline 7.5)");
        assert_eq!(Task::new("T8", 2, 0.0).to_string(), "T8 (priority 2)");
    }
}
