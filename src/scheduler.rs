//! Priority-driven task scheduler simulation
//!
//! [`Scheduler::run`] loads every task into a max [`PriorityQueue`] and then
//! executes them one at a time in extraction order on a simulated clock:
//!
//! - `start = max(clock, arrival_time)`
//! - `completion = start + execution_time`
//! - `wait = start - arrival_time`
//! - the deadline is met when there is none or `completion <= deadline`
//!
//! The clock then advances to `completion`. Order among tasks with equal
//! priority is unspecified.
//!
//! # Time Complexity
//!
//! O(n log n) per run: n inserts and n extractions. [`ScheduleStatistics`]
//! is a single O(n) pass over the results.
//!
//! # Example
//!
//! ```rust
//! use rust_heap_scheduler::{Scheduler, ScheduleStatistics, Task};
//!
//! let tasks = vec![
//!     Task::new("T1", 10, 0.0).with_deadline(100.0).with_execution_time(5.0),
//!     Task::new("T2", 20, 0.0).with_deadline(50.0).with_execution_time(3.0),
//! ];
//!
//! let results = Scheduler::default().run(tasks);
//! assert_eq!(results[0].task().task_id(), "T2");
//! assert_eq!(results[1].start_time(), 3.0);
//!
//! let stats = ScheduleStatistics::from_results(&results);
//! assert_eq!(stats.deadline_met, 2);
//! ```

use crate::config::SchedulerConfig;
use crate::priority_queue::PriorityQueue;
use crate::task::Task;
use crate::{log_changes, log_checks, log_debug};

/// Outcome of executing one task
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    task: Task,
    start_time: f64,
    completion_time: f64,
    wait_time: f64,
    deadline_met: bool,
}

impl ScheduleResult {
    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn completion_time(&self) -> f64 {
        self.completion_time
    }

    /// Time between arrival and start of execution
    pub fn wait_time(&self) -> f64 {
        self.wait_time
    }

    /// True if the task had no deadline or finished by it
    pub fn deadline_met(&self) -> bool {
        self.deadline_met
    }
}

/// Aggregate figures derived from a set of [`ScheduleResult`]s
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleStatistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub deadline_met: usize,
    pub deadline_missed: usize,
    /// Latest completion time across all results
    pub total_execution_time: f64,
    pub average_wait_time: f64,
    /// Completed tasks per unit of time, zero when no time elapsed
    pub throughput: f64,
}

impl ScheduleStatistics {
    /// Compute statistics in one pass over `results`
    pub fn from_results(results: &[ScheduleResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut deadline_met = 0;
        let mut total_wait = 0.0;
        let mut total_execution_time = 0.0_f64;
        for result in results {
            if result.deadline_met {
                deadline_met += 1;
            }
            total_wait += result.wait_time;
            total_execution_time = total_execution_time.max(result.completion_time);
        }

        let total_tasks = results.len();
        let throughput = if total_execution_time > 0.0 {
            total_tasks as f64 / total_execution_time
        } else {
            0.0
        };

        Self {
            total_tasks,
            completed_tasks: total_tasks,
            deadline_met,
            deadline_missed: total_tasks - deadline_met,
            total_execution_time,
            average_wait_time: total_wait / total_tasks as f64,
            throughput,
        }
    }

    /// Fraction of tasks that met their deadline, zero for an empty schedule
    pub fn deadline_compliance(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.deadline_met as f64 / self.total_tasks as f64
        }
    }
}

/// Executes tasks in priority order on a simulated clock
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Run every task to completion, highest priority first
    ///
    /// Returns one result per task in execution order. The clock starts at
    /// the configured start time on every call.
    pub fn run(&self, tasks: impl IntoIterator<Item = Task>) -> Vec<ScheduleResult> {
        let verbosity = self.config.verbosity;

        let mut queue: PriorityQueue<Task> = PriorityQueue::max();
        queue.extend(tasks);
        log_debug!(verbosity, "Scheduling {} tasks", queue.len());

        let mut clock = self.config.start_time;
        let mut results = Vec::with_capacity(queue.len());

        while let Ok(task) = queue.extract_root() {
            let start_time = clock.max(task.arrival_time());
            let completion_time = start_time + task.execution_time();
            let wait_time = start_time - task.arrival_time();
            let deadline_met = task
                .deadline()
                .map_or(true, |deadline| completion_time <= deadline);

            log_changes!(
                verbosity,
                "Time {}: run {} until {}",
                start_time,
                task,
                completion_time
            );
            if !deadline_met {
                log_checks!(
                    verbosity,
                    "  {} missed its deadline (completed at {})",
                    task.task_id(),
                    completion_time
                );
            }

            clock = completion_time;
            results.push(ScheduleResult {
                task,
                start_time,
                completion_time,
                wait_time,
                deadline_met,
            });
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::VERBOSITY_DEBUG;

    #[test]
    fn test_priority_order_and_clock() {
        let tasks = vec![
            Task::new("low", 1, 0.0).with_execution_time(2.0),
            Task::new("high", 9, 0.0).with_execution_time(3.0),
            Task::new("mid", 5, 0.0).with_execution_time(1.0),
        ];

        let results = Scheduler::default().run(tasks);
        let order: Vec<&str> = results.iter().map(|r| r.task().task_id()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);

        assert_eq!(results[0].start_time(), 0.0);
        assert_eq!(results[0].completion_time(), 3.0);
        assert_eq!(results[1].start_time(), 3.0);
        assert_eq!(results[2].start_time(), 4.0);
        assert_eq!(results[2].completion_time(), 6.0);
        assert_eq!(results[2].wait_time(), 4.0);
    }

    #[test]
    fn test_start_waits_for_arrival() {
        let tasks = vec![Task::new("late", 1, 10.0).with_execution_time(2.0)];
        let results = Scheduler::default().run(tasks);
        assert_eq!(results[0].start_time(), 10.0);
        assert_eq!(results[0].completion_time(), 12.0);
        assert_eq!(results[0].wait_time(), 0.0);
    }

    #[test]
    fn test_deadline_outcomes() {
        let tasks = vec![
            Task::new("first", 10, 0.0).with_execution_time(5.0),
            Task::new("tight", 1, 0.0)
                .with_execution_time(1.0)
                .with_deadline(3.0),
            Task::new("exact", 5, 0.0)
                .with_execution_time(1.0)
                .with_deadline(6.0),
        ];

        let results = Scheduler::default().run(tasks);
        let met: Vec<(&str, bool)> = results
            .iter()
            .map(|r| (r.task().task_id(), r.deadline_met()))
            .collect();
        assert_eq!(met, vec![("first", true), ("exact", true), ("tight", false)]);
    }

    #[test]
    fn test_configured_start_time_resets_each_run() {
        let scheduler = Scheduler::new(SchedulerConfig::new(Some(100.0), Some(VERBOSITY_DEBUG)));
        for _ in 0..2 {
            let results = scheduler.run(vec![Task::new("T1", 1, 0.0)]);
            assert_eq!(results[0].start_time(), 100.0);
            assert_eq!(results[0].wait_time(), 100.0);
        }
        assert_eq!(scheduler.config().start_time, 100.0);
    }

    #[test]
    fn test_empty_run() {
        let results = Scheduler::default().run(Vec::new());
        assert!(results.is_empty());
        assert_eq!(
            ScheduleStatistics::from_results(&results),
            ScheduleStatistics::default()
        );
    }

    #[test]
    fn test_statistics() {
        let tasks = vec![
            Task::new("a", 3, 0.0).with_execution_time(2.0),
            Task::new("b", 2, 0.0).with_execution_time(2.0).with_deadline(1.0),
            Task::new("c", 1, 0.0).with_execution_time(4.0),
        ];
        let results = Scheduler::default().run(tasks);
        let stats = ScheduleStatistics::from_results(&results);

        assert_eq!(stats.total_tasks, 3);
        assert_eq!(stats.completed_tasks, 3);
        assert_eq!(stats.deadline_met, 2);
        assert_eq!(stats.deadline_missed, 1);
        assert_eq!(stats.total_execution_time, 8.0);
        // waits: 0, 2, 4
        assert_eq!(stats.average_wait_time, 2.0);
        assert_eq!(stats.throughput, 3.0 / 8.0);
        assert!((stats.deadline_compliance() - 2.0 / 3.0).abs() < 1e-12);
    }
}
