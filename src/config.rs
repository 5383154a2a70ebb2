//! Configuration types for the task scheduler.

use crate::logging::VERBOSITY_SILENT;

/// Configuration for a [`Scheduler`](crate::scheduler::Scheduler) run.
#[derive(Clone, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Simulation clock value at the start of every run
    pub start_time: f64,
    /// Diagnostic verbosity (0-3), see [`crate::logging`]
    pub verbosity: u8,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            verbosity: VERBOSITY_SILENT,
        }
    }
}

impl SchedulerConfig {
    /// Builds a config, falling back to the defaults for anything left `None`.
    pub fn new(start_time: Option<f64>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            start_time: start_time.unwrap_or(defaults.start_time),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }
}
