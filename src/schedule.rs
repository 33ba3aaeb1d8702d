//! Repeating task scheduling for the fetch cycle.
//!
//! The scheduler holds no timers of its own; the event loop asks it whether
//! the task is due at a given instant. This keeps cycles testable with
//! synthetic instants instead of real waiting.

use std::time::{Duration, Instant};

/// Default interval between fetch cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(120);

/// A cancellable task that repeats at a fixed interval.
#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RepeatingTask {
    /// Create a task that is not yet started.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Start the task so that it is due immediately.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Returns true if the task should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.next_due, Some(due) if now >= due)
    }

    /// Schedule the next run one interval after `now`.
    ///
    /// Has no effect on a cancelled task.
    pub fn reschedule(&mut self, now: Instant) {
        if self.next_due.is_some() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Stop the task; it will never be due again until restarted.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time remaining until the next run, zero if already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for RepeatingTask {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
