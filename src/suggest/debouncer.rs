//! Trailing-edge debouncer for suggestion lookups
//!
//! Holds at most one scheduled lookup. Scheduling again replaces the pending
//! query and restarts the quiet period; nothing fires on the leading edge.
//! Time is passed in by the caller so the event loop and tests share one
//! clock.

use std::time::{Duration, Instant};

use super::DEBOUNCE_MS;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    pending_query: Option<String>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending_query: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a lookup for `query`, replacing any pending one
    pub fn schedule(&mut self, query: String, now: Instant) {
        self.deadline = Some(now + self.delay);
        self.pending_query = Some(query);
    }

    /// Drop the pending lookup, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.pending_query = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending_query.is_some()
    }

    /// Take the pending query once its quiet period has elapsed
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending_query.take()
            }
            _ => None,
        }
    }

    /// Time left before the pending lookup is due
    ///
    /// `None` when nothing is scheduled; zero when already due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
