//! Cancellable deferred task.
//!
//! A [`Deferred`] holds at most one pending deadline. It never fires on its
//! own: the owner polls it with the current time from its event loop, which
//! keeps everything on one thread and makes cancellation a plain state change.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Deferred {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Deferred {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the task `delay` after `now`, superseding any pending run.
    pub fn schedule(&mut self, now: Instant) {
        self.cancel();
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending run. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the pending run if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending run is due (zero if overdue).
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}
