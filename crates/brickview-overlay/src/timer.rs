//! Cancellable hide timer.
//!
//! The tracker owns exactly one [`HideTimer`], which holds at most one
//! pending [`TimerHandle`]. Scheduling replaces (and so cancels) whatever
//! was pending. The owner drives it by asking for the next deadline and
//! calling [`HideTimer::take_due`] once that deadline has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: u64,
    pub deadline: Instant,
}

#[derive(Debug, Default)]
pub struct HideTimer {
    pending: Option<TimerHandle>,
    next_id: u64,
}

impl HideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a fire at `now + delay`, releasing any pending handle.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle {
            id: self.next_id,
            deadline: now + delay,
        };
        self.pending = Some(handle);
        handle
    }

    /// Cancel the pending handle, if any.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|h| h.deadline)
    }

    /// Release and return the pending handle if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.pending {
            Some(handle) if handle.deadline <= now => self.pending.take(),
            _ => None,
        }
    }
}
