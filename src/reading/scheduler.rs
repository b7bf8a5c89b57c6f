//! Single pending step timer
//!
//! The reader never has more than one delayed step outstanding. Scheduling
//! replaces whatever was pending, and cancelling drops it outright, so a
//! step can never fire twice or overlap another.

use log::trace;
use std::time::{Duration, Instant};

/// Identifies one scheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What to do when the pending step comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Show the first word of a freshly started session
    WarmUp,
    /// Move past the word currently on screen
    Advance,
}

#[derive(Debug, Clone, Copy)]
struct PendingStep {
    handle: TimerHandle,
    kind: StepKind,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct StepTimer {
    next_id: u64,
    pending: Option<PendingStep>,
}

impl StepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a step `delay` after `now`, cancelling any pending one.
    pub fn schedule(&mut self, kind: StepKind, now: Instant, delay: Duration) -> TimerHandle {
        self.cancel();
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending = Some(PendingStep {
            handle,
            kind,
            deadline: now + delay,
        });
        trace!("Scheduled {:?} {:?} in {:?}", kind, handle, delay);
        handle
    }

    /// Drops the pending step, returning its handle if there was one.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        let cancelled = self.pending.take().map(|step| step.handle);
        if let Some(handle) = cancelled {
            trace!("Cancelled {:?}", handle);
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.pending.map(|step| step.handle)
    }

    pub fn pending_kind(&self) -> Option<StepKind> {
        self.pending.map(|step| step.kind)
    }

    /// Time left before the pending step is due; zero once overdue.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|step| step.deadline.saturating_duration_since(now))
    }

    /// Takes the pending step if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<StepKind> {
        match self.pending {
            Some(step) if step.deadline <= now => {
                self.pending = None;
                Some(step.kind)
            }
            _ => None,
        }
    }
}
