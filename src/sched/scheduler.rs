//! Deadline scheduler for delayed state transitions.
//!
//! Owns the full set of pending actions for the component instance.
//! Starting a new sequence cancels everything left over from the previous
//! one, and teardown cancels everything outright, so a stale action can
//! never fire into a restarted or destroyed component.
//!
//! This is deliberately not a general-purpose scheduler: no retries, no
//! priorities, no recurring timers. All actions fire on the caller's own
//! single-threaded loop when it polls [`Scheduler::fire_due`].

use std::time::{Duration, Instant};

/// A pending action with its absolute deadline.
///
/// Handles are owned exclusively by the scheduler; cancelling means
/// dropping them from the pending list.
#[derive(Debug, Clone, Copy)]
struct Pending<A> {
    /// Insertion order, used to break deadline ties deterministically.
    seq: u64,
    deadline: Instant,
    action: A,
}

/// An owned collection of delayed actions keyed by absolute deadline.
///
/// Generic over the action payload so tests and benches can drive it with
/// plain markers; the animator instantiates it with
/// [`crate::state::StepAction`].
#[derive(Debug, Default)]
pub struct Scheduler<A> {
    pending: Vec<Pending<A>>,
    next_seq: u64,
}

impl<A> Scheduler<A> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Register `action` to fire once `delay` has elapsed past `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            seq,
            deadline: now + delay,
            action,
        });
    }

    /// Remove and return every action whose deadline has passed, ordered
    /// by deadline (insertion order on ties).
    ///
    /// A zero-delay action is due immediately: `fire_due` called with the
    /// same `now` it was scheduled at returns it.
    pub fn fire_due(&mut self, now: Instant) -> Vec<A> {
        let mut due: Vec<Pending<A>> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                due.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.deadline, p.seq));
        due.into_iter().map(|p| p.action).collect()
    }

    /// Drop every pending action. Idempotent; a second call on an empty
    /// list is a no-op.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// True when nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending actions.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest pending deadline, if any. The event loop uses this to keep
    /// ticking while a sequence is in flight.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
