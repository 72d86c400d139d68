//! Clock abstraction: the single source of "now".
//!
//! The animator and scheduler take `Instant` readings as arguments rather
//! than calling `Instant::now()` themselves. The shell supplies
//! [`SystemClock`]; tests supply [`ManualClock`] and advance it
//! deterministically past each choreography deadline.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source.
pub trait Clock {
    /// Current reading of the clock.
    fn now(&self) -> Instant;
}

/// Wall-clock time via `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Used by tests to step through a sequence deadline by deadline without
/// sleeping. Clones share the same reading, so a test can hand one copy
/// to the app and keep another to advance time from outside.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Move the clock forward by `millis` milliseconds.
    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(a, b);
    }

    #[test]
    fn manual_clock_advances_by_exact_amounts() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.advance_ms(1300);
        assert_eq!(clock.now() - start, Duration::from_millis(1300));
        clock.advance(Duration::from_millis(1200));
        assert_eq!(clock.now() - start, Duration::from_millis(2500));
    }

    #[test]
    fn clones_share_the_same_reading() {
        let clock = ManualClock::new();
        let copy = clock.clone();
        clock.advance_ms(500);
        assert_eq!(clock.now(), copy.now());
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
