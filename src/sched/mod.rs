//! Time source and delayed-action scheduling (pure).
//!
//! Nothing in here touches the wall clock directly; the event loop injects
//! a [`Clock`] and forwards its readings, so every sequence is replayable
//! under a manually advanced clock in tests.

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::Scheduler;
