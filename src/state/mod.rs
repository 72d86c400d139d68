//! Animation state machine (pure).
//!
//! All state transitions are plain data mutations testable without a
//! terminal: the choreography is a table of delayed steps, the animator
//! applies whichever steps the scheduler says are due.

pub mod animator;
pub mod sequence;
pub mod view_state;

pub use animator::EnvelopeAnimator;
pub use sequence::{open_sequence, reset_sequence, Step, StepAction};
pub use view_state::{Phase, ViewState};
