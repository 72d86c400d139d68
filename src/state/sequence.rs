//! Choreography as data.
//!
//! Each sequence is a table of [`Step`]s — a delay from the triggering
//! call plus a closed set of transitions — instead of a chain of nested
//! callbacks. The animator schedules the whole table at once and applies
//! whatever the scheduler reports as due.

use crate::model::Timings;
use std::time::Duration;

/// One transition of the envelope state machine.
///
/// Variants are the complete vocabulary of scheduled mutations; what each
/// one does to [`crate::state::ViewState`] lives in the animator's
/// `apply_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Clear every flag, then raise `opening`. Forward t+0.
    BeginOpening,
    /// Raise `letter_out`: the letter starts sliding.
    SlideLetterOut,
    /// Redundancy guarantee for the pull-down effect: engages it if the
    /// progress-driven trigger has not already fired. No-op otherwise.
    FallbackPullDown,
    /// Raise `letter_above`: letter promoted over every layer, forward
    /// sequence complete.
    PromoteLetter,
    /// Drop `zoomed`. Reverse t+0.
    ZoomOut,
    /// Release the envelope back to its resting position: offset to zero,
    /// pull flag cleared.
    RecenterEnvelope,
    /// Start the letter sliding back in: drop `letter_above` and
    /// `letter_out`, raise `returning`.
    SlideLetterBack,
    /// Close the flap and clear all transient flags, re-arming the
    /// one-shot pull gate. Reverse sequence complete.
    CloseFlap,
}

/// A transition and the delay at which it fires, relative to the call
/// that started the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Offset from the triggering `open()`/`reset()`.
    pub delay: Duration,
    /// Transition to apply when the delay elapses.
    pub action: StepAction,
}

impl Step {
    fn new(delay: Duration, action: StepAction) -> Self {
        Self { delay, action }
    }
}

/// The forward choreography: flap, letter out, pull-down fallback,
/// promotion.
///
/// Offsets are strictly increasing, so firing order matches table order.
pub fn open_sequence(timings: &Timings) -> Vec<Step> {
    vec![
        Step::new(Duration::ZERO, StepAction::BeginOpening),
        Step::new(timings.letter_out_at(), StepAction::SlideLetterOut),
        Step::new(timings.fallback_pull_at(), StepAction::FallbackPullDown),
        Step::new(timings.promote_at(), StepAction::PromoteLetter),
    ]
}

/// The reverse choreography: zoom out, release the envelope, slide the
/// letter back in, close the flap.
///
/// Exactly mirrors the forward order with the reverse movements' own
/// durations.
pub fn reset_sequence(timings: &Timings) -> Vec<Step> {
    vec![
        Step::new(Duration::ZERO, StepAction::ZoomOut),
        Step::new(timings.recenter_at(), StepAction::RecenterEnvelope),
        Step::new(timings.slide_back_at(), StepAction::SlideLetterBack),
        Step::new(timings.close_at(), StepAction::CloseFlap),
    ]
}

// ===== Tests =====

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
