//! Durations that shape the choreography.
//!
//! The animation core never reads the wall clock or hardcodes an offset;
//! every deadline in a sequence is derived from this one record, so a
//! config override of a single duration shifts the rest of the timeline
//! consistently.

use std::time::Duration;

/// Gap between the flap visually finishing its swing and the letter
/// starting to slide.
pub const REVEAL_GAP: Duration = Duration::from_millis(100);

/// Settling pause after a slide completes before the next layer change
/// (promotion on the way out, flap close on the way back).
pub const SETTLE: Duration = Duration::from_millis(100);

/// Fraction of the letter slide at which the fallback pull-down step is
/// scheduled. Deliberately later than the progress-driven trigger
/// ([`PROGRESS_PULL_THRESHOLD`]); whichever fires first wins.
pub const FALLBACK_PULL_FRACTION: f64 = 0.8;

/// Eased slide fraction at which the renderer-reported progress triggers
/// the pull-down effect.
pub const PROGRESS_PULL_THRESHOLD: f64 = 0.6;

/// Durations of the individual animated movements.
///
/// All sequence offsets are derived from these values; see
/// [`crate::state::sequence`] for the derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Flap swing, closed to fully open (and the reverse).
    pub flap_open: Duration,
    /// Letter travel, fully inside to fully out (and the reverse).
    pub letter_slide: Duration,
    /// Zoom in/out of the revealed letter.
    pub zoom: Duration,
    /// Envelope translation when pulled toward the viewport centre, and
    /// when released back during reset.
    pub envelope_move: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            flap_open: Duration::from_millis(1200),
            letter_slide: Duration::from_millis(1100),
            zoom: Duration::from_millis(300),
            envelope_move: Duration::from_millis(500),
        }
    }
}

impl Timings {
    /// Offset from `open()` at which the letter starts sliding out.
    ///
    /// Default timings: 1200ms + 100ms = 1300ms.
    pub fn letter_out_at(&self) -> Duration {
        self.flap_open + REVEAL_GAP
    }

    /// Offset from `open()` at which the fallback pull-down step runs if
    /// the progress-driven trigger has not fired yet.
    ///
    /// Default timings: 1300ms + 0.8 × 1100ms = 2180ms.
    pub fn fallback_pull_at(&self) -> Duration {
        self.letter_out_at() + self.letter_slide.mul_f64(FALLBACK_PULL_FRACTION)
    }

    /// Offset from `open()` at which the letter is promoted above every
    /// other layer, completing the forward sequence.
    ///
    /// Default timings: 1300ms + 1100ms + 100ms = 2500ms.
    pub fn promote_at(&self) -> Duration {
        self.letter_out_at() + self.letter_slide + SETTLE
    }

    /// Offset from `reset()` at which the envelope is released back to its
    /// resting position (zoom-out has finished).
    pub fn recenter_at(&self) -> Duration {
        self.zoom
    }

    /// Offset from `reset()` at which the letter starts sliding back in.
    pub fn slide_back_at(&self) -> Duration {
        self.zoom + self.envelope_move
    }

    /// Offset from `reset()` at which the flap closes and all transient
    /// flags clear, completing the reverse sequence.
    pub fn close_at(&self) -> Duration {
        self.slide_back_at() + self.letter_slide + SETTLE
    }
}
