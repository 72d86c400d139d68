//! The envelope animator: entry points, scheduled steps, one-shot pull.
//!
//! `EnvelopeAnimator` owns the [`ViewState`], the scheduler holding every
//! pending step, and the one-shot gate guarding the pull-down effect. The
//! shell forwards clock readings into [`EnvelopeAnimator::tick`]; nothing
//! here reads the wall clock or performs I/O, so the whole choreography is
//! replayable under a manual clock.

use crate::model::timings::PROGRESS_PULL_THRESHOLD;
use crate::model::Timings;
use crate::sched::Scheduler;
use crate::state::sequence::{open_sequence, reset_sequence, StepAction};
use crate::state::view_state::ViewState;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::debug;

/// Rows of envelope travel substituted when the letter's on-screen rect
/// has never been observed. A visually imperfect pull beats no pull.
pub const FALLBACK_PULL_ROWS: i16 = 2;

/// Clamp on the computed pull-down travel, in rows either direction.
const MAX_PULL_ROWS: i16 = 8;

/// Owns all animation state for one envelope instance.
///
/// Entry points are re-entrant: `open()` and `reset()` cancel every
/// pending step of any in-flight sequence before scheduling their own, so
/// a stale step can never mutate state after a restart. [`detach`] plays
/// the role of unmount: it cancels everything and turns every later call
/// into a no-op.
///
/// [`detach`]: EnvelopeAnimator::detach
#[derive(Debug)]
pub struct EnvelopeAnimator {
    view: ViewState,
    scheduler: Scheduler<StepAction>,
    timings: Timings,
    /// One-shot gate for the pull-down effect. Two competing triggers
    /// exist (renderer progress at 0.6, fallback step at 0.8 of the
    /// slide); first wins, the loser is a no-op.
    pull_fired: bool,
    detached: bool,
    /// Offset the envelope is easing back from after a recenter; lets the
    /// renderer animate the release without re-reading history.
    released_from: i16,
    /// Letter rect from the most recent frame, for the pull geometry.
    letter_rect: Option<Rect>,
    /// Viewport from the most recent frame.
    viewport: Option<Rect>,
    // When each movement last changed direction; the renderer derives
    // continuous motion from these.
    flap_at: Option<Instant>,
    slide_at: Option<Instant>,
    zoom_at: Option<Instant>,
    pull_at: Option<Instant>,
}

impl EnvelopeAnimator {
    /// Create a closed, idle envelope.
    pub fn new(timings: Timings) -> Self {
        Self {
            view: ViewState::default(),
            scheduler: Scheduler::new(),
            timings,
            pull_fired: false,
            detached: false,
            released_from: 0,
            letter_rect: None,
            viewport: None,
            flap_at: None,
            slide_at: None,
            zoom_at: None,
            pull_at: None,
        }
    }

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Durations driving this instance.
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Begin the reveal sequence.
    ///
    /// Cancels anything a previous `open()` or `reset()` left pending,
    /// re-arms the pull gate, schedules the forward table, and applies its
    /// zero-delay step immediately.
    pub fn open(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        debug!("open: starting reveal sequence");
        self.scheduler.cancel_all();
        self.pull_fired = false;
        for step in open_sequence(&self.timings) {
            self.scheduler.schedule_after(now, step.delay, step.action);
        }
        self.tick(now);
    }

    /// Reverse the sequence back toward the closed state.
    ///
    /// Same cancellation discipline as [`open`](Self::open), with the
    /// reverse table.
    pub fn reset(&mut self, now: Instant) {
        if self.detached {
            return;
        }
        debug!("reset: starting reverse sequence");
        self.scheduler.cancel_all();
        for step in reset_sequence(&self.timings) {
            self.scheduler.schedule_after(now, step.delay, step.action);
        }
        self.tick(now);
    }

    /// Toggle the letter zoom. Only honoured while the letter is promoted
    /// (out or already zoomed); clicks on a letter still inside the
    /// envelope fall through to `open()` in the shell.
    pub fn toggle_zoom(&mut self, now: Instant) {
        if self.detached || !self.view.letter_above {
            return;
        }
        self.view.zoomed = !self.view.zoomed;
        self.zoom_at = Some(now);
        debug!(zoomed = self.view.zoomed, "zoom toggled");
    }

    /// Apply every step whose deadline has passed. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        if self.detached {
            return 0;
        }
        let due = self.scheduler.fire_due(now);
        let count = due.len();
        for action in due {
            self.apply_step(action, now);
        }
        count
    }

    /// Record what the renderer drew this frame.
    ///
    /// The letter rect feeds the pull-down geometry and mouse hit-testing;
    /// `slide_fraction` (the eased fraction of the letter's outward
    /// travel, when it is sliding out) is the progress-driven pull
    /// trigger.
    pub fn observe_frame(
        &mut self,
        letter_rect: Option<Rect>,
        viewport: Rect,
        slide_fraction: Option<f64>,
        now: Instant,
    ) {
        if self.detached {
            return;
        }
        self.letter_rect = letter_rect;
        self.viewport = Some(viewport);
        if let Some(fraction) = slide_fraction {
            if self.view.letter_out && !self.view.returning && fraction >= PROGRESS_PULL_THRESHOLD {
                self.trigger_pull_down(now);
            }
        }
    }

    /// Letter rect from the most recent frame, if one was drawn.
    pub fn letter_rect(&self) -> Option<Rect> {
        self.letter_rect
    }

    /// Offset the envelope was released from by the last recenter step;
    /// the renderer eases the travel back to zero from here.
    pub fn released_offset(&self) -> i16 {
        self.released_from
    }

    /// Cancel everything and refuse all further mutation. Terminal
    /// teardown calls this so no step fires into a destroyed renderer.
    pub fn detach(&mut self) {
        self.scheduler.cancel_all();
        self.detached = true;
    }

    /// True while a sequence has pending steps or any movement is still
    /// inside its duration. The event loop keeps redrawing on ticks while
    /// this holds and goes idle otherwise.
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.detached {
            return false;
        }
        !self.scheduler.is_idle()
            || in_motion(self.flap_at, self.timings.flap_open, now)
            || in_motion(self.slide_at, self.timings.letter_slide, now)
            || in_motion(self.zoom_at, self.timings.zoom, now)
            || in_motion(self.pull_at, self.timings.envelope_move, now)
    }

    /// Fraction of the flap's current swing completed, 0..=1.
    pub fn flap_progress(&self, now: Instant) -> f64 {
        transition_progress(self.flap_at, self.timings.flap_open, now)
    }

    /// Fraction of the letter's current slide completed, 0..=1.
    pub fn slide_progress(&self, now: Instant) -> f64 {
        transition_progress(self.slide_at, self.timings.letter_slide, now)
    }

    /// Fraction of the current zoom transition completed, 0..=1.
    pub fn zoom_progress(&self, now: Instant) -> f64 {
        transition_progress(self.zoom_at, self.timings.zoom, now)
    }

    /// Fraction of the envelope's current translation completed, 0..=1.
    pub fn pull_progress(&self, now: Instant) -> f64 {
        transition_progress(self.pull_at, self.timings.envelope_move, now)
    }

    fn apply_step(&mut self, action: StepAction, now: Instant) {
        debug!(?action, "applying step");
        match action {
            StepAction::BeginOpening => {
                self.view = ViewState {
                    opening: true,
                    ..ViewState::default()
                };
                self.released_from = 0;
                self.flap_at = Some(now);
            }
            StepAction::SlideLetterOut => {
                self.view.letter_out = true;
                self.slide_at = Some(now);
            }
            StepAction::FallbackPullDown => {
                self.trigger_pull_down(now);
            }
            StepAction::PromoteLetter => {
                self.view.letter_above = true;
            }
            StepAction::ZoomOut => {
                if self.view.zoomed {
                    self.view.zoomed = false;
                    self.zoom_at = Some(now);
                }
            }
            StepAction::RecenterEnvelope => {
                if self.view.envelope_offset != 0 {
                    self.pull_at = Some(now);
                    self.released_from = self.view.envelope_offset;
                }
                self.view.envelope_offset = 0;
                self.view.pulled_down = false;
            }
            StepAction::SlideLetterBack => {
                self.view.letter_above = false;
                // Nothing to slide back when reset() caught the envelope
                // before the letter ever left.
                if self.view.letter_out {
                    self.view.returning = true;
                    self.slide_at = Some(now);
                }
                self.view.letter_out = false;
            }
            StepAction::CloseFlap => {
                self.view.opening = false;
                self.view.returning = false;
                self.pull_fired = false;
                self.flap_at = Some(now);
            }
        }
        debug_assert!(self.view.invariant_holds(), "broken by {action:?}");
    }

    /// The pull-down side effect, guarded by the one-shot gate.
    ///
    /// Computes the envelope translation that recentres the composition on
    /// the letter from the letter's last drawn rect; with no rect on
    /// record a fixed offset is substituted rather than propagating a
    /// failure.
    fn trigger_pull_down(&mut self, now: Instant) {
        if self.pull_fired {
            return;
        }
        self.pull_fired = true;
        let offset = match (self.letter_rect, self.viewport) {
            (Some(letter), Some(viewport)) => pull_offset(letter, viewport),
            _ => FALLBACK_PULL_ROWS,
        };
        self.view.envelope_offset = offset;
        self.view.pulled_down = true;
        self.pull_at = Some(now);
        debug!(offset, "pull-down engaged");
    }
}

/// Rows the envelope must travel so the letter sits at the viewport's
/// vertical centre, clamped to a sane range.
fn pull_offset(letter: Rect, viewport: Rect) -> i16 {
    let viewport_centre = i32::from(viewport.y) + i32::from(viewport.height) / 2;
    let letter_centre = i32::from(letter.y) + i32::from(letter.height) / 2;
    let offset = viewport_centre - letter_centre;
    offset.clamp(i32::from(-MAX_PULL_ROWS), i32::from(MAX_PULL_ROWS)) as i16
}

fn transition_progress(stamp: Option<Instant>, duration: Duration, now: Instant) -> f64 {
    match stamp {
        // Never moved: treat as settled.
        None => 1.0,
        Some(start) => {
            if duration.is_zero() {
                return 1.0;
            }
            let elapsed = now.saturating_duration_since(start);
            (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
        }
    }
}

fn in_motion(stamp: Option<Instant>, duration: Duration, now: Instant) -> bool {
    match stamp {
        None => false,
        Some(start) => now.saturating_duration_since(start) < duration,
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "animator_tests.rs"]
mod tests;
