//! End-to-end choreography tests driven through the public animator API
//! with a manually advanced clock.

use letterbox::model::Timings;
use letterbox::sched::{Clock, ManualClock};
use letterbox::state::animator::FALLBACK_PULL_ROWS;
use letterbox::state::{EnvelopeAnimator, Phase, ViewState};
use ratatui::layout::Rect;

fn animator() -> (ManualClock, EnvelopeAnimator) {
    let clock = ManualClock::new();
    let mut anim = EnvelopeAnimator::new(Timings::default());
    anim.open(clock.now());
    (clock, anim)
}

/// Advance the clock and apply whatever came due.
fn step(clock: &ManualClock, anim: &mut EnvelopeAnimator, ms: u64) {
    clock.advance_ms(ms);
    anim.tick(clock.now());
}

#[test]
fn uninterrupted_open_walks_through_every_phase() {
    let (clock, mut anim) = animator();
    assert_eq!(anim.view().phase(), Phase::Opening);

    step(&clock, &mut anim, 1299);
    assert_eq!(anim.view().phase(), Phase::Opening, "slide not yet due");

    step(&clock, &mut anim, 1);
    assert_eq!(anim.view().phase(), Phase::Revealing);

    step(&clock, &mut anim, 1199);
    assert_eq!(anim.view().phase(), Phase::Revealing, "promotion not yet due");

    step(&clock, &mut anim, 1);
    assert_eq!(anim.view().phase(), Phase::Out);
    assert!(anim.view().is_fully_revealed());
}

#[test]
fn open_without_observed_frames_still_pulls_down() {
    // The fallback step engages the pull with a fixed travel when no
    // frame geometry was ever reported.
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 2500);
    assert!(anim.view().pulled_down);
    assert_eq!(anim.view().envelope_offset, FALLBACK_PULL_ROWS);
}

#[test]
fn reset_plays_the_choreography_backwards() {
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 2500);
    anim.toggle_zoom(clock.now());
    assert_eq!(anim.view().phase(), Phase::Zoomed);

    anim.reset(clock.now());
    // Zoom collapses immediately; the letter is still promoted.
    assert_eq!(anim.view().phase(), Phase::Out);

    step(&clock, &mut anim, 300);
    assert_eq!(anim.view().envelope_offset, 0, "envelope recentred");
    assert!(!anim.view().pulled_down);

    step(&clock, &mut anim, 500);
    assert_eq!(anim.view().phase(), Phase::Returning);

    step(&clock, &mut anim, 1200);
    assert_eq!(anim.view().phase(), Phase::Closed);
    assert_eq!(*anim.view(), ViewState::default());
}

#[test]
fn reset_before_the_letter_left_skips_the_return_slide() {
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 500);
    assert_eq!(anim.view().phase(), Phase::Opening);

    anim.reset(clock.now());
    step(&clock, &mut anim, 800);
    // Nothing slid out, so nothing slides back.
    assert_ne!(anim.view().phase(), Phase::Returning);

    step(&clock, &mut anim, 1200);
    assert_eq!(*anim.view(), ViewState::default());
}

#[test]
fn open_during_reset_restarts_cleanly() {
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 2500);
    anim.reset(clock.now());
    step(&clock, &mut anim, 400);

    anim.open(clock.now());
    assert_eq!(anim.view().phase(), Phase::Opening);

    // No stale reverse step may fire mid-reveal.
    step(&clock, &mut anim, 1500);
    assert_eq!(anim.view().phase(), Phase::Revealing);
    step(&clock, &mut anim, 1000);
    assert!(anim.view().is_fully_revealed());
}

#[test]
fn zoom_round_trips_without_disturbing_the_reveal() {
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 2500);

    anim.toggle_zoom(clock.now());
    assert_eq!(anim.view().phase(), Phase::Zoomed);
    anim.toggle_zoom(clock.now());
    assert_eq!(anim.view().phase(), Phase::Out);
    assert!(anim.view().is_fully_revealed());
}

#[test]
fn progress_trigger_beats_the_fallback_and_uses_frame_geometry() {
    let (clock, mut anim) = animator();
    step(&clock, &mut anim, 1300);
    assert_eq!(anim.view().phase(), Phase::Revealing);

    // Renderer reports the letter well into its outward travel.
    let letter = Rect::new(25, 2, 30, 6);
    let viewport = Rect::new(0, 0, 80, 24);
    anim.observe_frame(Some(letter), viewport, Some(0.7), clock.now());
    assert!(anim.view().pulled_down);
    // Viewport centre 12, letter centre 5: the envelope travels down 7.
    assert_eq!(anim.view().envelope_offset, 7);

    // The scheduled fallback is now a no-op.
    step(&clock, &mut anim, 880);
    assert_eq!(anim.view().envelope_offset, 7);
}

#[test]
fn detach_silences_everything() {
    let (clock, mut anim) = animator();
    anim.detach();
    step(&clock, &mut anim, 2500);
    assert_eq!(anim.view().phase(), Phase::Opening, "no step after detach");
    anim.open(clock.now());
    anim.reset(clock.now());
    assert!(!anim.is_animating(clock.now()));
}
