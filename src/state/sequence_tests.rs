//! Choreography table unit tests.

use super::{open_sequence, reset_sequence, StepAction};
use crate::model::Timings;
use std::time::Duration;

#[test]
fn open_sequence_offsets_match_default_timeline() {
    let steps = open_sequence(&Timings::default());
    let offsets: Vec<u64> = steps.iter().map(|s| s.delay.as_millis() as u64).collect();
    assert_eq!(offsets, vec![0, 1300, 2180, 2500]);
}

#[test]
fn open_sequence_actions_in_order() {
    let steps = open_sequence(&Timings::default());
    let actions: Vec<StepAction> = steps.iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec![
            StepAction::BeginOpening,
            StepAction::SlideLetterOut,
            StepAction::FallbackPullDown,
            StepAction::PromoteLetter,
        ]
    );
}

#[test]
fn reset_sequence_offsets_match_default_timeline() {
    let steps = reset_sequence(&Timings::default());
    let offsets: Vec<u64> = steps.iter().map(|s| s.delay.as_millis() as u64).collect();
    assert_eq!(offsets, vec![0, 300, 800, 2000]);
}

#[test]
fn reset_sequence_actions_mirror_forward_order() {
    let steps = reset_sequence(&Timings::default());
    let actions: Vec<StepAction> = steps.iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec![
            StepAction::ZoomOut,
            StepAction::RecenterEnvelope,
            StepAction::SlideLetterBack,
            StepAction::CloseFlap,
        ]
    );
}

#[test]
fn offsets_are_strictly_increasing_within_each_sequence() {
    // Firing order must match the intended visual choreography for any
    // timings, not just the defaults.
    let custom = Timings {
        flap_open: Duration::from_millis(400),
        letter_slide: Duration::from_millis(250),
        zoom: Duration::from_millis(50),
        envelope_move: Duration::from_millis(80),
    };
    for timings in [Timings::default(), custom] {
        for steps in [open_sequence(&timings), reset_sequence(&timings)] {
            for pair in steps.windows(2) {
                assert!(
                    pair[0].delay < pair[1].delay,
                    "offsets not strictly increasing: {:?}",
                    steps
                );
            }
        }
    }
}

#[test]
fn fallback_pull_fires_before_promotion() {
    let timings = Timings::default();
    assert!(timings.fallback_pull_at() < timings.promote_at());
}
