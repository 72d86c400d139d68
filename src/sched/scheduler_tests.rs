//! Scheduler unit tests driven by a manual clock.

use super::Scheduler;
use crate::sched::{Clock, ManualClock};
use std::time::Duration;

#[test]
fn nothing_fires_before_its_deadline() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.schedule_after(clock.now(), Duration::from_millis(100), "late");

    clock.advance_ms(99);
    assert!(sched.fire_due(clock.now()).is_empty());
    assert_eq!(sched.pending_len(), 1);
}

#[test]
fn actions_fire_in_deadline_order() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    // Scheduled out of order on purpose.
    sched.schedule_after(clock.now(), Duration::from_millis(300), "third");
    sched.schedule_after(clock.now(), Duration::from_millis(100), "first");
    sched.schedule_after(clock.now(), Duration::from_millis(200), "second");

    clock.advance_ms(300);
    assert_eq!(sched.fire_due(clock.now()), vec!["first", "second", "third"]);
    assert!(sched.is_idle());
}

#[test]
fn deadline_ties_break_by_insertion_order() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<u32> = Scheduler::new();
    for n in 0..5 {
        sched.schedule_after(clock.now(), Duration::from_millis(50), n);
    }
    clock.advance_ms(50);
    assert_eq!(sched.fire_due(clock.now()), vec![0, 1, 2, 3, 4]);
}

#[test]
fn zero_delay_action_is_due_immediately() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.schedule_after(clock.now(), Duration::ZERO, "now");
    assert_eq!(sched.fire_due(clock.now()), vec!["now"]);
}

#[test]
fn fire_due_only_takes_what_is_due() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.schedule_after(clock.now(), Duration::from_millis(100), "soon");
    sched.schedule_after(clock.now(), Duration::from_millis(500), "later");

    clock.advance_ms(100);
    assert_eq!(sched.fire_due(clock.now()), vec!["soon"]);
    assert_eq!(sched.pending_len(), 1);

    clock.advance_ms(400);
    assert_eq!(sched.fire_due(clock.now()), vec!["later"]);
}

#[test]
fn cancel_all_drops_every_pending_action() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.schedule_after(clock.now(), Duration::from_millis(10), "a");
    sched.schedule_after(clock.now(), Duration::from_millis(20), "b");

    sched.cancel_all();
    assert!(sched.is_idle());

    clock.advance_ms(1000);
    assert!(sched.fire_due(clock.now()).is_empty());
}

#[test]
fn cancel_all_is_idempotent_on_empty_list() {
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.cancel_all();
    sched.cancel_all();
    assert!(sched.is_idle());
}

#[test]
fn next_deadline_reports_the_earliest() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    assert_eq!(sched.next_deadline(), None);

    sched.schedule_after(clock.now(), Duration::from_millis(200), "b");
    sched.schedule_after(clock.now(), Duration::from_millis(100), "a");
    assert_eq!(sched.next_deadline(), Some(clock.now() + Duration::from_millis(100)));
}

#[test]
fn scheduling_after_cancel_starts_clean() {
    let clock = ManualClock::new();
    let mut sched: Scheduler<&str> = Scheduler::new();
    sched.schedule_after(clock.now(), Duration::from_millis(10), "stale");
    sched.cancel_all();
    sched.schedule_after(clock.now(), Duration::from_millis(10), "fresh");

    clock.advance_ms(10);
    assert_eq!(sched.fire_due(clock.now()), vec!["fresh"]);
}
