use super::*;

// =============================================================
// AutoClose
// =============================================================

#[test]
fn auto_close_default_is_off_with_3000ms() {
    let auto = AutoClose::default();
    assert!(!auto.enabled);
    assert_eq!(auto.delay_ms, DEFAULT_AUTO_CLOSE_DELAY_MS);
    assert_eq!(auto.delay(), None);
}

#[test]
fn auto_close_after_arms_given_delay() {
    assert_eq!(AutoClose::after(1000).delay(), Some(1000));
}

// =============================================================
// DialogLifecycle
// =============================================================

#[test]
fn lifecycle_starts_closed() {
    let lifecycle = DialogLifecycle::default();
    assert_eq!(lifecycle.phase(), DialogPhase::Closed);
    assert_eq!(lifecycle.generation(), 0);
}

#[test]
fn sync_open_starts_new_generation() {
    let mut lifecycle = DialogLifecycle::default();
    assert_eq!(lifecycle.sync(true), Some(1));
    assert!(lifecycle.is_open());
    // Staying open is not a new opening.
    assert_eq!(lifecycle.sync(true), None);
    assert_eq!(lifecycle.sync(false), None);
    assert!(!lifecycle.is_open());
    assert_eq!(lifecycle.sync(true), Some(2));
}

#[test]
fn timer_fires_close_exactly_once() {
    let mut lifecycle = DialogLifecycle::default();
    let generation = lifecycle.sync(true).unwrap();
    assert!(lifecycle.expire(generation));
    assert!(!lifecycle.expire(generation));
    assert!(!lifecycle.is_open());
}

#[test]
fn timer_after_manual_close_does_nothing() {
    let mut lifecycle = DialogLifecycle::default();
    let generation = lifecycle.sync(true).unwrap();
    assert!(lifecycle.close());
    assert!(!lifecycle.expire(generation));
}

#[test]
fn manual_close_after_timer_does_nothing() {
    let mut lifecycle = DialogLifecycle::default();
    let generation = lifecycle.sync(true).unwrap();
    assert!(lifecycle.expire(generation));
    assert!(!lifecycle.close());
}

#[test]
fn stale_timer_cannot_close_newer_opening() {
    let mut lifecycle = DialogLifecycle::default();
    let first = lifecycle.sync(true).unwrap();
    lifecycle.sync(false);
    let second = lifecycle.sync(true).unwrap();
    assert_ne!(first, second);
    assert!(!lifecycle.expire(first));
    assert!(lifecycle.is_open());
    assert!(lifecycle.expire(second));
}

// =============================================================
// plan_timer
// =============================================================

#[test]
fn plan_timer_arms_on_open_when_enabled() {
    let mut lifecycle = DialogLifecycle::default();
    assert_eq!(
        lifecycle.plan_timer(true, AutoClose::after(1000)),
        TimerCommand::Arm {
            generation: 1,
            delay_ms: 1000
        }
    );
    assert!(lifecycle.is_open());
}

#[test]
fn plan_timer_keeps_timer_while_still_open() {
    let mut lifecycle = DialogLifecycle::default();
    lifecycle.plan_timer(true, AutoClose::after(1000));
    assert_eq!(lifecycle.plan_timer(true, AutoClose::after(1000)), TimerCommand::Keep);
}

#[test]
fn plan_timer_cancels_on_close() {
    let mut lifecycle = DialogLifecycle::default();
    lifecycle.plan_timer(true, AutoClose::after(1000));
    assert_eq!(lifecycle.plan_timer(false, AutoClose::after(1000)), TimerCommand::Cancel);
    assert!(!lifecycle.is_open());
}

#[test]
fn plan_timer_never_arms_when_disabled() {
    let mut lifecycle = DialogLifecycle::default();
    assert_eq!(lifecycle.plan_timer(true, AutoClose::default()), TimerCommand::Cancel);
    assert_eq!(lifecycle.generation(), 1);
}

#[test]
fn plan_timer_reopen_arms_next_generation() {
    let mut lifecycle = DialogLifecycle::default();
    lifecycle.plan_timer(true, AutoClose::after(500));
    lifecycle.plan_timer(false, AutoClose::after(500));
    assert_eq!(
        lifecycle.plan_timer(true, AutoClose::after(500)),
        TimerCommand::Arm {
            generation: 2,
            delay_ms: 500
        }
    );
}
