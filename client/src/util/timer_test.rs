use super::*;

#[test]
fn fresh_guard_is_alive() {
    let guard = TimerGuard::new();
    assert!(guard.is_alive());
    let generation = guard.next_generation();
    assert!(guard.is_current(generation));
}

#[test]
fn newer_generation_supersedes_older() {
    let guard = TimerGuard::new();
    let first = guard.next_generation();
    let second = guard.next_generation();
    assert!(!guard.is_current(first));
    assert!(guard.is_current(second));
}

#[test]
fn cancel_stops_every_generation() {
    let guard = TimerGuard::new();
    let generation = guard.next_generation();
    guard.clone().cancel();
    assert!(!guard.is_alive());
    assert!(!guard.is_current(generation));
}
