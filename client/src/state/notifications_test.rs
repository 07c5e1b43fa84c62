use super::*;

const MOUNT: f64 = 10_000.0;

fn mounted(duration_ms: u32) -> ToastTimeline {
    let mut timeline = ToastTimeline::new(duration_ms);
    timeline.mount(MOUNT);
    timeline
}

// =============================================================
// ToastTimeline
// =============================================================

#[test]
fn new_timeline_is_entering_without_deadline() {
    let timeline = ToastTimeline::new(3000);
    assert_eq!(timeline.phase(), ToastPhase::Entering);
    assert_eq!(timeline.next_deadline(), None);
}

#[test]
fn mount_makes_visible_immediately() {
    let timeline = mounted(3000);
    assert_eq!(timeline.phase(), ToastPhase::Visible);
    assert_eq!(timeline.next_deadline(), Some(MOUNT + 3000.0));
}

#[test]
fn does_not_leave_before_duration() {
    let mut timeline = mounted(3000);
    assert_eq!(timeline.advance(MOUNT + 2999.0), None);
    assert_eq!(timeline.phase(), ToastPhase::Visible);
    assert_eq!(timeline.advance(MOUNT + 3000.0), Some(ToastPhase::Leaving));
}

#[test]
fn closes_no_earlier_than_duration_plus_exit() {
    let mut timeline = mounted(3000);
    timeline.advance(MOUNT + 3000.0);
    assert_eq!(timeline.advance(MOUNT + 3299.0), None);
    assert_eq!(timeline.phase(), ToastPhase::Leaving);
    assert_eq!(timeline.advance(MOUNT + 3300.0), Some(ToastPhase::Closed));
    assert_eq!(timeline.next_deadline(), None);
}

#[test]
fn late_timer_measures_exit_from_actual_leave() {
    let mut timeline = mounted(3000);
    timeline.advance(MOUNT + 3050.0);
    assert_eq!(timeline.next_deadline(), Some(MOUNT + 3350.0));
}

#[test]
fn dismiss_shortens_visible_phase_only() {
    let mut timeline = mounted(3000);
    assert!(timeline.dismiss(MOUNT + 1000.0));
    assert_eq!(timeline.phase(), ToastPhase::Leaving);
    assert_eq!(timeline.advance(MOUNT + 1299.0), None);
    assert_eq!(timeline.advance(MOUNT + 1300.0), Some(ToastPhase::Closed));
}

#[test]
fn dismiss_is_ignored_outside_visible() {
    let mut timeline = ToastTimeline::new(3000);
    assert!(!timeline.dismiss(MOUNT));
    timeline.mount(MOUNT);
    timeline.dismiss(MOUNT + 10.0);
    assert!(!timeline.dismiss(MOUNT + 20.0));
    assert_eq!(timeline.next_deadline(), Some(MOUNT + 310.0));
}

#[test]
fn closed_is_terminal() {
    let mut timeline = mounted(100);
    timeline.advance(MOUNT + 100.0);
    timeline.advance(MOUNT + 400.0);
    assert_eq!(timeline.phase(), ToastPhase::Closed);
    assert_eq!(timeline.advance(MOUNT + 10_000.0), None);
    timeline.mount(MOUNT + 20_000.0);
    assert_eq!(timeline.phase(), ToastPhase::Closed);
}

// =============================================================
// NotificationRequest
// =============================================================

#[test]
fn requests_default_to_three_seconds() {
    assert_eq!(NotificationRequest::success("ok").duration_ms, 3000);
    assert_eq!(NotificationRequest::error("nope").kind, NotificationKind::Error);
}

// =============================================================
// NotificationsState
// =============================================================

#[test]
fn kinds_have_independent_slots() {
    let mut state = NotificationsState::default();
    let ok = state.show(NotificationRequest::success("Published"));
    let err = state.show(NotificationRequest::error("Failed"));
    assert_ne!(ok, err);
    assert_eq!(state.active(NotificationKind::Success).map(|n| n.id), Some(ok));
    assert_eq!(state.active(NotificationKind::Error).map(|n| n.id), Some(err));
}

#[test]
fn repeated_show_creates_new_instance() {
    let mut state = NotificationsState::default();
    let first = state.show(NotificationRequest::error("Failed"));
    let second = state.show(NotificationRequest::error("Failed"));
    assert_ne!(first, second);
    assert_eq!(state.active(NotificationKind::Error).map(|n| n.id), Some(second));
}

#[test]
fn stale_close_is_ignored() {
    let mut state = NotificationsState::default();
    let first = state.show(NotificationRequest::error("Failed"));
    let second = state.show(NotificationRequest::error("Failed again"));
    assert!(!state.close(NotificationKind::Error, first));
    assert!(state.active(NotificationKind::Error).is_some());
    assert!(state.close(NotificationKind::Error, second));
    assert!(state.active(NotificationKind::Error).is_none());
}

#[test]
fn closing_one_kind_keeps_the_other() {
    let mut state = NotificationsState::default();
    let ok = state.show(NotificationRequest::success("Published"));
    state.show(NotificationRequest::error("Failed"));
    state.close(NotificationKind::Success, ok);
    assert!(state.active(NotificationKind::Success).is_none());
    assert!(state.active(NotificationKind::Error).is_some());
}
