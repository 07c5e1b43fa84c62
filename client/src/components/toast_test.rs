use super::*;

#[test]
fn first_paint_uses_entering_styles() {
    let timeline = ToastTimeline::new(3000);
    assert_eq!(phase_class(timeline.phase()), "toast--entering");
    assert_eq!(timeline.next_deadline(), None);
}

#[test]
fn frame_mount_starts_the_visible_phase() {
    let mut timeline = ToastTimeline::new(3000);
    let guard = TimerGuard::new();
    assert!(mount_on_frame(&mut timeline, &guard, 500.0));
    assert_eq!(phase_class(timeline.phase()), "toast--visible");
    assert_eq!(timeline.next_deadline(), Some(3500.0));
}

#[test]
fn frame_after_unmount_leaves_timeline_alone() {
    let mut timeline = ToastTimeline::new(3000);
    let guard = TimerGuard::new();
    guard.cancel();
    assert!(!mount_on_frame(&mut timeline, &guard, 500.0));
    assert_eq!(timeline.phase(), ToastPhase::Entering);
    assert_eq!(timeline.next_deadline(), None);
}
