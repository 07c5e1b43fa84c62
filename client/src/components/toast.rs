//! Timed toast notifications.
//!
//! DESIGN
//! ======
//! Each [`Toast`] owns its timeline and one background sleep loop. The loop
//! only wakes at the timeline's next deadline and re-checks the generation
//! on every wake, so an early dismiss (which starts a new generation) or an
//! unmount (which cancels the guard) stops it without touching disposed
//! signals. `on_close` runs once the exit transition has finished; the
//! caller is expected to unmount the toast in response.
//!
//! The toast is first painted in `entering` and only mounted on a later
//! animation frame, otherwise the browser never sees the starting styles
//! and the fade-in is skipped.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationsState, ToastPhase, ToastTimeline};
use crate::util::timer::TimerGuard;

fn phase_class(phase: ToastPhase) -> &'static str {
    match phase {
        ToastPhase::Entering => "toast--entering",
        ToastPhase::Visible => "toast--visible",
        ToastPhase::Leaving => "toast--leaving",
        ToastPhase::Closed => "toast--closed",
    }
}

/// Frame callback body: mount the timeline unless the toast is gone.
#[cfg(any(test, feature = "hydrate"))]
fn mount_on_frame(timeline: &mut ToastTimeline, guard: &TimerGuard, now: f64) -> bool {
    if !guard.is_alive() {
        return false;
    }
    timeline.mount(now);
    true
}

/// Wait for the entering styles to be painted, then start the timeline.
#[cfg(feature = "hydrate")]
fn mount_after_paint(timeline: RwSignal<ToastTimeline>, guard: TimerGuard, on_close: Callback<()>) {
    request_animation_frame(move || {
        request_animation_frame(move || {
            let mounted = timeline.try_update(|t| mount_on_frame(t, &guard, js_sys::Date::now())).unwrap_or(false);
            if mounted {
                schedule(timeline, guard, on_close);
            }
        });
    });
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn schedule(timeline: RwSignal<ToastTimeline>, guard: TimerGuard, on_close: Callback<()>) {
    let generation = guard.next_generation();
    leptos::task::spawn_local(async move {
        loop {
            let Some(deadline) = timeline.try_with_untracked(ToastTimeline::next_deadline).flatten() else {
                break;
            };
            let wait_ms = (deadline - js_sys::Date::now()).max(0.0).ceil() as u64;
            gloo_timers::future::sleep(std::time::Duration::from_millis(wait_ms)).await;
            if !guard.is_current(generation) {
                break;
            }
            match timeline.try_update(|t| t.advance(js_sys::Date::now())) {
                Some(Some(ToastPhase::Closed)) => {
                    on_close.run(());
                    break;
                }
                Some(_) => {}
                None => break,
            }
        }
    });
}

/// A single toast. Fades in right after its first paint; success and error
/// share the lifecycle, only errors offer a manual dismiss.
#[component]
pub fn Toast(kind: NotificationKind, message: String, duration_ms: u32, on_close: Callback<()>) -> impl IntoView {
    let timeline = RwSignal::new(ToastTimeline::new(duration_ms));
    let guard = TimerGuard::new();

    #[cfg(feature = "hydrate")]
    mount_after_paint(timeline, guard.clone(), on_close);
    #[cfg(not(feature = "hydrate"))]
    let _ = on_close;

    on_cleanup({
        let guard = guard.clone();
        move || guard.cancel()
    });

    let dismiss_button = (kind == NotificationKind::Error).then(|| {
        view! {
            <button
                class="toast__dismiss"
                type="button"
                aria-label="Dismiss"
                on:click=move |_| {
                    #[cfg(feature = "hydrate")]
                    {
                        let dismissed = timeline.try_update(|t| t.dismiss(js_sys::Date::now())).unwrap_or(false);
                        if dismissed {
                            schedule(timeline, guard.clone(), on_close);
                        }
                    }
                    #[cfg(not(feature = "hydrate"))]
                    let _ = &guard;
                }
            >
                "✕"
            </button>
        }
    });

    let (kind_class, role) = match kind {
        NotificationKind::Success => ("toast toast--success", "status"),
        NotificationKind::Error => ("toast toast--error", "alert"),
    };
    let bar_style = format!("animation-duration: {duration_ms}ms");

    view! {
        <div class=move || format!("{kind_class} {}", phase_class(timeline.get().phase())) role=role>
            <p class="toast__message">{message}</p>
            {dismiss_button}
            <div class="toast__bar" style=bar_style></div>
        </div>
    }
}

fn toast_slot(notifications: RwSignal<NotificationsState>, kind: NotificationKind) -> impl IntoView {
    let active = Memo::new(move |_| notifications.with(|n| n.active(kind).cloned()));
    move || {
        active.get().map(|note| {
            let id = note.id;
            let on_close = Callback::new(move |()| {
                notifications.update(|n| {
                    n.close(kind, id);
                });
            });
            view! {
                <Toast
                    kind=kind
                    message=note.request.message
                    duration_ms=note.request.duration_ms
                    on_close=on_close
                />
            }
        })
    }
}

/// Page-level toast slots: one success and one error at most.
#[component]
pub fn ToastStack(notifications: RwSignal<NotificationsState>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            {toast_slot(notifications, NotificationKind::Success)}
            {toast_slot(notifications, NotificationKind::Error)}
        </div>
    }
}
