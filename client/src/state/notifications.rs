//! Transient toast notifications and their timed lifecycle.
//!
//! DESIGN
//! ======
//! [`ToastTimeline`] is a clock-driven state machine:
//! `entering -> visible -> leaving -> closed`. It owns no timers; the
//! component asks it for the next deadline, sleeps, then calls `advance` with
//! the current time. Transitions never fire before their deadline, so a
//! timer that wakes early simply reschedules.
//!
//! [`NotificationsState`] holds at most one active toast per kind. Every
//! `show` gets a fresh id, so a repeated message remounts a new independent
//! instance instead of being deduplicated.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Default visible duration of a toast.
pub const DEFAULT_DURATION_MS: u32 = 3000;
/// Fixed length of the exit transition.
pub const EXIT_TRANSITION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message to surface after an asynchronous operation completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRequest {
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u32,
}

impl NotificationRequest {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into(), duration_ms: DEFAULT_DURATION_MS }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into(), duration_ms: DEFAULT_DURATION_MS }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Entering,
    Visible,
    Leaving,
    Closed,
}

/// Timing state of one toast instance. Times are milliseconds on any
/// monotonic-enough clock (`Date.now()` in the browser).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastTimeline {
    duration_ms: f64,
    phase: ToastPhase,
    shown_at: Option<f64>,
    leaving_at: Option<f64>,
}

impl ToastTimeline {
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self { duration_ms: f64::from(duration_ms), phase: ToastPhase::Entering, shown_at: None, leaving_at: None }
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Entering styles have been painted: become visible, countdown starts at `now`.
    pub fn mount(&mut self, now: f64) {
        if self.phase == ToastPhase::Entering {
            self.phase = ToastPhase::Visible;
            self.shown_at = Some(now);
        }
    }

    /// Manual early dismiss. Only shortens the visible phase; the exit
    /// transition keeps its full length.
    pub fn dismiss(&mut self, now: f64) -> bool {
        if self.phase != ToastPhase::Visible {
            return false;
        }
        self.start_leaving(now);
        true
    }

    /// Time at which the next transition is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<f64> {
        match self.phase {
            ToastPhase::Visible => self.shown_at.map(|t| t + self.duration_ms),
            ToastPhase::Leaving => self.leaving_at.map(|t| t + f64::from(EXIT_TRANSITION_MS)),
            ToastPhase::Entering | ToastPhase::Closed => None,
        }
    }

    /// Apply the transition due at `now`, returning the new phase if one happened.
    pub fn advance(&mut self, now: f64) -> Option<ToastPhase> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }
        match self.phase {
            ToastPhase::Visible => self.start_leaving(now),
            ToastPhase::Leaving => self.phase = ToastPhase::Closed,
            ToastPhase::Entering | ToastPhase::Closed => return None,
        }
        Some(self.phase)
    }

    fn start_leaving(&mut self, now: f64) {
        self.phase = ToastPhase::Leaving;
        self.leaving_at = Some(now);
    }
}

/// A shown notification tagged with its instance id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub request: NotificationRequest,
}

/// Toast slots of a page: at most one success and one error at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    next_id: u64,
    success: Option<ActiveNotification>,
    error: Option<ActiveNotification>,
}

impl NotificationsState {
    /// Show `request`, replacing any toast of the same kind. Returns the instance id.
    pub fn show(&mut self, request: NotificationRequest) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let kind = request.kind;
        *self.slot_mut(kind) = Some(ActiveNotification { id, request });
        id
    }

    /// Completion callback target. A stale id (already replaced) is ignored.
    pub fn close(&mut self, kind: NotificationKind, id: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|active| active.id == id) {
            *slot = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn active(&self, kind: NotificationKind) -> Option<&ActiveNotification> {
        match kind {
            NotificationKind::Success => self.success.as_ref(),
            NotificationKind::Error => self.error.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: NotificationKind) -> &mut Option<ActiveNotification> {
        match kind {
            NotificationKind::Success => &mut self.success,
            NotificationKind::Error => &mut self.error,
        }
    }
}
