//! Cancellation handle for `spawn_local` timer loops.
//!
//! A component that sleeps in a background task clears `alive` from
//! `on_cleanup`, so the task exits on its next wake instead of writing to a
//! disposed signal. Bumping the generation invalidates an in-flight sleep
//! without unmounting, e.g. when a toast is dismissed early and reschedules.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Clone, Debug)]
pub struct TimerGuard {
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl Default for TimerGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerGuard {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)), generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Start a new schedule; loops holding an older generation stop.
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether a loop started with `generation` should keep running.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.alive.load(Ordering::Relaxed) && self.generation.load(Ordering::Relaxed) == generation
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Owner unmounted; every loop stops.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
