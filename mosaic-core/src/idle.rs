//! Auto-hide for the overlay chrome
//!
//! The toolbar and caption slide out after a stretch without pointer or key
//! input. Any input brings them back and restarts the countdown.

use crate::playback::TimerScheduler;
use std::time::Duration;
use tracing::trace;

pub struct IdleWatch<S: TimerScheduler> {
    scheduler: S,
    /// Zero disables auto-hide
    delay_ms: u64,
    idle: bool,
    timer: Option<S::Handle>,
}

impl<S: TimerScheduler> IdleWatch<S> {
    pub fn new(scheduler: S, delay_ms: u64) -> Self {
        Self {
            scheduler,
            delay_ms,
            idle: false,
            timer: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }

    pub fn is_counting(&self) -> bool {
        self.timer.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Input seen: show the chrome and restart the countdown.
    /// Returns true if this woke the chrome from idle.
    pub fn activity(&mut self) -> bool {
        let woke = std::mem::take(&mut self.idle);
        // Drop the old countdown before starting the next one
        self.timer = None;
        if self.delay_ms > 0 {
            self.timer = Some(
                self.scheduler
                    .schedule_repeating(Duration::from_millis(self.delay_ms)),
            );
        }
        woke
    }

    /// Countdown elapsed. Returns true if the chrome just went idle.
    pub fn on_timeout(&mut self) -> bool {
        if self.timer.take().is_none() {
            return false;
        }
        trace!("Overlay chrome idle after {}ms", self.delay_ms);
        self.idle = true;
        true
    }

    /// Overlay closed: no countdown, chrome visible for the next open
    pub fn stop(&mut self) {
        self.timer = None;
        self.idle = false;
    }
}
