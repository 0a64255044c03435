//! Playback timer backed by a Dioxus task
//!
//! Each scheduled timer is a spawned loop that bumps a tick counter signal.
//! The lightbox watches the counter from an effect and advances the slide
//! there, inside the runtime. Dropping the handle cancels the task.

use dioxus::core::Task;
use dioxus::prelude::*;
use mosaic_core::TimerScheduler;
use std::time::Duration;
use tracing::trace;

#[derive(Clone, Copy)]
pub struct TaskTimerScheduler {
    ticks: Signal<u64>,
}

impl TaskTimerScheduler {
    pub fn new(ticks: Signal<u64>) -> Self {
        Self { ticks }
    }
}

/// A running repeating timer. Cancelled on drop.
pub struct TaskTimer {
    task: Task,
}

impl Drop for TaskTimer {
    fn drop(&mut self) {
        self.task.cancel();
    }
}

impl TimerScheduler for TaskTimerScheduler {
    type Handle = TaskTimer;

    fn schedule_repeating(&mut self, period: Duration) -> TaskTimer {
        let mut ticks = self.ticks;
        let period_ms = period.as_millis() as u64;
        let task = spawn(async move {
            loop {
                sleep_ms(period_ms).await;
                trace!("Playback tick after {period_ms}ms");
                *ticks.write() += 1;
            }
        });
        TaskTimer { task }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
