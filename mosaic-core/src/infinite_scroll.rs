//! Infinite-scroll demand trigger
//!
//! Signals "load more" once the reader is within the last fifth of the
//! content. After a request fires, the trigger stays quiet until the caller
//! reports a different item count, so a slow page cannot be requested twice.

use tracing::debug;

/// Scroll position snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    /// Whether the bottom edge of the viewport has passed `threshold` of the
    /// content height
    pub fn past_threshold(&self, threshold: f64) -> bool {
        self.scroll_top + self.viewport_height >= threshold * self.content_height
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollDemand {
    threshold: f64,
    action_triggered: bool,
    data_length: usize,
}

impl ScrollDemand {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            action_triggered: false,
            data_length: 0,
        }
    }

    /// Record the caller's current item count. A change re-arms the trigger.
    pub fn observe_data_length(&mut self, data_length: usize) {
        if data_length != self.data_length {
            self.data_length = data_length;
            self.action_triggered = false;
        }
    }

    /// Returns true when `next` should be called now. Arms the in-flight
    /// flag when it does.
    pub fn should_request(&mut self, metrics: ScrollMetrics, has_more: bool) -> bool {
        if self.action_triggered || !has_more {
            return false;
        }
        if !metrics.past_threshold(self.threshold) {
            return false;
        }
        debug!(
            "Requesting more items at {} loaded (scroll {:.0}/{:.0})",
            self.data_length,
            metrics.scroll_top + metrics.viewport_height,
            metrics.content_height
        );
        self.action_triggered = true;
        true
    }

    /// The requested page failed: clear the in-flight flag so a later check
    /// can ask again
    pub fn abandon(&mut self) {
        if self.action_triggered {
            debug!("Request at {} loaded abandoned", self.data_length);
            self.action_triggered = false;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.action_triggered
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScrollDemand {
    fn default() -> Self {
        Self::new(0.8)
    }
}
