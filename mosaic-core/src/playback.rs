//! Slideshow auto-playback
//!
//! The playback mode cycles Off -> Normal -> Fast -> Off. Each mode other than
//! Off owns exactly one repeating timer. Timer handles cancel themselves when
//! dropped, so replacing or discarding a handle is the cancellation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    #[default]
    Off,
    Normal,
    Fast,
}

impl PlaybackMode {
    /// Next mode in the button's cycle
    pub fn next(self) -> Self {
        match self {
            PlaybackMode::Off => PlaybackMode::Normal,
            PlaybackMode::Normal => PlaybackMode::Fast,
            PlaybackMode::Fast => PlaybackMode::Off,
        }
    }

    /// Advance period for this mode, `None` when playback is off
    pub fn period(self, periods: &PlaybackPeriods) -> Option<Duration> {
        match self {
            PlaybackMode::Off => None,
            PlaybackMode::Normal => Some(Duration::from_millis(periods.normal_ms)),
            PlaybackMode::Fast => Some(Duration::from_millis(periods.fast_ms)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlaybackMode::Off => "Auto playback",
            PlaybackMode::Normal => "Faster playback",
            PlaybackMode::Fast => "Stop playback",
        }
    }
}

/// Advance periods in milliseconds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackPeriods {
    pub normal_ms: u64,
    pub fast_ms: u64,
}

impl Default for PlaybackPeriods {
    fn default() -> Self {
        Self {
            normal_ms: 6000,
            fast_ms: 3000,
        }
    }
}

/// Source of repeating timers.
///
/// `schedule_repeating` starts a timer that fires every `period` until the
/// returned handle is dropped. Dropping the handle must cancel the timer.
pub trait TimerScheduler {
    type Handle;

    fn schedule_repeating(&mut self, period: Duration) -> Self::Handle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_off_after_three_presses() {
        let mut mode = PlaybackMode::Off;
        let mut seen = Vec::new();
        for _ in 0..3 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![PlaybackMode::Normal, PlaybackMode::Fast, PlaybackMode::Off]
        );
    }

    #[test]
    fn test_periods() {
        let periods = PlaybackPeriods::default();
        assert_eq!(PlaybackMode::Off.period(&periods), None);
        assert_eq!(
            PlaybackMode::Normal.period(&periods),
            Some(Duration::from_millis(6000))
        );
        assert_eq!(
            PlaybackMode::Fast.period(&periods),
            Some(Duration::from_millis(3000))
        );
    }
}
