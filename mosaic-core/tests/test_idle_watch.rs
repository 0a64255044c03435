mod support;

use mosaic_core::idle::IdleWatch;
use std::time::Duration;
use support::{RecordingScheduler, TimerEvent};

#[test]
fn test_goes_idle_after_timeout() {
    let mut watch = IdleWatch::new(RecordingScheduler::default(), 4000);
    assert!(!watch.activity());
    assert!(!watch.is_idle());
    assert_eq!(
        watch.scheduler().events(),
        vec![TimerEvent::Scheduled {
            id: 1,
            period: Duration::from_millis(4000)
        }]
    );

    assert!(watch.on_timeout());
    assert!(watch.is_idle());
    assert_eq!(watch.scheduler().active(), 0);

    // A second timeout with no countdown running changes nothing
    assert!(!watch.on_timeout());
}

#[test]
fn test_activity_restarts_single_countdown() {
    let mut watch = IdleWatch::new(RecordingScheduler::default(), 4000);
    for _ in 0..5 {
        watch.activity();
    }
    assert_eq!(watch.scheduler().active(), 1);
    assert_eq!(watch.scheduler().peak_active(), 1);
    assert!(!watch.is_idle());
}

#[test]
fn test_activity_wakes_idle_chrome() {
    let mut watch = IdleWatch::new(RecordingScheduler::default(), 4000);
    watch.activity();
    watch.on_timeout();
    assert!(watch.activity());
    assert!(!watch.is_idle());
    assert!(watch.is_counting());
}

#[test]
fn test_stop_cancels_and_shows_chrome() {
    let mut watch = IdleWatch::new(RecordingScheduler::default(), 4000);
    watch.activity();
    watch.stop();
    assert!(!watch.is_counting());
    assert_eq!(watch.scheduler().active(), 0);
    assert!(!watch.on_timeout());
    assert!(!watch.is_idle());
}

#[test]
fn test_zero_delay_never_hides() {
    let mut watch = IdleWatch::new(RecordingScheduler::default(), 0);
    watch.activity();
    assert!(!watch.is_counting());
    assert!(!watch.on_timeout());
    assert!(watch.scheduler().events().is_empty());
}
