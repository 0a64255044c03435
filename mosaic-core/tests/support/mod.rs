#![allow(dead_code)]

use mosaic_core::{ImageDescriptor, TimerScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum TimerEvent {
    Scheduled { id: u32, period: Duration },
    Cancelled { id: u32 },
}

/// Scheduler that records every schedule/cancel instead of running timers
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    log: Rc<RefCell<Vec<TimerEvent>>>,
    next_id: u32,
}

pub struct RecordingTimer {
    id: u32,
    log: Rc<RefCell<Vec<TimerEvent>>>,
}

impl Drop for RecordingTimer {
    fn drop(&mut self) {
        self.log
            .borrow_mut()
            .push(TimerEvent::Cancelled { id: self.id });
    }
}

impl TimerScheduler for RecordingScheduler {
    type Handle = RecordingTimer;

    fn schedule_repeating(&mut self, period: Duration) -> RecordingTimer {
        self.next_id += 1;
        let id = self.next_id;
        self.log
            .borrow_mut()
            .push(TimerEvent::Scheduled { id, period });
        RecordingTimer {
            id,
            log: Rc::clone(&self.log),
        }
    }
}

impl RecordingScheduler {
    pub fn events(&self) -> Vec<TimerEvent> {
        self.log.borrow().clone()
    }

    /// Timers scheduled and not yet cancelled
    pub fn active(&self) -> usize {
        let log = self.log.borrow();
        let scheduled = log
            .iter()
            .filter(|e| matches!(e, TimerEvent::Scheduled { .. }))
            .count();
        let cancelled = log
            .iter()
            .filter(|e| matches!(e, TimerEvent::Cancelled { .. }))
            .count();
        scheduled - cancelled
    }

    /// Highest number of concurrently live timers seen in the log
    pub fn peak_active(&self) -> usize {
        let mut live = 0usize;
        let mut peak = 0usize;
        for event in self.log.borrow().iter() {
            match event {
                TimerEvent::Scheduled { .. } => live += 1,
                TimerEvent::Cancelled { .. } => live -= 1,
            }
            peak = peak.max(live);
        }
        peak
    }
}

pub fn image(id: u64) -> ImageDescriptor {
    ImageDescriptor {
        id,
        src: format!("https://img.example.com/{id}.jpg"),
        thumbnail: format!("https://img.example.com/{id}_t.jpg"),
        lazy_src: format!("https://img.example.com/{id}_l.jpg"),
        w: 1600,
        h: 1200,
        thumbnail_w: 400,
        thumbnail_h: 300,
        description: format!("Description {id}"),
        title: format!("Image {id}"),
        author: "someone".to_string(),
        external_link: Some(format!("https://example.com/post/{id}")),
        html_id: format!("image-{id}"),
        medium: None,
        original: None,
    }
}

pub fn images(count: u64) -> Vec<ImageDescriptor> {
    (0..count).map(image).collect()
}
