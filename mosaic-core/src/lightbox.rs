//! Lightbox controller
//!
//! Owns the overlay lifecycle. `open` builds a fresh session seeded with the
//! caller's sequence; `close` drops it. Everything transient (current slide,
//! playback mode and its timer, caption state, zoom) lives in the session, so
//! closing resets all of it and re-opening never inherits the previous
//! session's values.
//!
//! ## Timer invariant
//!
//! A session holds at most one timer handle. Changing the playback mode takes
//! the old handle out and drops it (cancelling the timer) before asking the
//! scheduler for a new one.

use crate::descriptor::ImageDescriptor;
use crate::error::GalleryError;
use crate::gesture::SwipeDirection;
use crate::playback::{PlaybackMode, PlaybackPeriods, TimerScheduler};
use crate::slide_buffer::SlideBuffer;
use crate::zoom::{ZoomBounds, ZoomState};
use tracing::{debug, warn};

/// Identifies one open overlay instance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayHandle {
    pub generation: u64,
    pub index: usize,
}

struct Session<H> {
    generation: u64,
    slides: SlideBuffer,
    index: usize,
    playback: PlaybackMode,
    timer: Option<H>,
    caption_expanded: bool,
    zoom: ZoomState,
}

pub struct LightboxController<S: TimerScheduler> {
    scheduler: S,
    periods: PlaybackPeriods,
    /// Whether swipes wrap around the ends
    loop_gestures: bool,
    session: Option<Session<S::Handle>>,
    generation: u64,
}

impl<S: TimerScheduler> LightboxController<S> {
    pub fn new(scheduler: S, periods: PlaybackPeriods) -> Self {
        Self {
            scheduler,
            periods,
            loop_gestures: false,
            session: None,
            generation: 0,
        }
    }

    pub fn with_loop_gestures(mut self, loop_gestures: bool) -> Self {
        self.loop_gestures = loop_gestures;
        self
    }

    // ---- lifecycle -------------------------------------------------------

    /// Open the overlay on `images[index]`.
    ///
    /// Any previous session is discarded (its timer cancelled). Fails when
    /// the overlay anchor is not mounted or `index` is out of range; both
    /// leave the controller closed.
    pub fn open(
        &mut self,
        index: usize,
        images: &[ImageDescriptor],
        anchor_mounted: bool,
    ) -> Result<OverlayHandle, GalleryError> {
        self.close();

        if !anchor_mounted {
            warn!("Lightbox open({index}) ignored: anchor is not mounted");
            return Err(GalleryError::AnchorUnavailable);
        }
        if index >= images.len() {
            warn!(
                "Lightbox open({index}) ignored: only {} images",
                images.len()
            );
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: images.len(),
            });
        }

        self.generation += 1;
        self.session = Some(Session {
            generation: self.generation,
            slides: SlideBuffer::from_sequence(images),
            index,
            playback: PlaybackMode::Off,
            timer: None,
            caption_expanded: false,
            zoom: ZoomState::default(),
        });
        debug!(
            "Lightbox opened at {index} of {} (generation {})",
            images.len(),
            self.generation
        );

        Ok(OverlayHandle {
            generation: self.generation,
            index,
        })
    }

    /// Close the overlay. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(
                    "Lightbox closed at {} (generation {}, playback {:?})",
                    session.index, session.generation, session.playback
                );
                // Dropping the session drops its timer handle
                drop(session);
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn handle(&self) -> Option<OverlayHandle> {
        self.session.as_ref().map(|s| OverlayHandle {
            generation: s.generation,
            index: s.index,
        })
    }

    // ---- queries ---------------------------------------------------------

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    pub fn current_item(&self) -> Option<&ImageDescriptor> {
        self.session.as_ref().and_then(|s| s.slides.get(s.index))
    }

    pub fn slides(&self) -> Option<&SlideBuffer> {
        self.session.as_ref().map(|s| &s.slides)
    }

    pub fn slide_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.slides.len())
    }

    /// Playback mode of the open session, Off when closed
    pub fn playback_mode(&self) -> PlaybackMode {
        self.session
            .as_ref()
            .map_or(PlaybackMode::Off, |s| s.playback)
    }

    pub fn has_active_timer(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.timer.is_some())
    }

    pub fn caption_expanded(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.caption_expanded)
    }

    pub fn zoom(&self) -> ZoomState {
        self.session
            .as_ref()
            .map(|s| s.zoom)
            .unwrap_or_default()
    }

    /// `"3 / 40"` style position label
    pub fn counter_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format!("{} / {}", s.index + 1, s.slides.len()))
    }

    /// Neighbouring indices to preload around the current slide
    pub fn preload_indices(&self, before: usize, after: usize) -> Vec<usize> {
        self.session
            .as_ref()
            .map(|s| s.slides.preload_indices(s.index, before, after))
            .unwrap_or_default()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    // ---- navigation ------------------------------------------------------

    /// Advance one slide, wrapping from the last to the first
    pub fn next(&mut self) -> Option<usize> {
        let session = self.session.as_ref()?;
        let len = session.slides.len();
        let target = (session.index + 1) % len.max(1);
        self.go_to(target)
    }

    /// Go back one slide, wrapping from the first to the last
    pub fn prev(&mut self) -> Option<usize> {
        let session = self.session.as_ref()?;
        let len = session.slides.len();
        let target = (session.index + len.max(1) - 1) % len.max(1);
        self.go_to(target)
    }

    /// Jump to `index`. Returns the new index when the slide changed.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        let session = self.session.as_mut()?;
        if index >= session.slides.len() || index == session.index {
            return None;
        }
        session.index = index;
        session.zoom.reset();
        debug!("Lightbox slide -> {index}");
        Some(index)
    }

    /// Apply a finished swipe. Swipes stop at the ends unless gesture
    /// looping is enabled.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<usize> {
        let session = self.session.as_ref()?;
        if self.loop_gestures {
            return match direction {
                SwipeDirection::Next => self.next(),
                SwipeDirection::Previous => self.prev(),
            };
        }
        let target = match direction {
            SwipeDirection::Next => session.index + 1,
            SwipeDirection::Previous => session.index.checked_sub(1)?,
        };
        self.go_to(target)
    }

    // ---- playback --------------------------------------------------------

    /// Playback button: Off -> Normal -> Fast -> Off
    pub fn cycle_playback(&mut self) -> PlaybackMode {
        let next = self.playback_mode().next();
        self.set_playback(next);
        self.playback_mode()
    }

    /// Switch playback mode. The existing timer is cancelled before a new one
    /// is scheduled. Ignored while closed.
    pub fn set_playback(&mut self, mode: PlaybackMode) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        drop(session.timer.take());
        session.playback = mode;

        if let Some(period) = mode.period(&self.periods) {
            session.timer = Some(self.scheduler.schedule_repeating(period));
        }
        debug!("Lightbox playback -> {mode:?}");
    }

    /// Timer callback: advance when playback is on. Stale ticks that arrive
    /// after playback stopped or the overlay closed are ignored.
    pub fn on_tick(&mut self) -> Option<usize> {
        if self.playback_mode() == PlaybackMode::Off {
            return None;
        }
        self.next()
    }

    // ---- sequence growth -------------------------------------------------

    /// Append items the caller added since the overlay opened. The current
    /// slide does not move. Returns how many slides were appended.
    pub fn sync_items(&mut self, images: &[ImageDescriptor]) -> usize {
        let Some(session) = self.session.as_mut() else {
            return 0;
        };
        let added = session.slides.extend_from_tail(images);
        if added > 0 {
            debug!(
                "Lightbox appended {added} slides (now {})",
                session.slides.len()
            );
        }
        added
    }

    // ---- caption ---------------------------------------------------------

    pub fn toggle_caption(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.caption_expanded = !session.caption_expanded;
                session.caption_expanded
            }
            None => false,
        }
    }

    pub fn collapse_caption(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.caption_expanded = false;
        }
    }

    // ---- zoom ------------------------------------------------------------

    pub fn toggle_zoom(&mut self, zoom_level: f64, bounds: &ZoomBounds) {
        if let Some(session) = self.session.as_mut() {
            session.zoom.toggle(zoom_level, bounds);
        }
    }

    pub fn zoom_by(&mut self, factor: f64, max_zoom: f64, bounds: &ZoomBounds) {
        if let Some(session) = self.session.as_mut() {
            session.zoom.zoom_by(factor, max_zoom, bounds);
        }
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64, bounds: &ZoomBounds) {
        if let Some(session) = self.session.as_mut() {
            session.zoom.pan_by(dx, dy, bounds);
        }
    }
}
