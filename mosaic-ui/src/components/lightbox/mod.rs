//! Lightbox overlay
//!
//! `use_lightbox` owns a [`LightboxController`] in a signal and hands out
//! [`LightboxActions`], a `Copy` handle the grid and the overlay both call.
//! The actions add the browser side of each transition: location fragment
//! markers, scrolling the grid cell into view, and focus.
//!
//! ## History
//!
//! The first slide of a session pushes a marked history entry and later
//! slides replace it, so Back closes the overlay instead of leaving the page.
//! A `popstate` that drops the marker closes the overlay without stepping
//! back a second time.
//!
//! ## Playback ticks
//!
//! The controller's timers come from [`TaskTimerScheduler`], which only bumps
//! a tick counter. An effect watching that counter advances the slide, so the
//! controller is never borrowed from inside its own timer. The idle countdown
//! that hides the toolbar and caption works the same way on its own counter.

mod caption;
mod slide;
mod toolbar;
mod view;

pub use view::Lightbox;

use crate::browser;
use crate::timer::TaskTimerScheduler;
use crate::wasm_utils::DomEventListener;
use dioxus::prelude::*;
use mosaic_core::history::{has_markers, CloseNavigation, FragmentUpdate, HistorySession};
use mosaic_core::idle::IdleWatch;
use mosaic_core::zoom::{ZoomBounds, WHEEL_ZOOM_STEP};
use mosaic_core::{ImageDescriptor, LightboxConfig, LightboxController, OverlayHandle, SwipeDirection};
use tracing::debug;

pub type GalleryLightbox = LightboxController<TaskTimerScheduler>;

/// DOM id of the overlay root (fullscreen target)
pub const LIGHTBOX_ROOT_ID: &str = "mosaic-lightbox";

#[derive(Clone, Copy, PartialEq)]
pub struct LightboxActions {
    controller: Signal<GalleryLightbox>,
    anchor_mounted: Signal<bool>,
    history: Signal<HistorySession>,
    idle_watch: CopyValue<IdleWatch<TaskTimerScheduler>>,
    idle: Signal<bool>,
    settings: Signal<LightboxConfig>,
}

/// Create the lightbox state for a gallery. Also clears any marker a
/// previous visit left in the location.
pub fn use_lightbox(settings: LightboxConfig) -> LightboxActions {
    let ticks = use_signal(|| 0u64);
    let controller = use_signal(|| {
        LightboxController::new(TaskTimerScheduler::new(ticks), settings.playback)
            .with_loop_gestures(settings.loop_gestures)
    });
    let idle_ticks = use_signal(|| 0u64);
    let idle_delay = settings.idle_ms;
    let idle_watch =
        use_hook(|| CopyValue::new(IdleWatch::new(TaskTimerScheduler::new(idle_ticks), idle_delay)));
    let idle = use_signal(|| false);
    let anchor_mounted = use_signal(|| false);
    let history = use_signal(HistorySession::default);
    let settings = use_signal(move || settings);

    let actions = LightboxActions {
        controller,
        anchor_mounted,
        history,
        idle_watch,
        idle,
        settings,
    };

    use_hook(browser::strip_location_markers);

    let mut location_changes = use_signal(|| 0u64);
    let mut popstate_listener: Signal<Option<DomEventListener>> = use_signal(|| None);
    use_hook(move || {
        popstate_listener.set(DomEventListener::on_current_window("popstate", move |_| {
            *location_changes.write() += 1;
        }));
    });

    use_effect(move || {
        if ticks() > 0 {
            actions.advance_on_tick();
        }
    });

    use_effect(move || {
        if idle_ticks() > 0 {
            actions.idle_timeout();
        }
    });

    use_effect(move || {
        if location_changes() > 0 {
            actions.location_changed();
        }
    });

    actions
}

impl LightboxActions {
    pub fn controller(&self) -> Signal<GalleryLightbox> {
        self.controller
    }

    pub fn settings(&self) -> LightboxConfig {
        self.settings.peek().clone()
    }

    pub fn is_open(&self) -> bool {
        self.controller.peek().is_open()
    }

    pub fn caption_expanded(&self) -> bool {
        self.controller.peek().caption_expanded()
    }

    /// Whether the toolbar and caption are hidden. Subscribes the caller.
    pub fn is_idle(&self) -> bool {
        (self.idle)()
    }

    pub(crate) fn set_anchor_mounted(mut self, mounted: bool) {
        if *self.anchor_mounted.peek() != mounted {
            self.anchor_mounted.set(mounted);
        }
    }

    /// Open on `images[index]`. Returns `None` (and leaves the overlay
    /// closed) if the anchor is not mounted yet or the index is invalid.
    pub fn open(mut self, index: usize, images: &[ImageDescriptor]) -> Option<OverlayHandle> {
        let anchor_mounted = *self.anchor_mounted.peek();
        let handle = self
            .controller
            .write()
            .open(index, images, anchor_mounted)
            .ok()?;

        // Reopening over an open session keeps its history entry
        if self.settings.peek().history && !self.history.peek().is_active() {
            let fragment = browser::location_fragment().unwrap_or_default();
            self.history.write().begin(&fragment);
        }
        self.user_activity();
        self.slide_changed();
        Some(handle)
    }

    pub fn close(self) {
        self.finish(false);
    }

    /// The browser moved to an entry without our marker (Back, edited hash)
    fn location_changed(self) {
        if !self.is_open() || !self.history.peek().is_active() {
            return;
        }
        let fragment = browser::location_fragment().unwrap_or_default();
        if !has_markers(&fragment) {
            debug!("Location lost the lightbox marker, closing");
            self.finish(true);
        }
    }

    fn finish(mut self, left_by_navigation: bool) {
        if !self.controller.write().close() {
            return;
        }
        self.idle_watch.write().stop();
        if *self.idle.peek() {
            self.idle.set(false);
        }
        let navigation = self.history.write().end(left_by_navigation);
        match navigation {
            CloseNavigation::Back => browser::go_back(),
            CloseNavigation::Restore(fragment) => browser::replace_fragment(&fragment),
            CloseNavigation::None => {}
        }
    }

    /// Pointer or key input on the overlay: show the chrome, restart the
    /// idle countdown
    pub fn user_activity(mut self) {
        let woke = self.idle_watch.write().activity();
        if woke {
            self.idle.set(false);
        }
    }

    fn idle_timeout(mut self) {
        let went_idle = self.idle_watch.write().on_timeout();
        if went_idle {
            self.idle.set(true);
        }
    }

    pub fn next(self) {
        self.navigate(|lightbox| lightbox.next());
    }

    pub fn prev(self) {
        self.navigate(|lightbox| lightbox.prev());
    }

    pub fn swipe(self, direction: SwipeDirection) {
        self.navigate(|lightbox| lightbox.swipe(direction));
    }

    fn advance_on_tick(self) {
        self.navigate(|lightbox| lightbox.on_tick());
    }

    fn navigate(mut self, step: impl FnOnce(&mut GalleryLightbox) -> Option<usize>) {
        let changed = step(&mut *self.controller.write());
        if changed.is_some() {
            self.slide_changed();
        }
    }

    pub fn cycle_playback(mut self) {
        self.controller.write().cycle_playback();
    }

    pub fn toggle_caption(mut self) {
        self.controller.write().toggle_caption();
    }

    pub fn collapse_caption(mut self) {
        if self.caption_expanded() {
            self.controller.write().collapse_caption();
        }
    }

    pub fn toggle_zoom(mut self) {
        let Some(bounds) = self.zoom_bounds() else {
            return;
        };
        let level = self.settings.peek().double_tap_zoom;
        self.controller.write().toggle_zoom(level, &bounds);
    }

    /// One wheel notch: in for `zoom_in`, out otherwise
    pub fn wheel_zoom(mut self, zoom_in: bool) {
        let Some(bounds) = self.zoom_bounds() else {
            return;
        };
        let factor = if zoom_in {
            WHEEL_ZOOM_STEP
        } else {
            1.0 / WHEEL_ZOOM_STEP
        };
        let max_zoom = self.settings.peek().max_zoom;
        self.controller.write().zoom_by(factor, max_zoom, &bounds);
    }

    pub fn pan_by(mut self, dx: f64, dy: f64) {
        let Some(bounds) = self.zoom_bounds() else {
            return;
        };
        self.controller.write().pan_by(dx, dy, &bounds);
    }

    /// Append images the caller added while the overlay is open
    pub fn sync_items(mut self, images: &[ImageDescriptor]) {
        let grew = {
            let lightbox = self.controller.peek();
            lightbox.is_open() && images.len() > lightbox.slide_count()
        };
        if grew {
            self.controller.write().sync_items(images);
        }
    }

    fn zoom_bounds(&self) -> Option<ZoomBounds> {
        let lightbox = self.controller.peek();
        let item = lightbox.current_item()?;
        Some(ZoomBounds::new(item.full_size(), browser::viewport_size()))
    }

    fn slide_changed(mut self) {
        let settings = self.settings.peek();
        let lightbox = self.controller.peek();
        let (Some(index), Some(item)) = (lightbox.current_index(), lightbox.current_item()) else {
            return;
        };

        if settings.scroll_into_view {
            browser::scroll_element_into_center(&item.html_id, settings.scroll_offset);
        }
        if settings.history {
            let update = self.history.write().slide_changed(settings.gallery_id, index);
            match update {
                Some(FragmentUpdate::Push(fragment)) => browser::push_fragment(&fragment),
                Some(FragmentUpdate::Replace(fragment)) => browser::replace_fragment(&fragment),
                None => {}
            }
        }
        debug!("Lightbox showing {} ({})", index, item.html_id);
    }
}
