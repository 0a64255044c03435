//! Thin wrappers over the window APIs the gallery touches
//!
//! Every helper degrades to a no-op (or `None`) when there is no window,
//! so components can call them unconditionally.

use mosaic_core::history::strip_markers;
use mosaic_core::scroll_sync::{centered_scroll_top, ElementRect};
use mosaic_core::ScrollMetrics;
use tracing::{debug, warn};

fn window() -> Option<web_sys::Window> {
    web_sys::window()
}

/// Current location fragment, including the leading `#` (empty when none)
pub fn location_fragment() -> Option<String> {
    window()?.location().hash().ok()
}

/// Swap the location fragment without adding a history entry
pub fn replace_fragment(fragment: &str) {
    write_fragment(fragment, false);
}

/// Move to `fragment` in a new history entry, so Back returns to the
/// current one
pub fn push_fragment(fragment: &str) {
    write_fragment(fragment, true);
}

/// Step back one history entry
pub fn go_back() {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.back() {
        warn!("Failed to go back in history: {:?}", e);
    }
}

fn write_fragment(fragment: &str, push: bool) {
    let Some(window) = window() else {
        return;
    };
    let location = window.location();
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    let url = format!("{path}{search}{fragment}");

    let Ok(history) = window.history() else {
        return;
    };
    let state = wasm_bindgen::JsValue::NULL;
    let result = if push {
        history.push_state_with_url(&state, "", Some(&url))
    } else {
        history.replace_state_with_url(&state, "", Some(&url))
    };
    if let Err(e) = result {
        warn!("Failed to update location fragment: {:?}", e);
    }
}

/// Remove a stale `&gid=..&pid=..` marker from the location, if present.
/// Returns true when the fragment changed.
pub fn strip_location_markers() -> bool {
    let Some(fragment) = location_fragment() else {
        return false;
    };
    let stripped = strip_markers(&fragment);
    if stripped == fragment {
        return false;
    }
    debug!("Stripping stale lightbox marker from {fragment}");
    replace_fragment(&stripped);
    true
}

/// Scroll the window so the element with `html_id` sits in the middle of the
/// viewport. Returns false if the element is not in the document.
pub fn scroll_element_into_center(html_id: &str, offset: f64) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(element) = window
        .document()
        .and_then(|d| d.get_element_by_id(html_id))
    else {
        debug!("No element #{html_id} to scroll to");
        return false;
    };

    let rect = element.get_bounding_client_rect();
    let page_y_offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = inner_height(&window);
    let top = centered_scroll_top(
        ElementRect {
            top: rect.top(),
            height: rect.height(),
        },
        page_y_offset,
        viewport_height,
        offset,
    );

    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Scroll position of the page against its total height
pub fn page_scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: window.scroll_y().unwrap_or(0.0),
        viewport_height: inner_height(&window),
        content_height: f64::from(root.scroll_height()),
    })
}

/// Viewport width and height in CSS pixels
pub fn viewport_size() -> (f64, f64) {
    match window() {
        Some(window) => (inner_width(&window), inner_height(&window)),
        None => (0.0, 0.0),
    }
}

pub fn device_pixel_ratio() -> f64 {
    window().map_or(1.0, |w| w.device_pixel_ratio())
}

pub fn is_fullscreen() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.fullscreen_element())
        .is_some()
}

/// Enter fullscreen on the element with `element_id`, or leave it
pub fn toggle_fullscreen(element_id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return;
    }
    let Some(element) = document.get_element_by_id(element_id) else {
        return;
    };
    if let Err(e) = element.request_fullscreen() {
        warn!("Fullscreen request rejected: {:?}", e);
    }
}

fn inner_width(window: &web_sys::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

fn inner_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}
