//! WASM utilities for browser interop
//!
//! # Listener cleanup
//!
//! A JavaScript listener backed by a Rust `Closure` must outlive its
//! registration. `closure.forget()` leaks it and leaves the listener attached
//! forever, so both types here own their closure and detach it on `Drop`:
//!
//! ```ignore
//! let listener = DomEventListener::on_current_document("scroll", callback);
//! // Removed when dropped
//! drop(listener);
//! ```
//!
//! Store them in a `Signal<Option<_>>` and set it to `None` to detach.
//!
//! Callbacks run outside the Dioxus runtime: they should only write signals
//! and leave the real work to an effect.

use wasm_bindgen::prelude::*;

/// A DOM event listener that removes itself when dropped
pub struct DomEventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DomEventListener {
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attach to the current window's document, if there is one
    pub fn on_current_document(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document.into(), event_name, callback))
    }

    /// Attach to the current window (`popstate`, `hashchange`)
    pub fn on_current_window(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }
}

impl Drop for DomEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Reports an element's content width whenever it changes. Disconnects on drop.
pub struct ElementResizeObserver {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ElementResizeObserver {
    pub fn new(element: &web_sys::Element, mut on_width: impl FnMut(f64) + 'static) -> Option<Self> {
        let callback: Closure<dyn FnMut(js_sys::Array)> =
            Closure::wrap(Box::new(move |entries: js_sys::Array| {
                if let Some(entry) = entries.get(0).dyn_ref::<web_sys::ResizeObserverEntry>() {
                    on_width(entry.content_rect().width());
                }
            }));

        let observer = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ElementResizeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
