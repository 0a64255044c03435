//! Current slide: zoom, pan and swipe handling
//!
//! Pointer drags pan while zoomed and otherwise resolve to a swipe on
//! release. A drag longer than `CLICK_SLOP_PX` swallows the click that
//! follows it, so releasing a swipe over the backdrop does not close.

use super::LightboxActions;
use crate::browser;
use dioxus::prelude::*;
use mosaic_core::{ImageDescriptor, SwipeGesture, ZoomState};

const CLICK_SLOP_PX: f64 = 6.0;

#[component]
pub(super) fn LightboxSlide(actions: LightboxActions, item: ImageDescriptor, zoom: ZoomState) -> Element {
    let mut drag: Signal<Option<SwipeGesture>> = use_signal(|| None);
    let mut dragged = use_signal(|| false);

    let (viewport_width, _) = browser::viewport_size();
    let (src, width, height) = item.source_for_viewport(viewport_width, browser::device_pixel_ratio());
    let transform = zoom.css_transform();
    let cursor = if zoom.is_zoomed() {
        "cursor-grab"
    } else {
        "cursor-zoom-in"
    };
    let alt = if item.title.is_empty() {
        item.description.clone()
    } else {
        item.title.clone()
    };

    rsx! {
        div {
            class: "absolute inset-0 flex items-center justify-center overflow-hidden",
            style: "touch-action: none;",
            onclick: move |_| {
                if dragged() {
                    dragged.set(false);
                } else if actions.caption_expanded() {
                    actions.collapse_caption();
                } else {
                    actions.close();
                }
            },
            onwheel: move |evt| {
                evt.prevent_default();
                actions.wheel_zoom(evt.delta().strip_units().y < 0.0);
            },
            onpointerdown: move |evt| {
                let point = evt.client_coordinates();
                drag.set(Some(SwipeGesture::start(point.x, point.y)));
                dragged.set(false);
            },
            onpointermove: move |evt| {
                let Some(mut gesture) = drag() else {
                    return;
                };
                let point = evt.client_coordinates();
                let (dx, dy) = gesture.move_to(point.x, point.y);
                if gesture.distance() > CLICK_SLOP_PX && !dragged() {
                    dragged.set(true);
                }
                drag.set(Some(gesture));
                if zoom.is_zoomed() {
                    actions.pan_by(dx, dy);
                }
            },
            onpointerup: move |_| {
                let Some(gesture) = drag.take() else {
                    return;
                };
                if zoom.is_zoomed() {
                    return;
                }
                if let Some(direction) = gesture.finish() {
                    actions.swipe(direction);
                }
            },
            onpointerleave: move |_| drag.set(None),

            img {
                class: "max-w-full max-h-full object-contain transition-transform duration-150 {cursor}",
                style: "transform: {transform};",
                src: "{src}",
                width: "{width}",
                height: "{height}",
                alt: "{alt}",
                draggable: "false",
                onclick: move |evt| {
                    evt.stop_propagation();
                    if dragged() {
                        dragged.set(false);
                    } else {
                        actions.collapse_caption();
                    }
                },
                ondoubleclick: move |evt| {
                    evt.stop_propagation();
                    actions.toggle_zoom();
                },
            }
        }
    }
}
