//! Overlay anchor and the open overlay
//!
//! `Lightbox` is always rendered by the gallery: its root is the anchor the
//! controller requires before opening. The overlay itself only exists while a
//! session is open.

use super::caption::LightboxCaption;
use super::slide::LightboxSlide;
use super::toolbar::LightboxToolbar;
use super::{LightboxActions, LIGHTBOX_ROOT_ID};
use crate::browser;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::wasm_utils::DomEventListener;
use dioxus::prelude::*;
use mosaic_core::ImageDescriptor;

const ARROW_CLASS: &str = "absolute top-1/2 -translate-y-1/2 w-12 h-12 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10";

#[component]
pub fn Lightbox(actions: LightboxActions, images: Vec<ImageDescriptor>) -> Element {
    // The caller's sequence grew (next page arrived) while open
    actions.sync_items(&images);

    let is_open = actions.controller().read().is_open();

    rsx! {
        div {
            class: "mosaic-lightbox-anchor",
            onmounted: move |_| actions.set_anchor_mounted(true),
            if is_open {
                LightboxOverlay { actions }
            }
        }
    }
}

#[component]
fn LightboxOverlay(actions: LightboxActions) -> Element {
    let settings = actions.settings();
    let mut is_fullscreen = use_signal(browser::is_fullscreen);
    let mut fullscreen_listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    use_hook(move || {
        fullscreen_listener.set(DomEventListener::on_current_document(
            "fullscreenchange",
            move |_| is_fullscreen.set(browser::is_fullscreen()),
        ));
    });

    let controller = actions.controller();
    let lightbox = controller.read();
    let Some(item) = lightbox.current_item().cloned() else {
        return rsx! {};
    };
    let counter = lightbox.counter_label().unwrap_or_default();
    let playback = lightbox.playback_mode();
    let caption_expanded = lightbox.caption_expanded();
    let zoom = lightbox.zoom();
    let can_navigate = lightbox.slide_count() > 1;
    let idle_class = if actions.is_idle() { "idle cursor-none" } else { "" };

    let (viewport_width, _) = browser::viewport_size();
    let pixel_ratio = browser::device_pixel_ratio();
    let preload: Vec<String> = lightbox
        .preload_indices(settings.preload_before, settings.preload_after)
        .into_iter()
        .filter_map(|index| lightbox.slides()?.get(index))
        .map(|image| {
            image
                .source_for_viewport(viewport_width, pixel_ratio)
                .0
                .to_string()
        })
        .collect();
    drop(lightbox);

    let on_keydown = move |evt: KeyboardEvent| {
        actions.user_activity();
        match evt.key() {
            Key::Escape => actions.close(),
            Key::ArrowLeft => actions.prev(),
            Key::ArrowRight => actions.next(),
            _ => {}
        }
    };

    rsx! {
        div {
            id: LIGHTBOX_ROOT_ID,
            class: "fixed inset-0 z-50 flex flex-col bg-black/95 text-gray-200 select-none outline-none overflow-hidden {idle_class}",
            "data-idle": "{actions.is_idle()}",
            role: "dialog",
            "aria-modal": "true",
            tabindex: "-1",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_keydown,
            onpointermove: move |_| actions.user_activity(),
            onpointerdown: move |_| actions.user_activity(),

            LightboxToolbar {
                actions,
                counter,
                playback,
                is_fullscreen: is_fullscreen(),
                is_zoomed: zoom.is_zoomed(),
                external_link: item.external_link(),
                download_link: item.download_link(),
            }

            div { class: "relative flex-1 min-h-0",
                LightboxSlide { actions, item: item.clone(), zoom }

                if can_navigate {
                    button {
                        class: "{ARROW_CLASS} left-4",
                        title: "Previous",
                        onclick: move |e| {
                            e.stop_propagation();
                            actions.prev();
                        },
                        ChevronLeftIcon { class: "w-7 h-7 text-gray-300 -translate-x-0.5", stroke_width: "1.5" }
                    }
                    button {
                        class: "{ARROW_CLASS} right-4",
                        title: "Next",
                        onclick: move |e| {
                            e.stop_propagation();
                            actions.next();
                        },
                        ChevronRightIcon { class: "w-7 h-7 text-gray-300 translate-x-0.5", stroke_width: "1.5" }
                    }
                }
            }

            LightboxCaption { actions, item, expanded: caption_expanded }

            // Neighbouring slides, fetched ahead of navigation
            div { class: "hidden", "aria-hidden": "true",
                for src in preload {
                    img { key: "{src}", src: "{src}", alt: "" }
                }
            }
        }
    }
}
