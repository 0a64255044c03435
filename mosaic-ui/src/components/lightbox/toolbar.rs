//! Top bar: counter on the left, actions on the right

use super::{LightboxActions, LIGHTBOX_ROOT_ID};
use crate::browser;
use crate::components::icons::{
    DownloadIcon, ExternalLinkIcon, FastForwardIcon, InfoIcon, MaximizeIcon, MinimizeIcon, PauseIcon, PlayIcon,
    XIcon, ZoomInIcon, ZoomOutIcon,
};
use dioxus::prelude::*;
use mosaic_core::{ExternalLink, PlaybackMode};

const BUTTON_CLASS: &str =
    "w-10 h-10 flex items-center justify-center rounded text-gray-300 hover:text-white hover:bg-white/10 transition-colors";

#[component]
pub(super) fn LightboxToolbar(
    actions: LightboxActions,
    counter: String,
    playback: PlaybackMode,
    is_fullscreen: bool,
    is_zoomed: bool,
    external_link: Option<ExternalLink>,
    download_link: Option<ExternalLink>,
) -> Element {
    rsx! {
        div { class: "mosaic-toolbar relative z-20 flex items-center justify-between h-12 px-3 bg-gradient-to-b from-black/60 to-transparent",
            span { class: "text-sm tabular-nums text-gray-300", "{counter}" }
            div { class: "flex items-center gap-1",
                if let Some(link) = external_link {
                    a {
                        class: BUTTON_CLASS,
                        title: "Open source page",
                        href: "{link.href()}",
                        target: link.target(),
                        rel: link.rel(),
                        onclick: move |e| e.stop_propagation(),
                        ExternalLinkIcon {}
                    }
                }
                if let Some(link) = download_link {
                    a {
                        class: BUTTON_CLASS,
                        title: "Download image",
                        href: "{link.href()}",
                        download: "",
                        target: link.target(),
                        rel: link.rel(),
                        onclick: move |e| e.stop_propagation(),
                        DownloadIcon {}
                    }
                }
                button {
                    class: BUTTON_CLASS,
                    title: "Toggle caption",
                    onclick: move |e| {
                        e.stop_propagation();
                        actions.toggle_caption();
                    },
                    InfoIcon {}
                }
                button {
                    class: BUTTON_CLASS,
                    title: if is_zoomed { "Zoom out" } else { "Zoom in" },
                    onclick: move |e| {
                        e.stop_propagation();
                        actions.toggle_zoom();
                    },
                    if is_zoomed {
                        ZoomOutIcon {}
                    } else {
                        ZoomInIcon {}
                    }
                }
                button {
                    class: BUTTON_CLASS,
                    title: if is_fullscreen { "Exit fullscreen" } else { "Fullscreen" },
                    onclick: move |e| {
                        e.stop_propagation();
                        browser::toggle_fullscreen(LIGHTBOX_ROOT_ID);
                    },
                    if is_fullscreen {
                        MinimizeIcon {}
                    } else {
                        MaximizeIcon {}
                    }
                }
                button {
                    class: BUTTON_CLASS,
                    title: playback.label(),
                    "data-playback": "{playback:?}",
                    onclick: move |e| {
                        e.stop_propagation();
                        actions.cycle_playback();
                    },
                    // The icon shows what the next press does
                    match playback {
                        PlaybackMode::Off => rsx! { PlayIcon {} },
                        PlaybackMode::Normal => rsx! { FastForwardIcon {} },
                        PlaybackMode::Fast => rsx! { PauseIcon {} },
                    }
                }
                button {
                    class: BUTTON_CLASS,
                    title: "Close",
                    onclick: move |e| {
                        e.stop_propagation();
                        actions.close();
                    },
                    XIcon { class: "w-6 h-6" }
                }
            }
        }
    }
}
