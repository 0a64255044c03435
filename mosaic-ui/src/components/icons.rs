//! Lucide icons (https://lucide.dev) used by the gallery chrome
//!
//! Icons stroke with `currentColor` so they pick up the surrounding text
//! color. Default size is w-5 h-5; override with `class`.

use dioxus::prelude::*;

/// Shared 24x24 stroked frame every icon draws into
fn lucide(class: &'static str, stroke_width: &'static str, body: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {body}
        }
    }
}

/// Play (playback off, press to start)
#[component]
pub fn PlayIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" }
        },
    )
}

/// Fast forward (normal playback, press to speed up)
#[component]
pub fn FastForwardIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            polygon { points: "13 19 22 12 13 5 13 19" }
            polygon { points: "2 19 11 12 2 5 2 19" }
        },
    )
}

/// Pause (fast playback, press to stop)
#[component]
pub fn PauseIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            rect { x: "14", y: "3", width: "5", height: "18", rx: "1" }
            rect { x: "5", y: "3", width: "5", height: "18", rx: "1" }
        },
    )
}

#[component]
pub fn XIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
    )
}

#[component]
pub fn ChevronLeftIcon(
    #[props(default = "w-5 h-5")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    lucide(class, stroke_width, rsx! { path { d: "m15 18-6-6 6-6" } })
}

#[component]
pub fn ChevronRightIcon(
    #[props(default = "w-5 h-5")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    lucide(class, stroke_width, rsx! { path { d: "m9 18 6-6-6-6" } })
}

/// Info (caption toggle)
#[component]
pub fn InfoIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        },
    )
}

/// Download icon (arrow into tray)
#[component]
pub fn DownloadIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
            path { d: "m7 10 5 5 5-5" }
            path { d: "M12 15V3" }
        },
    )
}

#[component]
pub fn ExternalLinkIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        },
    )
}

#[component]
pub fn ZoomInIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.35-4.35" }
            path { d: "M11 8v6" }
            path { d: "M8 11h6" }
        },
    )
}

#[component]
pub fn ZoomOutIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.35-4.35" }
            path { d: "M8 11h6" }
        },
    )
}

#[component]
pub fn MaximizeIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M8 3H5a2 2 0 0 0-2 2v3" }
            path { d: "M21 8V5a2 2 0 0 0-2-2h-3" }
            path { d: "M3 16v3a2 2 0 0 0 2 2h3" }
            path { d: "M16 21h3a2 2 0 0 0 2-2v-3" }
        },
    )
}

#[component]
pub fn MinimizeIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            path { d: "M8 3v3a2 2 0 0 1-2 2H3" }
            path { d: "M21 8h-3a2 2 0 0 1-2-2V3" }
            path { d: "M3 16h3a2 2 0 0 1 2 2v3" }
            path { d: "M16 21v-3a2 2 0 0 1 2-2h3" }
        },
    )
}

/// Picture placeholder (empty gallery, failed thumbnail)
#[component]
pub fn ImageIcon(#[props(default = "w-5 h-5")] class: &'static str) -> Element {
    lucide(
        class,
        "2",
        rsx! {
            rect { x: "3", y: "3", width: "18", height: "18", rx: "2", ry: "2" }
            circle { cx: "9", cy: "9", r: "2" }
            path { d: "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21" }
        },
    )
}
