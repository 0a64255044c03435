//! Thumbnail with a blurred placeholder
//!
//! The low-resolution `placeholder` paints immediately under a blur. The real
//! thumbnail uses native lazy loading and fades in over it once decoded; if
//! it fails the placeholder stays, with an icon on top.

use crate::components::icons::ImageIcon;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn LazyImage(
    src: String,
    placeholder: String,
    #[props(default)] alt: String,
    /// Rendered width in CSS pixels
    width: f64,
    /// Rendered height in CSS pixels
    height: f64,
    #[props(default = 300)] fade_ms: u32,
) -> Element {
    let mut loaded = use_signal(|| false);
    let mut failed = use_signal(|| false);
    let mut last_src = use_signal(|| src.clone());

    // Recycled cell: a new source starts from the placeholder again
    if *last_src.read() != src {
        last_src.set(src.clone());
        loaded.set(false);
        failed.set(false);
    }

    let is_loaded = loaded();
    let placeholder_style = format!(
        "filter: blur({}px); transform: scale(1.05); transition: filter {fade_ms}ms ease-out;",
        if is_loaded { 0 } else { 12 }
    );
    let image_style = format!(
        "opacity: {}; transition: opacity {fade_ms}ms ease-out;",
        if is_loaded { 1 } else { 0 }
    );

    rsx! {
        span {
            class: "relative block overflow-hidden bg-gray-800",
            style: "width: {width}px; height: {height}px;",
            img {
                class: "absolute inset-0 w-full h-full object-cover",
                style: "{placeholder_style}",
                src: "{placeholder}",
                alt: "",
                "aria-hidden": "true",
            }
            if failed() {
                span { class: "absolute inset-0 flex items-center justify-center text-gray-500",
                    ImageIcon { class: "w-8 h-8" }
                }
            } else {
                img {
                    class: "absolute inset-0 w-full h-full object-cover",
                    style: "{image_style}",
                    src: "{src}",
                    alt: "{alt}",
                    "loading": "lazy",
                    "decoding": "async",
                    onload: move |_| loaded.set(true),
                    onerror: {
                        let src = src.clone();
                        move |_| {
                            debug!("Thumbnail failed to load: {src}");
                            failed.set(true);
                        }
                    },
                }
            }
        }
    }
}
