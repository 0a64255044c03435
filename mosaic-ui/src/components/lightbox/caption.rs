//! Caption panel
//!
//! Collapsed it shows the title and one line of description. Clicking it (or
//! the info button) expands it; clicking the image area collapses it again.

use super::LightboxActions;
use dioxus::prelude::*;
use mosaic_core::ImageDescriptor;

#[component]
pub(super) fn LightboxCaption(
    actions: LightboxActions,
    item: ImageDescriptor,
    expanded: bool,
) -> Element {
    if item.title.is_empty() && item.description.is_empty() && item.author.is_empty() {
        return rsx! {};
    }

    let state_class = if expanded {
        "expanded max-h-[50vh] overflow-y-auto"
    } else {
        "max-h-20 overflow-hidden"
    };
    let description_class = if expanded {
        "mt-1 text-sm text-gray-300 whitespace-pre-line"
    } else {
        "mt-1 text-sm text-gray-300 truncate"
    };

    rsx! {
        div {
            class: "mosaic-caption relative z-20 px-6 py-3 bg-black/70 cursor-pointer {state_class}",
            "aria-expanded": "{expanded}",
            onclick: move |e| {
                e.stop_propagation();
                actions.toggle_caption();
            },
            if !item.title.is_empty() {
                h2 { class: "text-base font-medium text-white", "{item.title}" }
            }
            if !item.author.is_empty() {
                p { class: "text-xs text-gray-400", "by {item.author}" }
            }
            if !item.description.is_empty() {
                p { class: description_class, "{item.description}" }
            }
        }
    }
}
