//! Gallery page body - pure rendering, no data fetching
//!
//! Accepts `ReadStore<GalleryState>` and reads the fields it needs through
//! lenses.

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::ImageIcon;
use crate::components::image_gallery::ImageGallery;
use crate::stores::gallery::{GalleryState, GalleryStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn GalleryView(
    state: ReadStore<GalleryState>,
    on_load_more: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    let images = state.images().read().clone();
    let has_more = *state.has_more().read();
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let failed = error.is_some();
    let data_length = images.len();

    rsx! {
        div { class: "container mx-auto px-4 py-8",
            if let Some(message) = error {
                ErrorDisplay { message }
                button {
                    class: "mb-6 text-sm text-sky-400 hover:text-sky-300",
                    onclick: move |_| on_retry.call(()),
                    "Try again"
                }
            }
            if images.is_empty() {
                if loading {
                    LoadingSpinner { message: "Loading gallery...".to_string() }
                } else if !has_more {
                    div { class: "text-center py-16 text-gray-400",
                        ImageIcon { class: "w-16 h-16 mx-auto mb-4" }
                        p { "No images yet" }
                    }
                }
            } else {
                ImageGallery {
                    data_length,
                    images,
                    has_more,
                    failed,
                    next: on_load_more,
                    end_message: rsx! {
                        p { class: "text-center text-sm text-gray-500 py-8", "That's everything." }
                    },
                }
            }
        }
    }
}
