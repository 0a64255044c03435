//! The gallery: lightbox, infinite scroll container and masonry grid
//!
//! Settings come from a `GalleryConfig` context when the app provides one,
//! defaults otherwise.

use crate::components::gallery_grid::GalleryGrid;
use crate::components::helpers::LoadingSpinner;
use crate::components::infinite_scroll::InfiniteScroll;
use crate::components::lightbox::{use_lightbox, Lightbox};
use dioxus::prelude::*;
use mosaic_core::{GalleryConfig, ImageDescriptor};

#[component]
pub fn ImageGallery(
    /// Everything loaded so far, in display order
    images: Vec<ImageDescriptor>,
    /// Request the next page
    next: EventHandler<()>,
    has_more: bool,
    /// Item count the scroll trigger compares against; usually `images.len()`
    data_length: usize,
    /// The last page request failed; pauses the scroll trigger
    #[props(default)]
    failed: bool,
    #[props(default = rsx! { LoadingSpinner {} })] loader: Element,
    #[props(default = VNode::empty())] end_message: Element,
) -> Element {
    let config = try_use_context::<GalleryConfig>().unwrap_or_default();
    let actions = use_lightbox(config.lightbox.clone());

    let lightbox_images = images.clone();
    let on_open = {
        let images = images.clone();
        move |index: usize| {
            actions.open(index, &images);
        }
    };
    let threshold = config.grid.scroll_threshold;

    rsx! {
        Lightbox { actions, images: lightbox_images }
        InfiniteScroll {
            data_length,
            has_more,
            next,
            threshold,
            failed,
            loader,
            end_message,
            GalleryGrid { images, on_open, config: config.grid }
        }
    }
}
