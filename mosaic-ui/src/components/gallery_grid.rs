//! Masonry thumbnail grid
//!
//! Column count follows the container width through the configured
//! breakpoints. Each image goes to the currently shortest column, so the
//! columns stay balanced however tall individual thumbnails are.

use crate::components::lazy_image::LazyImage;
use crate::wasm_utils::ElementResizeObserver;
use dioxus::prelude::*;
use mosaic_core::layout::column_width;
use mosaic_core::{GridConfig, ImageDescriptor, MasonryLayout};

/// Width assumed until the container has been measured
const INITIAL_CONTAINER_WIDTH: f64 = 1024.0;

#[component]
pub fn GalleryGrid(
    images: Vec<ImageDescriptor>,
    /// Called with the position of the clicked thumbnail in `images`
    on_open: EventHandler<usize>,
    #[props(default)] config: GridConfig,
) -> Element {
    let mut container_width = use_signal(|| INITIAL_CONTAINER_WIDTH);
    let mut observer: Signal<Option<ElementResizeObserver>> = use_signal(|| None);

    let gutter = config.gutter_px;
    let columns = config.breakpoints.columns_for(container_width());
    let cell_width = column_width(container_width(), columns, gutter);
    let layout = MasonryLayout::pack(
        images.iter().map(|image| image.thumbnail_aspect_ratio()),
        columns,
        cell_width,
        gutter,
    );

    rsx! {
        div {
            class: "flex w-full items-start",
            style: "gap: {gutter}px;",
            onmounted: move |evt| {
                let data = evt.data();
                if let Some(element) = data.downcast::<web_sys::Element>() {
                    let resize = ElementResizeObserver::new(element, move |width| {
                        if (container_width() - width).abs() > 1.0 {
                            container_width.set(width);
                        }
                    });
                    observer.set(resize);
                }
                spawn(async move {
                    if let Ok(rect) = data.get_client_rect().await {
                        container_width.set(rect.width());
                    }
                });
            },
            for (column , indices) in layout.columns().iter().enumerate() {
                div {
                    key: "column-{column}",
                    class: "flex flex-col min-w-0",
                    style: "width: {cell_width}px; gap: {gutter}px;",
                    for index in indices.iter().copied() {
                        GalleryCell {
                            key: "{images[index].id}",
                            image: images[index].clone(),
                            index,
                            width: cell_width,
                            fade_ms: config.fade_ms,
                            on_open,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryCell(
    image: ImageDescriptor,
    index: usize,
    width: f64,
    fade_ms: u32,
    on_open: EventHandler<usize>,
) -> Element {
    let height = image.thumbnail_height_for(width);
    let position = index + 1;
    let alt = if image.title.is_empty() {
        image.description.clone()
    } else {
        image.title.clone()
    };

    rsx! {
        button {
            id: "{image.html_id}",
            class: "block p-0 border-0 bg-transparent cursor-zoom-in rounded overflow-hidden focus:outline-none focus-visible:ring-2 focus-visible:ring-sky-500",
            "aria-label": "Open image {position}",
            onclick: move |_| on_open.call(index),
            LazyImage {
                src: image.thumbnail.clone(),
                placeholder: image.lazy_src.clone(),
                alt,
                width,
                height,
                fade_ms,
            }
        }
    }
}
