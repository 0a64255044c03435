use crate::demo_source;
use dioxus::prelude::*;
use mosaic_ui::stores::{GalleryState, GalleryStateStoreExt};
use mosaic_ui::GalleryView;
use tracing::warn;

#[component]
pub fn GalleryPage() -> Element {
    let mut state = use_store(|| GalleryState {
        has_more: true,
        ..Default::default()
    });
    let mut next_page = use_signal(|| 0usize);

    let mut load_page = move |_: ()| {
        if *state.loading().read() || !*state.has_more().read() {
            return;
        }
        state.loading().set(true);
        state.error().set(None);
        let index = next_page();

        spawn(async move {
            match demo_source::fetch_page(index).await {
                Ok(page) => {
                    state.images().write().extend(page.images);
                    state.has_more().set(page.has_more);
                    next_page.set(index + 1);
                }
                Err(e) => {
                    warn!("Failed to load page {index}: {e}");
                    state.error().set(Some(e.to_string()));
                }
            }
            state.loading().set(false);
        });
    };

    use_hook(move || load_page(()));

    rsx! {
        header { class: "container mx-auto px-4 pt-8",
            h1 { class: "text-3xl font-bold text-white", "Mosaic" }
            p { class: "text-gray-400 mt-1", "Scroll for more. Click any image to open it." }
        }
        GalleryView {
            state,
            on_load_more: load_page,
            on_retry: load_page,
        }
    }
}
