//! mosaic-web - Browser gallery
//!
//! Serves the fixture image set through the paged gallery. Settings come
//! from the embedded `gallery.yaml`; a rejected file falls back to defaults.

mod demo_source;
mod pages;

use dioxus::prelude::*;
use mosaic_core::{ConfigError, GalleryConfig};
use pages::GalleryPage;
use tracing::{error, info};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Embedded settings (compiled into the binary)
const CONFIG_YAML: &str = include_str!("../gallery.yaml");

fn load_config() -> Result<GalleryConfig, ConfigError> {
    GalleryConfig::from_yaml_str(CONFIG_YAML)
}

fn configure_logging(level: tracing::Level) {
    // Only fails when a subscriber is already installed
    let _ = dioxus::logger::init(level);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Mosaic" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900", GalleryPage {} }
    }
}

fn main() {
    let loaded = load_config();
    configure_logging(
        loaded
            .as_ref()
            .map_or(tracing::Level::INFO, GalleryConfig::tracing_level),
    );

    let config = loaded.unwrap_or_else(|e| {
        error!("gallery.yaml rejected, using defaults: {e}");
        GalleryConfig::default()
    });
    info!(
        "mosaic-web starting (playback {}ms/{}ms)",
        config.lightbox.playback.normal_ms, config.lightbox.playback.fast_ms
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
