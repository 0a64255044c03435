//! Gallery page state store

use dioxus::prelude::*;
use mosaic_core::ImageDescriptor;

/// State for a paged gallery
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryState {
    /// Images loaded so far, in display order
    pub images: Vec<ImageDescriptor>,
    /// Whether another page can be requested
    pub has_more: bool,
    /// Whether a page request is in flight
    pub loading: bool,
    /// Error message if the last page failed
    pub error: Option<String>,
}
