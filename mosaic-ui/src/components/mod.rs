//! Gallery components

pub mod gallery_grid;
pub mod gallery_view;
pub mod helpers;
pub mod icons;
pub mod image_gallery;
pub mod infinite_scroll;
pub mod lazy_image;
pub mod lightbox;

pub use gallery_grid::GalleryGrid;
pub use gallery_view::GalleryView;
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use image_gallery::ImageGallery;
pub use infinite_scroll::InfiniteScroll;
pub use lazy_image::LazyImage;
pub use lightbox::{use_lightbox, GalleryLightbox, Lightbox, LightboxActions, LIGHTBOX_ROOT_ID};
