use thiserror::Error;

/// Lightbox controller failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Lightbox anchor is not mounted")]
    AnchorUnavailable,
    #[error("Image index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}
