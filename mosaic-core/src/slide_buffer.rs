//! The lightbox's own copy of the image sequence
//!
//! Seeded from the caller's sequence when the overlay opens. While open, only
//! the controller mutates it, and only by appending the caller's new tail, so
//! positions already shown stay valid.

use crate::descriptor::ImageDescriptor;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideBuffer {
    items: Vec<ImageDescriptor>,
    /// Bumped on every append so views know to refresh
    revision: u64,
}

impl SlideBuffer {
    pub fn from_sequence(images: &[ImageDescriptor]) -> Self {
        Self {
            items: images.to_vec(),
            revision: 0,
        }
    }

    /// Append the part of `images` beyond what the buffer already holds.
    ///
    /// The caller's sequence is append-only, so the first `len()` entries are
    /// assumed to match. Returns the number of items appended.
    pub(crate) fn extend_from_tail(&mut self, images: &[ImageDescriptor]) -> usize {
        if images.len() <= self.items.len() {
            return 0;
        }
        let added = images.len() - self.items.len();
        self.items.extend_from_slice(&images[self.items.len()..]);
        self.revision += 1;
        added
    }

    pub fn get(&self, index: usize) -> Option<&ImageDescriptor> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDescriptor> {
        self.items.iter()
    }

    /// Indices to preload around `index`: up to `before` slides behind and
    /// `after` ahead, clamped to the buffer, nearest first
    pub fn preload_indices(&self, index: usize, before: usize, after: usize) -> Vec<usize> {
        let len = self.items.len();
        if index >= len {
            return Vec::new();
        }
        let before = before.min(index);
        let after = after.min(len - 1 - index);
        let mut indices = Vec::with_capacity(before + after);
        for step in 1..=before.max(after) {
            if step <= after {
                indices.push(index + step);
            }
            if step <= before {
                indices.push(index - step);
            }
        }
        indices
    }
}
