//! Image descriptors supplied by the caller

use crate::external_link::ExternalLink;
use serde::{Deserialize, Serialize};

/// An alternate rendition of the full-size image
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub src: String,
    pub w: u32,
    pub h: u32,
}

/// One displayable image.
///
/// Immutable once handed to the gallery; the gallery and lightbox only ever
/// clone descriptors, never edit them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub id: u64,
    /// Full-resolution source
    pub src: String,
    /// Thumbnail shown in the grid
    pub thumbnail: String,
    /// Blurred low-resolution stand-in shown until the thumbnail loads
    pub lazy_src: String,
    #[serde(default)]
    pub w: u32,
    #[serde(default)]
    pub h: u32,
    #[serde(default)]
    pub thumbnail_w: u32,
    #[serde(default)]
    pub thumbnail_h: u32,
    /// Caption body
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub external_link: Option<String>,
    /// DOM id of the grid cell, used to scroll the page back to the image
    pub html_id: String,
    /// Medium rendition (`m`)
    #[serde(default, rename = "m")]
    pub medium: Option<ImageVariant>,
    /// Original rendition (`o`)
    #[serde(default, rename = "o")]
    pub original: Option<ImageVariant>,
}

impl ImageDescriptor {
    /// Thumbnail height divided by width. Missing or zero dimensions count as
    /// a square so layout never divides by zero.
    pub fn thumbnail_aspect_ratio(&self) -> f64 {
        aspect_ratio(self.thumbnail_w, self.thumbnail_h)
    }

    /// Height of the thumbnail when rendered `column_width` pixels wide
    pub fn thumbnail_height_for(&self, column_width: f64) -> f64 {
        column_width * self.thumbnail_aspect_ratio()
    }

    /// Pixel size of the full image, falling back to the thumbnail size and
    /// finally to a 1x1 square when the caller left dimensions empty
    pub fn full_size(&self) -> (u32, u32) {
        if self.w > 0 && self.h > 0 {
            (self.w, self.h)
        } else if self.thumbnail_w > 0 && self.thumbnail_h > 0 {
            (self.thumbnail_w, self.thumbnail_h)
        } else {
            (1, 1)
        }
    }

    /// Pick the rendition to show in the lightbox.
    ///
    /// Chooses the narrowest variant that still covers the viewport in device
    /// pixels; otherwise the widest one available, then the plain `src`.
    pub fn source_for_viewport(
        &self,
        viewport_width: f64,
        device_pixel_ratio: f64,
    ) -> (&str, u32, u32) {
        let needed = viewport_width * device_pixel_ratio.max(1.0);
        let mut variants: Vec<&ImageVariant> = [self.medium.as_ref(), self.original.as_ref()]
            .into_iter()
            .flatten()
            .collect();
        if variants.is_empty() {
            let (w, h) = self.full_size();
            return (&self.src, w, h);
        }
        variants.sort_by_key(|v| v.w);

        let chosen = variants
            .iter()
            .find(|v| v.w as f64 >= needed)
            .or_else(|| variants.last())
            .copied();

        match chosen {
            Some(v) => (&v.src, v.w, v.h),
            None => {
                let (w, h) = self.full_size();
                (&self.src, w, h)
            }
        }
    }

    /// The external link, when present and safe to open
    pub fn external_link(&self) -> Option<ExternalLink> {
        self.external_link.as_deref().and_then(ExternalLink::parse)
    }

    /// Link for saving the full image: the original rendition when there is
    /// one, else `src`. Same http/https rule and opener isolation as
    /// [`external_link`](Self::external_link).
    pub fn download_link(&self) -> Option<ExternalLink> {
        let src = self
            .original
            .as_ref()
            .map_or(self.src.as_str(), |v| v.src.as_str());
        ExternalLink::parse(src)
    }
}

/// Height/width ratio with a 1:1 fallback for zero dimensions
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    if width == 0 || height == 0 {
        1.0
    } else {
        height as f64 / width as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(thumbnail_w: u32, thumbnail_h: u32) -> ImageDescriptor {
        ImageDescriptor {
            id: 1,
            src: "full.jpg".into(),
            thumbnail: "thumb.jpg".into(),
            lazy_src: "blur.jpg".into(),
            w: 0,
            h: 0,
            thumbnail_w,
            thumbnail_h,
            description: String::new(),
            title: String::new(),
            author: String::new(),
            external_link: None,
            html_id: "img-1".into(),
            medium: None,
            original: None,
        }
    }

    #[test]
    fn test_zero_thumbnail_width_is_square() {
        let d = descriptor(0, 300);
        assert_eq!(d.thumbnail_aspect_ratio(), 1.0);
        assert_eq!(d.thumbnail_height_for(240.0), 240.0);
    }

    #[test]
    fn test_thumbnail_height_scales_with_column() {
        let d = descriptor(400, 600);
        assert_eq!(d.thumbnail_height_for(200.0), 300.0);
    }

    #[test]
    fn test_full_size_falls_back_to_thumbnail() {
        let d = descriptor(400, 600);
        assert_eq!(d.full_size(), (400, 600));
        assert_eq!(descriptor(0, 0).full_size(), (1, 1));
    }

    #[test]
    fn test_source_for_viewport_prefers_smallest_covering_variant() {
        let mut d = descriptor(400, 600);
        d.medium = Some(ImageVariant {
            src: "m.jpg".into(),
            w: 1024,
            h: 768,
        });
        d.original = Some(ImageVariant {
            src: "o.jpg".into(),
            w: 4096,
            h: 3072,
        });

        assert_eq!(d.source_for_viewport(800.0, 1.0).0, "m.jpg");
        assert_eq!(d.source_for_viewport(800.0, 2.0).0, "o.jpg");
        assert_eq!(d.source_for_viewport(8000.0, 1.0).0, "o.jpg");
    }

    #[test]
    fn test_source_for_viewport_without_variants_uses_src() {
        let d = descriptor(400, 600);
        assert_eq!(d.source_for_viewport(1200.0, 1.0), ("full.jpg", 400, 600));
    }

    #[test]
    fn test_download_link_prefers_original() {
        let mut d = descriptor(400, 600);
        // Relative sources are not offered for download
        assert!(d.download_link().is_none());

        d.src = "https://img.example.com/full.jpg".into();
        assert_eq!(
            d.download_link().map(|l| l.href().to_string()),
            Some("https://img.example.com/full.jpg".to_string())
        );

        d.original = Some(ImageVariant {
            src: "https://img.example.com/o.jpg".into(),
            w: 4096,
            h: 3072,
        });
        let link = d.download_link().unwrap();
        assert_eq!(link.href(), "https://img.example.com/o.jpg");
        assert_eq!(link.rel(), "noopener noreferrer");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 7,
            "src": "a.jpg",
            "thumbnail": "a_t.jpg",
            "lazySrc": "a_l.jpg",
            "thumbnailW": 300,
            "thumbnailH": 200,
            "htmlId": "image-7",
            "externalLink": "https://example.com/post/7",
            "m": { "src": "a_m.jpg", "w": 1024, "h": 683 }
        }"#;
        let d: ImageDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(d.thumbnail_w, 300);
        assert_eq!(d.html_id, "image-7");
        assert_eq!(d.medium.as_ref().map(|m| m.w), Some(1024));
        assert!(d.external_link().is_some());
    }
}
