//! Keeping the grid scrolled to the slide the lightbox is showing

/// Bounding box of the target element, relative to the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

/// Document scroll position that puts the element's centre at the middle of
/// the viewport, shifted by `offset` pixels. Never negative.
pub fn centered_scroll_top(
    rect: ElementRect,
    page_y_offset: f64,
    viewport_height: f64,
    offset: f64,
) -> f64 {
    let absolute_center = rect.top + rect.height / 2.0 + page_y_offset;
    (absolute_center - viewport_height / 2.0 + offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_element() {
        // Element at 1500-1700 in document coordinates, viewport 800 tall
        let rect = ElementRect {
            top: 500.0,
            height: 200.0,
        };
        assert_eq!(centered_scroll_top(rect, 1000.0, 800.0, 0.0), 1200.0);
    }

    #[test]
    fn test_applies_offset() {
        let rect = ElementRect {
            top: 500.0,
            height: 200.0,
        };
        assert_eq!(centered_scroll_top(rect, 1000.0, 800.0, -64.0), 1136.0);
    }

    #[test]
    fn test_clamps_at_top_of_page() {
        let rect = ElementRect {
            top: 10.0,
            height: 100.0,
        };
        assert_eq!(centered_scroll_top(rect, 0.0, 800.0, 0.0), 0.0);
    }
}
