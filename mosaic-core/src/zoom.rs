//! Zoom and pan for the lightbox slide
//!
//! Scale is relative to the fitted size: 1.0 shows the whole image inside the
//! viewport. Pan offsets are clamped so a zoomed image never uncovers the
//! viewport edge it is larger than.

/// Wheel zoom step, matching the usual 25% per notch
pub const WHEEL_ZOOM_STEP: f64 = 1.25;

/// Fitted image and viewport sizes used to clamp panning
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomBounds {
    pub fitted_width: f64,
    pub fitted_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl ZoomBounds {
    pub fn new(image: (u32, u32), viewport: (f64, f64)) -> Self {
        let (fitted_width, fitted_height) = fit_size(image, viewport);
        Self {
            fitted_width,
            fitted_height,
            viewport_width: viewport.0,
            viewport_height: viewport.1,
        }
    }

    fn max_pan(&self, scale: f64) -> (f64, f64) {
        (
            ((self.fitted_width * scale - self.viewport_width) / 2.0).max(0.0),
            ((self.fitted_height * scale - self.viewport_height) / 2.0).max(0.0),
        )
    }
}

/// Size of `image` scaled down to fit `viewport`. Never upscales past the
/// natural size.
pub fn fit_size(image: (u32, u32), viewport: (f64, f64)) -> (f64, f64) {
    let (w, h) = (image.0.max(1) as f64, image.1.max(1) as f64);
    let (vw, vh) = (viewport.0.max(0.0), viewport.1.max(0.0));
    let ratio = (vw / w).min(vh / h).min(1.0);
    (w * ratio, h * ratio)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    scale: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ZoomState {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0 + f64::EPSILON
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Double-click / zoom button: fit <-> `zoom_level`
    pub fn toggle(&mut self, zoom_level: f64, bounds: &ZoomBounds) {
        if self.is_zoomed() {
            self.reset();
        } else {
            self.scale = zoom_level.max(1.0);
            self.clamp_pan(bounds);
        }
    }

    /// Multiply the scale by `factor`, clamped to `[1, max_zoom]`
    pub fn zoom_by(&mut self, factor: f64, max_zoom: f64, bounds: &ZoomBounds) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale = (self.scale * factor).clamp(1.0, max_zoom.max(1.0));
        if self.is_zoomed() {
            self.clamp_pan(bounds);
        } else {
            self.reset();
        }
    }

    /// Drag while zoomed. Does nothing at fit scale.
    pub fn pan_by(&mut self, dx: f64, dy: f64, bounds: &ZoomBounds) {
        if !self.is_zoomed() {
            return;
        }
        self.pan_x += dx;
        self.pan_y += dy;
        self.clamp_pan(bounds);
    }

    fn clamp_pan(&mut self, bounds: &ZoomBounds) {
        let (max_x, max_y) = bounds.max_pan(self.scale);
        self.pan_x = self.pan_x.clamp(-max_x, max_x);
        self.pan_y = self.pan_y.clamp(-max_y, max_y);
    }

    /// CSS `transform` value for the slide image
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) scale({:.3})",
            self.pan_x, self.pan_y, self.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ZoomBounds {
        // 2000x1000 image in a 1000x800 viewport fits to 1000x500
        ZoomBounds::new((2000, 1000), (1000.0, 800.0))
    }

    #[test]
    fn test_fit_size_never_upscales() {
        assert_eq!(fit_size((400, 300), (1000.0, 800.0)), (400.0, 300.0));
        assert_eq!(fit_size((2000, 1000), (1000.0, 800.0)), (1000.0, 500.0));
        assert_eq!(fit_size((0, 0), (1000.0, 800.0)), (1.0, 1.0));
    }

    #[test]
    fn test_toggle_between_fit_and_zoom() {
        let mut zoom = ZoomState::default();
        zoom.toggle(2.0, &bounds());
        assert_eq!(zoom.scale(), 2.0);
        zoom.toggle(2.0, &bounds());
        assert_eq!(zoom, ZoomState::default());
    }

    #[test]
    fn test_zoom_by_clamps() {
        let mut zoom = ZoomState::default();
        for _ in 0..20 {
            zoom.zoom_by(WHEEL_ZOOM_STEP, 4.0, &bounds());
        }
        assert_eq!(zoom.scale(), 4.0);
        for _ in 0..20 {
            zoom.zoom_by(1.0 / WHEEL_ZOOM_STEP, 4.0, &bounds());
        }
        assert!(!zoom.is_zoomed());
        assert_eq!(zoom.pan(), (0.0, 0.0));
    }

    #[test]
    fn test_pan_is_clamped_to_image_edges() {
        let mut zoom = ZoomState::default();
        zoom.toggle(2.0, &bounds());
        // Scaled image is 2000x1000 in a 1000x800 viewport: 500 / 100 of slack
        zoom.pan_by(10_000.0, -10_000.0, &bounds());
        assert_eq!(zoom.pan(), (500.0, -100.0));
    }

    #[test]
    fn test_pan_ignored_at_fit() {
        let mut zoom = ZoomState::default();
        zoom.pan_by(50.0, 50.0, &bounds());
        assert_eq!(zoom.pan(), (0.0, 0.0));
    }

    #[test]
    fn test_zoom_out_reclamps_pan() {
        let mut zoom = ZoomState::default();
        zoom.zoom_by(4.0, 4.0, &bounds());
        zoom.pan_by(1500.0, 0.0, &bounds());
        assert_eq!(zoom.pan(), (1500.0, 0.0));
        zoom.zoom_by(0.5, 4.0, &bounds());
        assert_eq!(zoom.pan(), (500.0, 0.0));
    }
}
