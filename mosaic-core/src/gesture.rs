//! Swipe detection for slide navigation

/// Minimum horizontal travel, in pixels, for a drag to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger/pointer moved left: show the next slide
    Next,
    /// Moved right: show the previous slide
    Previous,
}

/// A pointer drag in progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeGesture {
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
}

impl SwipeGesture {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
        }
    }

    /// Record a pointer move and return the delta since the previous one
    pub fn move_to(&mut self, x: f64, y: f64) -> (f64, f64) {
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        delta
    }

    /// Straight-line distance travelled since the drag started
    pub fn distance(&self) -> f64 {
        (self.last_x - self.start_x).hypot(self.last_y - self.start_y)
    }

    /// Classify the finished drag. Mostly-vertical or short drags are not
    /// swipes.
    pub fn finish(&self) -> Option<SwipeDirection> {
        let dx = self.last_x - self.start_x;
        let dy = self.last_y - self.start_y;
        if dx.abs() < SWIPE_THRESHOLD_PX || dx.abs() <= dy.abs() {
            return None;
        }
        if dx < 0.0 {
            Some(SwipeDirection::Next)
        } else {
            Some(SwipeDirection::Previous)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_drag_is_next() {
        let mut gesture = SwipeGesture::start(400.0, 300.0);
        gesture.move_to(380.0, 305.0);
        gesture.move_to(300.0, 310.0);
        assert_eq!(gesture.finish(), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_right_drag_is_previous() {
        let mut gesture = SwipeGesture::start(100.0, 300.0);
        gesture.move_to(200.0, 300.0);
        assert_eq!(gesture.finish(), Some(SwipeDirection::Previous));
    }

    #[test]
    fn test_short_or_vertical_drag_is_ignored() {
        let mut short = SwipeGesture::start(100.0, 100.0);
        short.move_to(130.0, 100.0);
        assert_eq!(short.finish(), None);

        let mut vertical = SwipeGesture::start(100.0, 100.0);
        vertical.move_to(170.0, 300.0);
        assert_eq!(vertical.finish(), None);
    }

    #[test]
    fn test_move_reports_incremental_delta() {
        let mut gesture = SwipeGesture::start(0.0, 0.0);
        assert_eq!(gesture.move_to(10.0, 5.0), (10.0, 5.0));
        assert_eq!(gesture.move_to(15.0, 5.0), (5.0, 0.0));
    }

    #[test]
    fn test_distance() {
        let mut gesture = SwipeGesture::start(0.0, 0.0);
        gesture.move_to(3.0, 4.0);
        assert_eq!(gesture.distance(), 5.0);
    }
}
