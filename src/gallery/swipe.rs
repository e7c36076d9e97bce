// SPDX-License-Identifier: MPL-2.0
//! Touch swipe recognition.

use super::Direction;

/// Tracks one touch gesture at a time and classifies it on release.
///
/// Only the first finger of a gesture counts; extra fingers are ignored
/// until it is lifted.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    active: Option<(u64, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            active: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Finger `finger` touched down at horizontal position `x`.
    pub fn begin(&mut self, finger: u64, x: f32) {
        if self.active.is_none() {
            self.active = Some((finger, x));
        }
    }

    /// Finger `finger` lifted at `x`. Returns the navigation it asks for, if any.
    pub fn end(&mut self, finger: u64, x: f32) -> Option<Direction> {
        match self.active {
            Some((id, start_x)) if id == finger => {
                self.active = None;
                classify(start_x - x, self.threshold)
            }
            _ => None,
        }
    }

    /// The platform lost track of `finger`; the gesture is dropped.
    pub fn cancel(&mut self, finger: u64) {
        if matches!(self.active, Some((id, _)) if id == finger) {
            self.active = None;
        }
    }
}

/// Maps a horizontal displacement (`start_x - end_x`) to a direction.
///
/// Displacements whose magnitude does not exceed `threshold` are taps, not
/// swipes. Dragging right-to-left (positive `dx`) shows the next slide.
#[must_use]
pub fn classify(dx: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() <= threshold {
        None
    } else if dx > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_threshold_is_not_a_swipe() {
        assert_eq!(classify(50.0, 50.0), None);
        assert_eq!(classify(-50.0, 50.0), None);
    }

    #[test]
    fn just_past_threshold_is_a_swipe() {
        assert_eq!(classify(51.0, 50.0), Some(Direction::Next));
        assert_eq!(classify(-51.0, 50.0), Some(Direction::Previous));
    }

    #[test]
    fn tracker_reports_left_swipe_as_next() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(1, 300.0);
        assert_eq!(tracker.end(1, 100.0), Some(Direction::Next));
    }

    #[test]
    fn tracker_ignores_release_without_touch() {
        let mut tracker = SwipeTracker::new(50.0);
        assert_eq!(tracker.end(7, 0.0), None);
    }

    #[test]
    fn tracker_follows_first_finger_only() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(1, 100.0);
        tracker.begin(2, 400.0);
        assert_eq!(tracker.end(2, 0.0), None);
        assert_eq!(tracker.end(1, 200.0), Some(Direction::Previous));
    }

    #[test]
    fn cancelled_gesture_is_dropped() {
        let mut tracker = SwipeTracker::new(50.0);
        tracker.begin(1, 300.0);
        tracker.cancel(1);
        assert_eq!(tracker.end(1, 0.0), None);
    }
}
