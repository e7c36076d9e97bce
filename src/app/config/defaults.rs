// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Auto-play interval and swipe recognition
//! - **Hero**: Typing effect timing
//! - **Navigation**: Header offset and elevation threshold
//! - **Contact**: Simulated submission delay

use std::time::Duration;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default delay between two automatic slide advances.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Minimum auto-play interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum auto-play interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Horizontal distance a touch gesture must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 200.0;

// ==========================================================================
// Hero Defaults
// ==========================================================================

/// Delay between two typed characters of the hero subtitle.
pub const DEFAULT_TYPING_SPEED_MS: u64 = 100;

/// Minimum typing speed.
pub const MIN_TYPING_SPEED_MS: u64 = 10;

/// Maximum typing speed.
pub const MAX_TYPING_SPEED_MS: u64 = 1000;

/// Pause before the typing effect starts.
pub const TYPING_START_DELAY: Duration = Duration::from_millis(1000);

/// Blink period of the typing cursor once the text is complete.
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Space reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET_PX: f32 = 80.0;

/// Scroll offset past which the header switches to its elevated style.
pub const HEADER_ELEVATION_THRESHOLD_PX: f32 = 100.0;

/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Amount the viewport is shrunk at the bottom for reveal detection.
pub const REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Stagger applied between sections revealed by the same scroll event.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Simulated network delay of the contact form.
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(2000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_default_within_bounds() {
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
        assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    }

    #[test]
    fn swipe_default_within_bounds() {
        assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
        assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    }

    #[test]
    fn typing_default_within_bounds() {
        assert!(DEFAULT_TYPING_SPEED_MS >= MIN_TYPING_SPEED_MS);
        assert!(DEFAULT_TYPING_SPEED_MS <= MAX_TYPING_SPEED_MS);
    }
}
