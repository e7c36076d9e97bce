// SPDX-License-Identifier: MPL-2.0
//! Gallery slideshow core.
//!
//! This module is independent of the widget tree: it holds the slideshow
//! state, the auto-play timer and the swipe recognizer, and describes the
//! asset loads the application has to run. Rendering lives in
//! [`crate::ui::gallery`].

pub mod autoplay;
pub mod loader;
pub mod record;
pub mod slideshow;
pub mod swipe;

pub use autoplay::{AutoPlay, TimerState};
pub use record::SlideRecord;
pub use slideshow::{
    AssetStatus, Input, LoadRequest, Placeholder, SlideKey, SlideView, Slideshow,
};
pub use swipe::SwipeTracker;

/// Navigation direction requested by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}
