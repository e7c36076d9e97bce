// SPDX-License-Identifier: MPL-2.0
//! Slideshow controller.
//!
//! `Slideshow` owns the canonical gallery state: the ordered slides with their
//! asset status, the current index and the auto-play timer. Everything the
//! view shows (which slide and indicator are active, which slides carry a
//! placeholder) is derived from that state on demand, so there is nothing to
//! keep in sync after a structural change.
//!
//! Asset loads are started by the caller from the [`LoadRequest`]s returned by
//! construction, [`Slideshow::update_gallery`], [`Slideshow::add_image`] and
//! [`Slideshow::retry`]. Their results come back tagged with a [`SlideKey`];
//! results for a replaced gallery are ignored.

use super::autoplay::AutoPlay;
use super::record::SlideRecord;
use super::Direction;
use crate::error::Error;
use iced::widget::image::Handle;
use std::time::{Duration, Instant};

/// Identity of a slide within one gallery generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideKey {
    generation: u64,
    index: usize,
}

impl SlideKey {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// An asset load the caller must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub key: SlideKey,
    pub source: String,
}

/// Loading state of a slide image.
#[derive(Debug, Clone, Default)]
pub enum AssetStatus {
    #[default]
    Pending,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Clone)]
struct Slide {
    record: SlideRecord,
    status: AssetStatus,
}

/// Fallback shown instead of an image that failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// 1-based number displayed as "Image N".
    pub number: usize,
}

/// Derived, read-only view of one slide.
#[derive(Debug, Clone)]
pub struct SlideView<'a> {
    pub index: usize,
    pub record: &'a SlideRecord,
    pub active: bool,
    /// Visible image, `None` while pending or after a failure.
    pub image: Option<&'a Handle>,
    pub placeholder: Option<Placeholder>,
}

/// User input the slideshow reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    PreviousControl,
    NextControl,
    Indicator(usize),
    ArrowLeft,
    ArrowRight,
    Swipe(Direction),
    HoverEnter,
    HoverExit,
}

/// Gallery slideshow controller.
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    auto_play: AutoPlay,
    generation: u64,
    /// Input is accepted only while bound.
    bound: bool,
    /// Set by `destroy`; a destroyed slideshow never rebinds.
    destroyed: bool,
}

impl Slideshow {
    /// Builds the slideshow, shows slide 0 and starts auto-play. An empty
    /// gallery stays idle until its first slide is added.
    ///
    /// Returns the asset loads to start, one per slide.
    pub fn new(
        records: Vec<SlideRecord>,
        interval: Duration,
        now: Instant,
    ) -> (Self, Vec<LoadRequest>) {
        let mut slideshow = Self {
            slides: Vec::new(),
            current: 0,
            auto_play: AutoPlay::new(interval),
            generation: 0,
            bound: false,
            destroyed: false,
        };
        let requests = slideshow.rebuild(records);
        slideshow.bound = true;
        slideshow.show_slide(0);
        slideshow.start_auto_play(now);
        tracing::debug!(slides = slideshow.len(), "slideshow initialized");
        (slideshow, requests)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn auto_play(&self) -> &AutoPlay {
        &self.auto_play
    }

    #[must_use]
    pub fn is_auto_play_active(&self) -> bool {
        self.auto_play.is_running()
    }

    /// Whether the slideshow still accepts input (false after `destroy`).
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    #[must_use]
    pub fn record(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index).map(|slide| &slide.record)
    }

    #[must_use]
    pub fn status(&self, index: usize) -> Option<&AssetStatus> {
        self.slides.get(index).map(|slide| &slide.status)
    }

    #[must_use]
    pub fn key(&self, index: usize) -> Option<SlideKey> {
        (index < self.slides.len()).then_some(SlideKey {
            generation: self.generation,
            index,
        })
    }

    /// Derived slide views in display order.
    pub fn slides(&self) -> impl Iterator<Item = SlideView<'_>> {
        self.slides.iter().enumerate().map(|(index, slide)| {
            let (image, placeholder) = match &slide.status {
                AssetStatus::Ready(handle) => (Some(handle), None),
                AssetStatus::Pending => (None, None),
                AssetStatus::Failed => (None, Some(Placeholder { number: index + 1 })),
            };
            SlideView {
                index,
                record: &slide.record,
                active: index == self.current,
                image,
                placeholder,
            }
        })
    }

    /// Active flag of every indicator, index-aligned with the slides.
    pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.slides.len()).map(move |index| index == self.current)
    }

    /// Number of placeholders currently rendered under slide `index`.
    #[must_use]
    pub fn placeholder_count(&self, index: usize) -> usize {
        usize::from(matches!(
            self.status(index),
            Some(AssetStatus::Failed)
        ))
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Makes `index` the active slide. Out-of-range indices are ignored.
    pub fn show_slide(&mut self, index: usize) {
        if index >= self.slides.len() {
            if !self.slides.is_empty() {
                tracing::debug!(index, len = self.slides.len(), "ignoring out-of-range slide");
            }
            return;
        }
        self.current = index;
    }

    /// Advances cyclically; wraps from the last slide to the first.
    pub fn next_slide(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.show_slide((self.current + 1) % count);
    }

    /// Steps back cyclically; wraps from the first slide to the last.
    pub fn prev_slide(&mut self) {
        let count = self.slides.len();
        if count == 0 {
            return;
        }
        self.show_slide((self.current + count - 1) % count);
    }

    pub fn go_to_slide(&mut self, index: usize) {
        self.show_slide(index);
    }

    // =========================================================================
    // Auto-play
    // =========================================================================

    /// Arms the timer. No-op while unbound or without slides.
    pub fn start_auto_play(&mut self, now: Instant) {
        if self.bound && !self.slides.is_empty() {
            self.auto_play.start(now);
        }
    }

    pub fn stop_auto_play(&mut self) {
        self.auto_play.stop();
    }

    pub fn reset_auto_play(&mut self, now: Instant) {
        self.stop_auto_play();
        self.start_auto_play(now);
    }

    /// Drives the auto-play timer. Returns true when it advanced the slideshow.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.bound || !self.auto_play.poll(now) || self.slides.is_empty() {
            return false;
        }
        self.next_slide();
        tracing::trace!(index = self.current, "auto-play advanced");
        true
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Applies one user input. Manual navigation re-bases the auto-play
    /// countdown. Returns false when the input was ignored.
    pub fn handle_input(&mut self, input: Input, now: Instant) -> bool {
        if !self.bound {
            return false;
        }

        let navigates = !matches!(input, Input::HoverEnter | Input::HoverExit);
        if navigates && self.slides.is_empty() {
            return false;
        }

        match input {
            Input::PreviousControl | Input::ArrowLeft | Input::Swipe(Direction::Previous) => {
                self.prev_slide();
            }
            Input::NextControl | Input::ArrowRight | Input::Swipe(Direction::Next) => {
                self.next_slide();
            }
            Input::Indicator(index) => {
                if index >= self.slides.len() {
                    return false;
                }
                self.go_to_slide(index);
            }
            Input::HoverEnter => {
                self.auto_play.set_hovered(true, now);
                return true;
            }
            Input::HoverExit => {
                self.auto_play.set_hovered(false, now);
                if self.slides.is_empty() {
                    self.auto_play.stop();
                }
                return true;
            }
        }

        self.reset_auto_play(now);
        true
    }

    // =========================================================================
    // Structural changes
    // =========================================================================

    /// Replaces every slide, shows slide 0 and re-bases auto-play.
    ///
    /// Loads still in flight for the previous slides will be ignored. A
    /// destroyed slideshow is left untouched and nothing is returned.
    pub fn update_gallery(&mut self, records: Vec<SlideRecord>, now: Instant) -> Vec<LoadRequest> {
        if self.destroyed {
            tracing::debug!("ignoring gallery update after destroy");
            return Vec::new();
        }
        self.generation += 1;
        let requests = self.rebuild(records);
        self.bound = true;
        self.current = 0;
        self.show_slide(0);
        self.reset_auto_play(now);
        tracing::info!(slides = self.len(), generation = self.generation, "gallery replaced");
        requests
    }

    /// Appends one slide without touching the current index. The timer is
    /// only started when this is the first slide. Returns `None` once
    /// destroyed.
    pub fn add_image(&mut self, record: SlideRecord, now: Instant) -> Option<LoadRequest> {
        if self.destroyed {
            return None;
        }
        let index = self.slides.len();
        let source = record.source().to_string();
        self.slides.push(Slide {
            record,
            status: AssetStatus::Pending,
        });
        tracing::debug!(index, "slide appended");
        if index == 0 {
            self.start_auto_play(now);
        }
        Some(LoadRequest {
            key: SlideKey {
                generation: self.generation,
                index,
            },
            source,
        })
    }

    /// Ends the slideshow's lifetime: the timer is cancelled, input is
    /// unbound and slides are dropped. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.auto_play.stop();
        self.bound = false;
        self.slides.clear();
        self.current = 0;
        self.generation += 1;
        tracing::debug!("slideshow destroyed");
    }

    // =========================================================================
    // Asset loading
    // =========================================================================

    /// Applies the outcome of an asset load. Returns false for stale keys.
    pub fn finish_load(&mut self, key: SlideKey, result: Result<Handle, Error>) -> bool {
        match result {
            Ok(handle) => self.image_loaded(key, handle),
            Err(error) => {
                tracing::warn!(index = key.index, %error, "slide image failed to load");
                self.image_failed(key)
            }
        }
    }

    /// The image behind `key` loaded: it becomes visible and any placeholder
    /// is removed.
    pub fn image_loaded(&mut self, key: SlideKey, handle: Handle) -> bool {
        match self.slide_mut(key) {
            Some(slide) => {
                slide.status = AssetStatus::Ready(handle);
                true
            }
            None => false,
        }
    }

    /// The image behind `key` failed: it is hidden behind one placeholder.
    pub fn image_failed(&mut self, key: SlideKey) -> bool {
        match self.slide_mut(key) {
            Some(slide) => {
                slide.status = AssetStatus::Failed;
                true
            }
            None => false,
        }
    }

    /// Builds a new load for a slide whose image failed.
    pub fn retry(&self, index: usize) -> Option<LoadRequest> {
        let slide = self.slides.get(index)?;
        if !matches!(slide.status, AssetStatus::Failed) {
            return None;
        }
        Some(LoadRequest {
            key: SlideKey {
                generation: self.generation,
                index,
            },
            source: slide.record.source().to_string(),
        })
    }

    fn slide_mut(&mut self, key: SlideKey) -> Option<&mut Slide> {
        if key.generation != self.generation {
            tracing::debug!(index = key.index, "dropping stale asset result");
            return None;
        }
        self.slides.get_mut(key.index)
    }

    fn rebuild(&mut self, records: Vec<SlideRecord>) -> Vec<LoadRequest> {
        let generation = self.generation;
        self.slides = records
            .into_iter()
            .map(|record| Slide {
                record,
                status: AssetStatus::Pending,
            })
            .collect();
        self.slides
            .iter()
            .enumerate()
            .map(|(index, slide)| LoadRequest {
                key: SlideKey { generation, index },
                source: slide.record.source().to_string(),
            })
            .collect()
    }
}
