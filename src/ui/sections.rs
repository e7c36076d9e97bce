// SPDX-License-Identifier: MPL-2.0
//! Page sections: catalogue, scroll geometry, header elevation and scroll
//! reveal.
//!
//! Sections are laid out with fixed heights (see
//! [`design_tokens::sizing`](crate::ui::design_tokens::sizing)), so section
//! tops and intersections are computed arithmetically from the scroll offset
//! instead of measuring the widget tree.

use crate::app::config::{
    HEADER_ELEVATION_THRESHOLD_PX, HEADER_OFFSET_PX, REVEAL_BOTTOM_MARGIN_PX, REVEAL_STAGGER,
    REVEAL_THRESHOLD,
};
use crate::ui::design_tokens::sizing;
use std::time::Instant;

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Certificates,
    Gallery,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Certificates,
        Section::Gallery,
        Section::Contact,
    ];

    /// Sections reachable from the navigation links.
    pub const NAVIGABLE: [Section; 7] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Certificates,
        Section::Gallery,
        Section::Contact,
    ];

    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Hero => sizing::SECTION_HERO,
            Section::About => sizing::SECTION_ABOUT,
            Section::Skills => sizing::SECTION_SKILLS,
            Section::Projects => sizing::SECTION_PROJECTS,
            Section::Education => sizing::SECTION_EDUCATION,
            Section::Certificates => sizing::SECTION_CERTIFICATES,
            Section::Gallery => sizing::SECTION_GALLERY,
            Section::Contact => sizing::SECTION_CONTACT,
        }
    }

    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or_default()
    }

    /// Distance from the top of the page to the top of this section.
    #[must_use]
    pub fn top(self) -> f32 {
        Self::ALL[..self.position()].iter().map(|s| s.height()).sum()
    }

    /// Scroll offset a navigation link jumps to: the section top minus the
    /// header offset, never negative.
    #[must_use]
    pub fn scroll_target(self) -> f32 {
        (self.top() - HEADER_OFFSET_PX).max(0.0)
    }

    /// i18n key of the section title and nav link.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Hero => "section-home",
            Section::About => "section-about",
            Section::Skills => "section-skills",
            Section::Projects => "section-projects",
            Section::Education => "section-education",
            Section::Certificates => "section-certificates",
            Section::Gallery => "section-gallery",
            Section::Contact => "section-contact",
        }
    }
}

/// Total height of the page.
#[must_use]
pub fn page_height() -> f32 {
    Section::ALL.iter().map(|s| s.height()).sum()
}

/// Whether the header is drawn elevated at scroll offset `offset_y`.
#[must_use]
pub fn header_elevated(offset_y: f32) -> bool {
    offset_y > HEADER_ELEVATION_THRESHOLD_PX
}

/// One-shot reveal of sections as they scroll into view.
///
/// A section counts as intersecting once at least [`REVEAL_THRESHOLD`] of its
/// height overlaps the viewport shrunk by [`REVEAL_BOTTOM_MARGIN_PX`] at the
/// bottom. Sections that start intersecting in the same observation are
/// revealed one after another, [`REVEAL_STAGGER`] apart. Reveals are
/// permanent.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<Section>,
    pending: Vec<(Section, Instant)>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Schedules reveals for sections that start intersecting the viewport.
    /// Returns the number of sections scheduled.
    pub fn observe(&mut self, offset_y: f32, viewport_height: f32, now: Instant) -> usize {
        let view_top = offset_y;
        let view_bottom = offset_y + (viewport_height - REVEAL_BOTTOM_MARGIN_PX).max(0.0);

        let newly: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|s| !self.is_revealed(*s) && !self.pending.iter().any(|(p, _)| p == s))
            .filter(|s| intersection_ratio(*s, view_top, view_bottom) >= REVEAL_THRESHOLD)
            .collect();

        for (i, section) in newly.iter().enumerate() {
            let delay = REVEAL_STAGGER * u32::try_from(i).unwrap_or(u32::MAX);
            self.pending.push((*section, now + delay));
        }
        newly.len()
    }

    /// Reveals sections whose stagger delay has elapsed. Returns true if any
    /// became visible.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.revealed.len();
        let revealed = &mut self.revealed;
        self.pending.retain(|(section, due)| {
            if *due <= now {
                revealed.push(*section);
                false
            } else {
                true
            }
        });
        self.revealed.len() > before
    }
}

fn intersection_ratio(section: Section, view_top: f32, view_bottom: f32) -> f32 {
    let top = section.top();
    let bottom = top + section.height();
    let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
    overlap / section.height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn section_tops_accumulate_heights() {
        assert_eq!(Section::Hero.top(), 0.0);
        assert_eq!(Section::About.top(), sizing::SECTION_HERO);
        assert_eq!(
            Section::Skills.top(),
            sizing::SECTION_HERO + sizing::SECTION_ABOUT
        );
    }

    #[test]
    fn scroll_target_subtracts_header_offset() {
        assert_eq!(Section::About.scroll_target(), sizing::SECTION_HERO - 80.0);
        assert_eq!(Section::Hero.scroll_target(), 0.0);
    }

    #[test]
    fn header_elevates_strictly_above_threshold() {
        assert!(!header_elevated(0.0));
        assert!(!header_elevated(100.0));
        assert!(header_elevated(100.5));
    }

    #[test]
    fn initial_viewport_reveals_visible_sections_staggered() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new();
        // Hero (0..420) fully visible; About (420..740) overlaps 420..750 by
        // 320; Skills starts at 740 and overlaps only 10px (< 10%).
        let scheduled = tracker.observe(0.0, 800.0, now);
        assert_eq!(scheduled, 2);

        assert!(tracker.tick(now));
        assert!(tracker.is_revealed(Section::Hero));
        assert!(!tracker.is_revealed(Section::About));

        assert!(!tracker.tick(now + Duration::from_millis(99)));
        assert!(tracker.tick(now + Duration::from_millis(100)));
        assert!(tracker.is_revealed(Section::About));
        assert!(!tracker.has_pending());
    }

    #[test]
    fn bottom_margin_shrinks_viewport() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new();
        // Viewport ends at 420 + 40; minus the 50px margin it ends before
        // About begins.
        tracker.observe(0.0, sizing::SECTION_HERO + 40.0, now);
        tracker.tick(now + Duration::from_secs(1));
        assert!(!tracker.is_revealed(Section::About));
    }

    #[test]
    fn reveals_are_permanent_and_not_rescheduled() {
        let now = Instant::now();
        let mut tracker = RevealTracker::new();
        tracker.observe(0.0, 800.0, now);
        tracker.tick(now + Duration::from_secs(1));

        let far = page_height() - 800.0;
        tracker.observe(far, 800.0, now);
        tracker.tick(now + Duration::from_secs(2));
        assert!(tracker.is_revealed(Section::Hero));
        assert!(tracker.is_revealed(Section::Contact));

        assert_eq!(tracker.observe(0.0, 800.0, now), 0);
    }
}
