// SPDX-License-Identifier: MPL-2.0
//! Hero banner with a typing-effect subtitle.
//!
//! The subtitle starts typing [`TYPING_START_DELAY`] after launch, one
//! character per `speed`. Once complete, a `|` cursor blinks every
//! [`CURSOR_BLINK_INTERVAL`].

use crate::app::config::{CURSOR_BLINK_INTERVAL, TYPING_START_DELAY};
use crate::content::Profile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting { start_at: Instant },
    Typing { next_at: Instant },
    Blinking { next_at: Instant },
}

/// Typing animation state for one piece of text.
#[derive(Debug, Clone)]
pub struct TypingState {
    chars: Vec<char>,
    typed: usize,
    speed: Duration,
    phase: Phase,
    cursor_visible: bool,
}

impl TypingState {
    #[must_use]
    pub fn new(text: &str, speed: Duration, now: Instant) -> Self {
        Self {
            chars: text.chars().collect(),
            typed: 0,
            speed,
            phase: Phase::Waiting {
                start_at: now + TYPING_START_DELAY,
            },
            cursor_visible: false,
        }
    }

    /// The text typed so far.
    #[must_use]
    pub fn visible_text(&self) -> String {
        self.chars[..self.typed].iter().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Blinking { .. })
    }

    /// Whether the trailing cursor is currently drawn.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.is_complete() && self.cursor_visible
    }

    /// Advances the animation to `now`. Returns true if anything visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        loop {
            match self.phase {
                Phase::Waiting { start_at } if now >= start_at => {
                    self.phase = Phase::Typing { next_at: start_at };
                }
                Phase::Typing { next_at } if now >= next_at => {
                    if self.typed < self.chars.len() {
                        self.typed += 1;
                        self.phase = Phase::Typing {
                            next_at: next_at + self.speed,
                        };
                    } else {
                        self.cursor_visible = true;
                        self.phase = Phase::Blinking {
                            next_at: next_at + CURSOR_BLINK_INTERVAL,
                        };
                    }
                    changed = true;
                }
                Phase::Blinking { next_at } if now >= next_at => {
                    self.cursor_visible = !self.cursor_visible;
                    // Skip missed blinks rather than replaying them.
                    let mut next = next_at + CURSOR_BLINK_INTERVAL;
                    while next <= now {
                        next += CURSOR_BLINK_INTERVAL;
                    }
                    self.phase = Phase::Blinking { next_at: next };
                    return true;
                }
                _ => return changed,
            }
        }
    }
}

pub fn view<'a, M: 'a>(profile: &'a Profile, typing: &TypingState) -> Element<'a, M> {
    let mut subtitle = typing.visible_text();
    if typing.cursor_visible() {
        subtitle.push('|');
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(profile.name.as_str()).size(typography::DISPLAY))
        .push(
            text(profile.title.as_str())
                .size(typography::TITLE_MD)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).brand_primary),
                }),
        )
        .push(
            text(subtitle)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HERO))
        .padding([sizing::NAVBAR_HEIGHT, spacing::LG])
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::SECTION_HERO))
        .into()
}
