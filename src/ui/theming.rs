// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Overlay colors (slide captions, lightbox backdrop)
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the active Iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Scheme matching an effective (light or dark) mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme preference.
///
/// `System` only appears when hand-edited in `settings.toml`; it is resolved
/// once at startup and the toggle always writes `Light` or `Dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// Collapses `System` into the concrete mode it currently stands for.
    #[must_use]
    pub fn resolve(self) -> Self {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The mode a click on the theme toggle switches to.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Glyph shown on the toggle: a moon invites switching to dark, a sun to light.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        if self.is_dark() {
            "☀️"
        } else {
            "🌙"
        }
    }

    /// i18n key describing what the toggle will do.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        if self.is_dark() {
            "theme-switch-to-light"
        } else {
            "theme-switch-to-dark"
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert!(ColorScheme::for_theme(&Theme::Dark).surface_primary.r < 0.2);
        assert!(ColorScheme::for_theme(&Theme::Light).surface_primary.r > 0.9);
    }

    #[test]
    fn toggle_switches_between_light_and_dark() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        let from_system = ThemeMode::System.toggled();
        assert_ne!(from_system, ThemeMode::System);
    }

    #[test]
    fn toggle_icon_and_label_follow_mode() {
        assert_eq!(ThemeMode::Light.toggle_icon(), "🌙");
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀️");
        assert_eq!(ThemeMode::Light.toggle_label_key(), "theme-switch-to-dark");
        assert_eq!(ThemeMode::Dark.toggle_label_key(), "theme-switch-to-light");
    }

    #[test]
    fn resolve_never_returns_system() {
        assert_eq!(ThemeMode::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ThemeMode::Dark);
        assert_ne!(ThemeMode::System.resolve(), ThemeMode::System);
    }

    #[test]
    fn iced_theme_matches_mode() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}
