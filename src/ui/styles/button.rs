// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (contact submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Borderless button that only shows a tint on hover (toast dismiss,
/// theme toggle, hamburger).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = ColorScheme::for_theme(theme).text_primary;
    let tint = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: tint.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Section link in the navigation bar.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.brand_primary,
        _ => scheme.text_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round previous/next control drawn over the slide image.
pub fn slide_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Slide indicator dot; the active one is filled with the brand color.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let scheme = ColorScheme::for_theme(theme);
        let fill = if active {
            scheme.brand_primary
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_400
        } else {
            palette::GRAY_200
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: fill,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable card (certificate thumbnail, failed slide placeholder).
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => scheme.brand_primary,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: scheme.text_primary,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::PRIMARY_500)));
    }

    #[test]
    fn disabled_primary_is_faded() {
        let active = primary(&Theme::Light, button::Status::Active);
        let disabled = primary(&Theme::Light, button::Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn slide_control_darkens_on_hover() {
        let normal = slide_control(&Theme::Dark, button::Status::Active);
        let hover = slide_control(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn active_indicator_differs_from_inactive() {
        let active = indicator(true)(&Theme::Light, button::Status::Active);
        let inactive = indicator(false)(&Theme::Light, button::Status::Active);
        assert_ne!(active.background, inactive.background);
    }
}
