// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Card surface for skills, projects, education entries.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Navigation bar. Once the page has scrolled past the elevation threshold
/// the header turns translucent and casts a shadow.
pub fn header(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let scheme = ColorScheme::for_theme(theme);
        let (alpha, shadow) = if elevated {
            (opacity::SURFACE, shadow::SM)
        } else {
            (opacity::OPAQUE, shadow::NONE)
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..scheme.surface_primary
            })),
            text_color: Some(scheme.text_primary),
            shadow,
            ..Default::default()
        }
    }
}

/// Caption band over the bottom of a slide.
pub fn caption(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        text_color: Some(scheme.overlay_text),
        ..Default::default()
    }
}

/// Stand-in for a slide whose image failed to load.
pub fn placeholder(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_secondary)),
        text_color: Some(scheme.text_secondary),
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the certificate lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dropdown panel of the collapsed navigation menu.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_primary)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
