// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Plain page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Alternate band behind every other section.
pub fn band(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Hero banner, tinted with the brand color.
pub fn hero(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_tint)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Sticky navbar, slightly translucent over the page.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..colors.surface_primary
        })),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Raised card used for services, qualifications, testimonials and contact.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_card)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Pill-shaped badge.
pub fn badge(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_tint)),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Round chip behind an icon glyph, tinted with `accent`.
pub fn icon_chip(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..accent
        })),
        text_color: Some(accent),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Informational banner above the booking form link.
pub fn info_banner(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.brand_tint)),
        text_color: Some(colors.brand_primary),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..colors.brand_primary
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dark footer band, darker still in dark mode.
pub fn footer(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.footer_background)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_background_follows_theme() {
        assert_eq!(
            page(&Theme::Light).background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
        assert_eq!(
            page(&Theme::Dark).background,
            Some(Background::Color(ColorScheme::dark().surface_primary))
        );
    }

    #[test]
    fn icon_chip_tints_accent() {
        let accent = Color::from_rgb(0.2, 0.4, 0.6);
        let style = icon_chip(accent)(&Theme::Light);
        assert_eq!(style.text_color, Some(accent));
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("unexpected background: {other:?}"),
        }
    }
}
