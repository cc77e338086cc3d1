// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style reads the active [`ColorScheme`] from the Iced theme, so the
//! same function serves both light and dark mode.

use crate::ui::design_tokens::{border, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn lighten(color: Color, amount: f32) -> Color {
    Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

/// Filled brand button (Book Appointment, Open Booking Form).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let (background, elevation) = match status {
        button::Status::Hovered => (lighten(colors.brand_primary, 0.08), shadow::MD),
        button::Status::Disabled => (colors.text_muted, shadow::NONE),
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: background,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Outlined button on the hero banner (Learn More).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.brand_tint)),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.brand_primary,
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only navigation link in the navbar and mobile menu.
pub fn nav_link(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        _ => colors.text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Square ghost button for the theme toggle and hamburger.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::from_theme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(colors.surface_secondary))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_secondary,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Link on the dark footer background.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => WHITE,
        _ => crate::ui::design_tokens::palette::GRAY_300,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Carousel indicator dot; the active one is filled with the brand color.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::from_theme(theme);
        let fill = match (active, status) {
            (true, _) => colors.brand_primary,
            (false, button::Status::Hovered) => colors.text_muted,
            (false, _) => colors.border,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: fill,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Floating "Book Now" pill.
pub fn sticky(theme: &Theme, status: button::Status) -> button::Style {
    let base = primary(theme, status);
    button::Style {
        border: Border {
            radius: radius::FULL.into(),
            ..base.border
        },
        shadow: shadow::LG,
        ..base
    }
}
