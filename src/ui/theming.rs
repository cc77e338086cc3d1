// SPDX-License-Identifier: MPL-2.0
//! Color schemes and the user-facing theme preference.
//!
//! The page is drawn from a [`ColorScheme`] picked from the document dark
//! flag. [`ThemePreference`] is what the user configures; `System` is
//! resolved once at startup with `dark-light`.

use crate::controller::ThemeMode;
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,
    pub footer_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_accent: Color,
    pub brand_tint: Color,

    pub border: Color,
    pub star: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_card: palette::WHITE,
            footer_background: palette::GRAY_900,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::SECONDARY_500,
            brand_accent: palette::ACCENT_500,
            brand_tint: Color {
                a: opacity::TINT,
                ..palette::PRIMARY_600
            },

            border: palette::GRAY_200,
            star: palette::STAR,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_card: palette::GRAY_800,
            footer_background: palette::GRAY_950,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_muted: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::SECONDARY_500,
            brand_accent: palette::ACCENT_500,
            brand_tint: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_800
            },

            border: palette::GRAY_700,
            star: palette::STAR,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,
        }
    }

    /// Scheme for the given controller theme.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Scheme matching the Iced theme a style function is called with.
    #[must_use]
    pub fn from_theme(theme: &iced::Theme) -> Self {
        if matches!(theme, iced::Theme::Light) {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

/// Theme the user asks for in `settings.toml` or on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    /// Resolves the preference to a concrete mode.
    /// For `System`, detects the desktop theme and falls back to light on
    /// detection error.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
                _ => ThemeMode::Light,
            },
        }
    }

    /// Parses a command-line value; `None` for anything unrecognised.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

/// Iced built-in theme backing the default widget styles for `mode`.
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> iced::Theme {
    match mode {
        ThemeMode::Light => iced::Theme::Light,
        ThemeMode::Dark => iced::Theme::Dark,
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
    fn both_themes_keep_blue_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn iced_theme_round_trips_through_scheme() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let scheme = ColorScheme::from_theme(&iced_theme(mode));
            assert_eq!(scheme.surface_primary, ColorScheme::for_mode(mode).surface_primary);
        }
    }

    #[test]
    fn explicit_preferences_resolve_directly() {
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        // Depends on the desktop; only check it does not panic.
        let _ = ThemePreference::System.resolve();
    }

    #[test]
    fn parse_accepts_known_values_case_insensitively() {
        assert_eq!(ThemePreference::parse("Dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse(" system "), Some(ThemePreference::System));
        assert_eq!(ThemePreference::parse("sepia"), None);
    }
}
