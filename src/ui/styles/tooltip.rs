// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the navbar toggles.
//!
//! Tooltips invert the page colors: dark on the light theme, light on the
//! dark theme.

use crate::ui::design_tokens::{border, opacity, radius, shadow, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted container behind the tooltip text.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let colors = ColorScheme::from_theme(theme);

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.98,
            ..colors.text_primary
        })),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.border
            },
        },
        shadow: shadow::MD,
        text_color: Some(colors.surface_primary),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// use crate::ui::styles::tooltip;
///
/// tooltip::styled(toggle, i18n.tr("nav-theme-to-dark"), tooltip::Position::Bottom)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
