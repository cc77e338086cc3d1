// SPDX-License-Identifier: MPL-2.0
//! Content sections of the brochure page, in page order.
//!
//! Every section renders from static practice data and the i18n bundle.
//! Only the testimonial carousel reads live view state.

pub mod about;
pub mod appointment;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod qualifications;
pub mod services;
pub mod testimonials;

use crate::controller::CarouselState;
use crate::domain::practice::ExternalDocument;
use crate::domain::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{container, text, Column, Container, Row, Space, Text},
    Element, Font, Length, Theme,
};
use std::time::Instant;

/// Contextual data needed to render the sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub carousel: &'a CarouselState,
    /// Frame time, used to interpolate the carousel transition.
    pub now: Instant,
    /// Window is narrower than the mobile breakpoint.
    pub compact: bool,
}

impl ViewContext<'_> {
    /// Number of card columns for a grid that has `wide` columns on desktop.
    #[must_use]
    pub fn columns(&self, wide: usize) -> usize {
        if self.compact {
            1
        } else {
            wide
        }
    }
}

/// Messages emitted by the page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Section),
    SelectTestimonial(usize),
    OpenExternal(ExternalDocument),
}

/// Renders every section in page order.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(about::view(ctx))
        .push(services::view(ctx))
        .push(qualifications::view(ctx))
        .push(testimonials::view(ctx))
        .push(appointment::view(ctx))
        .push(contact::view(ctx))
        .push(footer::view(ctx))
        .into()
}

// -----------------------------------------------------------------------------
// Shared building blocks
// -----------------------------------------------------------------------------

/// Full-width band with the section content centered inside it.
pub(crate) fn band<'a>(
    content: impl Into<Element<'a, Message>>,
    style: impl Fn(&Theme) -> container::Style + 'a,
) -> Element<'a, Message> {
    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(inner)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(style)
        .into()
}

/// Centered title with an optional subtitle underneath.
pub(crate) fn heading<'a>(title: String, subtitle: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG).font(BOLD));

    if let Some(subtitle) = subtitle {
        column = column.push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .align_x(Horizontal::Center)
                .style(secondary_text),
        );
    }

    column.into()
}

/// Lays out `items` in rows of `columns` equally wide cells.
pub(crate) fn grid<'a>(items: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut filled = 0;

    for item in items {
        row = row.push(Container::new(item).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            filled = 0;
        }
    }

    if filled > 0 {
        for _ in filled..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Bold variant of the default font for card titles.
pub(crate) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub(crate) fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::from_theme(theme).text_secondary),
    }
}

pub(crate) fn brand_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::from_theme(theme).brand_primary),
    }
}

/// Renders a section in the wide and the compact layout.
#[cfg(test)]
pub(crate) fn render_in_both_layouts(
    render: impl for<'a, 'b> Fn(&'b ViewContext<'a>) -> Element<'a, Message>,
) {
    use crate::domain::TESTIMONIAL_COUNT;

    let i18n = I18n::default();
    let carousel = CarouselState::new(TESTIMONIAL_COUNT);
    for compact in [false, true] {
        let ctx = ViewContext {
            i18n: &i18n,
            carousel: &carousel,
            now: Instant::now(),
            compact,
        };
        let _element = render(&ctx);
    }
}
