// SPDX-License-Identifier: MPL-2.0
//! Testimonial carousel.
//!
//! One testimonial is shown at a time. A new one fades in over the carousel
//! transition; the indicator dots below select a testimonial directly.

use super::{band, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::testimonial::rating_bounds;
use crate::domain::{StarRating, Testimonial, TESTIMONIALS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Color, Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.carousel.active_index();
    let alpha = ctx
        .carousel
        .transition()
        .map_or(1.0, |transition| transition.progress(ctx.now));

    let mut content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading(
            ctx.i18n.tr("testimonials-title"),
            Some(ctx.i18n.tr("testimonials-subtitle")),
        ));

    if let Some(testimonial) = TESTIMONIALS.get(active) {
        content = content.push(card(testimonial, alpha));
    }

    let total = ctx.carousel.len().to_string();
    let current = (active + 1).to_string();
    let position = Text::new(ctx.i18n.tr_with_args(
        "testimonial-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION)
    .style(secondary_text);

    content = content.push(dots(active, ctx.carousel.len())).push(position);

    band(content, styles::container::page)
}

/// Filled stars followed by empty ones, always five glyphs wide.
#[must_use]
pub fn stars(rating: StarRating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(rating_bounds::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn card<'a>(testimonial: &Testimonial, alpha: f32) -> Element<'a, Message> {
    let avatar = Container::new(Text::new(testimonial.initials()).size(typography::TITLE_SM).font(BOLD))
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |theme: &Theme| {
            let accent = faded(ColorScheme::from_theme(theme).brand_primary, alpha);
            styles::container::icon_chip(accent)(theme)
        });

    let author = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(testimonial.display_name)
                .size(typography::TITLE_SM)
                .font(BOLD)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(ColorScheme::from_theme(theme).text_primary, alpha)),
                }),
        )
        .push(
            Text::new(stars(testimonial.star_rating))
                .size(typography::BODY)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(ColorScheme::from_theme(theme).star, alpha)),
                }),
        );

    let quote = Text::new(format!("“{}”", testimonial.body_text))
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(ColorScheme::from_theme(theme).text_secondary, alpha)),
        });

    let body = Column::new()
        .spacing(spacing::MD)
        .push(quote)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(avatar)
                .push(author),
        );

    Container::new(body)
        .width(Length::Fill)
        .max_width(sizing::TESTIMONIAL_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}

fn dots<'a>(active: usize, len: usize) -> Element<'a, Message> {
    (0..len)
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Text::new(""))
                    .width(Length::Fixed(sizing::DOT))
                    .height(Length::Fixed(sizing::DOT))
                    .padding(0)
                    .on_press(Message::SelectTestimonial(index))
                    .style(styles::button::dot(index == active)),
            )
        })
        .into()
}
