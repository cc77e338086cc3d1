// SPDX-License-Identifier: MPL-2.0
//! About section: biography and headline figures.

use super::{band, brand_text, grid, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::{Highlight, ABOUT_PARAGRAPHS, HIGHLIGHTS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let biography = ABOUT_PARAGRAPHS
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, paragraph| {
            column.push(
                Text::new(*paragraph)
                    .size(typography::BODY_LG)
                    .style(secondary_text),
            )
        });

    let highlights = grid(
        HIGHLIGHTS.iter().map(highlight_card).collect(),
        ctx.columns(HIGHLIGHTS.len()),
    );

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(heading(ctx.i18n.tr("about-title"), None))
        .push(biography)
        .push(highlights);

    band(content, styles::container::band)
}

fn highlight_card<'a>(highlight: &Highlight) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(highlight.title)
                .size(typography::TITLE_MD)
                .font(BOLD)
                .style(brand_text),
        )
        .push(
            Text::new(highlight.caption)
                .size(typography::BODY)
                .style(secondary_text),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
