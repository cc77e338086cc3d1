// SPDX-License-Identifier: MPL-2.0
//! Medical services offered by the practice.

use super::{band, grid, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::{Service, SERVICES};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = grid(SERVICES.iter().map(service_card).collect(), ctx.columns(3));

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(heading(
            ctx.i18n.tr("services-title"),
            Some(ctx.i18n.tr("services-subtitle")),
        ))
        .push(cards);

    band(content, styles::container::page)
}

fn service_card<'a>(service: &Service) -> Element<'a, Message> {
    let icon = Container::new(Text::new(service.glyph).size(sizing::ICON_MD))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| {
            styles::container::icon_chip(ColorScheme::from_theme(theme).brand_primary)(theme)
        });

    let body = Column::new()
        .spacing(spacing::SM)
        .push(icon)
        .push(Text::new(service.title).size(typography::TITLE_SM).font(BOLD))
        .push(
            Text::new(service.description)
                .size(typography::BODY)
                .style(secondary_text),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
