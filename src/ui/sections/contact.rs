// SPDX-License-Identifier: MPL-2.0
//! Contact channels and the clinic map.

use super::{band, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::{ContactChannel, CLINIC_MAP, CONTACT_CHANNELS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let channels = CONTACT_CHANNELS
        .iter()
        .fold(Column::new().spacing(spacing::MD).width(Length::Fill), |column, channel| {
            column.push(channel_card(ctx.i18n, channel))
        });

    let body: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::LG)
            .push(channels)
            .push(map_card(ctx.i18n))
            .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .push(Container::new(channels).width(Length::FillPortion(1)))
            .push(Container::new(map_card(ctx.i18n)).width(Length::FillPortion(1)))
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(heading(
            ctx.i18n.tr("contact-title"),
            Some(ctx.i18n.tr("contact-subtitle")),
        ))
        .push(body);

    band(content, styles::container::page)
}

fn channel_card<'a>(i18n: &I18n, channel: &ContactChannel) -> Element<'a, Message> {
    let icon = Container::new(Text::new(channel.glyph).size(sizing::ICON_SM))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| {
            styles::container::icon_chip(ColorScheme::from_theme(theme).brand_secondary)(theme)
        });

    let lines = channel.lines.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr(channel.title_key)).size(typography::TITLE_SM).font(BOLD)),
        |column, line| {
            column.push(Text::new(*line).size(typography::BODY).style(secondary_text))
        },
    );

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Top)
            .push(icon)
            .push(lines),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn map_card<'a>(i18n: &I18n) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("⌖").size(sizing::ICON_XL))
        .push(Text::new(CLINIC_MAP.title).size(typography::TITLE_SM).font(BOLD))
        .push(
            Text::new(i18n.tr("contact-map-hint"))
                .size(typography::BODY)
                .style(secondary_text),
        )
        .push(
            button(Text::new(i18n.tr("contact-open-map")).size(typography::BODY))
                .on_press(Message::OpenExternal(CLINIC_MAP))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::outline),
        );

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_renders_in_both_layouts() {
        crate::ui::sections::render_in_both_layouts(view);
    }
}
