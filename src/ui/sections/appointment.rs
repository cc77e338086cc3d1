// SPDX-License-Identifier: MPL-2.0
//! Appointment booking section.
//!
//! The booking form is a hosted web form. The page describes it and opens it
//! in the system browser on request.

use super::{band, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::BOOKING_FORM;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let banner = Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(ctx.i18n.tr("appointment-form-ready"))
                    .size(typography::BODY)
                    .font(BOLD),
            )
            .push(Text::new(ctx.i18n.tr("appointment-form-hint")).size(typography::BODY_SM)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::info_banner);

    let form_card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(BOOKING_FORM.title).size(typography::TITLE_SM))
            .push(
                button(Text::new(ctx.i18n.tr("appointment-open-form")).size(typography::BODY_LG))
                    .on_press(Message::OpenExternal(BOOKING_FORM))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(Horizontal::Center)
    .style(styles::container::card);

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .max_width(sizing::TESTIMONIAL_WIDTH)
        .push(heading(
            ctx.i18n.tr("appointment-title"),
            Some(ctx.i18n.tr("appointment-subtitle")),
        ))
        .push(banner)
        .push(form_card)
        .push(
            Text::new(BOOKING_FORM.url)
                .size(typography::CAPTION)
                .style(secondary_text),
        );

    let centered = Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    band(centered, styles::container::band)
}
