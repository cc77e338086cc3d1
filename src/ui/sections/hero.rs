// SPDX-License-Identifier: MPL-2.0
//! Hero banner at the `home` anchor.

use super::{secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::{CREDENTIAL_BADGES, DOCTOR_NAME};
use crate::domain::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Diameter of the portrait placeholder.
const PORTRAIT_SIZE: f32 = 220.0;

/// Initials drawn inside the portrait placeholder.
const PORTRAIT_INITIALS: &str = "AT";

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let badges = CREDENTIAL_BADGES
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, badge| {
            row.push(
                Container::new(Text::new(*badge).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::badge),
            )
        });

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(
            button(Text::new(ctx.i18n.tr("hero-book-appointment")).size(typography::BODY_LG))
                .on_press(Message::Navigate(Section::Appointment))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-learn-more")).size(typography::BODY_LG))
                .on_press(Message::Navigate(Section::About))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline),
        );

    let intro = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(badges)
        .push(Text::new(DOCTOR_NAME).size(typography::DISPLAY).font(BOLD))
        .push(
            Text::new(ctx.i18n.tr("hero-tagline"))
                .size(typography::TITLE_SM)
                .style(secondary_text),
        )
        .push(actions);

    let content: Element<'a, Message> = if ctx.compact {
        intro.into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(intro)
            .push(portrait())
            .into()
    };

    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(inner)
        .width(Length::Fill)
        .padding([sizing::NAVBAR_HEIGHT + spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::hero)
        .into()
}

fn portrait<'a>() -> Element<'a, Message> {
    Container::new(Text::new(PORTRAIT_INITIALS).size(typography::DISPLAY).font(BOLD))
        .width(Length::Fixed(PORTRAIT_SIZE))
        .height(Length::Fixed(PORTRAIT_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| {
            styles::container::icon_chip(ColorScheme::from_theme(theme).brand_primary)(theme)
        })
        .into()
}
