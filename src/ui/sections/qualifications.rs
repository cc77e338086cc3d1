// SPDX-License-Identifier: MPL-2.0
//! Education and career timeline.

use super::{band, brand_text, heading, secondary_text, Message, ViewContext, BOLD};
use crate::domain::practice::{Qualification, QUALIFICATIONS};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let timeline = QUALIFICATIONS
        .iter()
        .fold(Column::new().spacing(spacing::LG), |column, qualification| {
            column.push(entry(qualification, ctx.compact))
        });

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(heading(
            ctx.i18n.tr("qualifications-title"),
            Some(ctx.i18n.tr("qualifications-subtitle")),
        ))
        .push(timeline);

    band(content, styles::container::band)
}

fn entry<'a>(qualification: &Qualification, compact: bool) -> Element<'a, Message> {
    let years = Container::new(Text::new(qualification.years).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(qualification.title).size(typography::TITLE_SM).font(BOLD))
        .push(
            Text::new(qualification.institution)
                .size(typography::BODY)
                .style(brand_text),
        )
        .push(
            Text::new(qualification.description)
                .size(typography::BODY)
                .style(secondary_text),
        );

    // Years sit above the details on narrow windows.
    let body: Element<'a, Message> = if compact {
        Column::new()
            .spacing(spacing::SM)
            .push(years)
            .push(details)
            .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .align_y(Vertical::Top)
            .push(years)
            .push(details)
            .into()
    };

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}
