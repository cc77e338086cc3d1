// SPDX-License-Identifier: MPL-2.0
//! Page footer with quick links and condensed contact details.

use super::{Message, ViewContext, BOLD};
use crate::domain::practice::{COPYRIGHT, DOCTOR_NAME, FOOTER_CONTACT_LINES};
use crate::domain::Section;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, rule, Column, Container, Row, Text};
use iced::{Element, Length};

/// Sections listed under the quick links.
const QUICK_LINKS: [Section; 4] = [
    Section::About,
    Section::Services,
    Section::Qualifications,
    Section::Appointment,
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let blurb = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(2))
        .push(Text::new(DOCTOR_NAME).size(typography::TITLE_SM).font(BOLD))
        .push(
            Text::new(ctx.i18n.tr("footer-blurb"))
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    let links = QUICK_LINKS.into_iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .width(Length::FillPortion(1))
            .push(column_title(ctx.i18n.tr("footer-quick-links"))),
        |column, section| {
            column.push(
                button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY_SM))
                    .on_press(Message::Navigate(section))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::footer_link),
            )
        },
    );

    let contact = FOOTER_CONTACT_LINES.iter().fold(
        Column::new()
            .spacing(spacing::XS)
            .width(Length::FillPortion(1))
            .push(column_title(ctx.i18n.tr("footer-contact-info"))),
        |column, line| {
            column.push(
                Text::new(*line)
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
        },
    );

    let columns: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(blurb)
            .push(links)
            .push(contact)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(blurb)
            .push(links)
            .push(contact)
            .into()
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(columns)
        .push(rule::horizontal(1))
        .push(
            Text::new(COPYRIGHT)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

fn column_title<'a>(title: String) -> Element<'a, Message> {
    Text::new(title)
        .size(typography::BODY_LG)
        .font(BOLD)
        .color(palette::WHITE)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_renders_in_both_layouts() {
        crate::ui::sections::render_in_both_layouts(view);
    }

    #[test]
    fn quick_links_are_anchored() {
        for section in QUICK_LINKS {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }
}
