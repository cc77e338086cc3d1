// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a single scrollable column. The navbar, the floating
//! "Book Now" button and the toasts are stacked on top of it.

use super::Message;
use crate::controller::ViewStateController;
use crate::domain::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::scroll::PAGE_SCROLLABLE_ID;
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Id, Scrollable, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a ViewStateController,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
    pub compact: bool,
}

/// Renders the page with its floating layers.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = sections::view(&SectionsViewContext {
        i18n: ctx.i18n,
        carousel: ctx.controller.carousel(),
        now: ctx.now,
        compact: ctx.compact,
    })
    .map(Message::Section);

    let page = Container::new(
        Scrollable::new(page)
            .id(Id::new(PAGE_SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::PageScrolled),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let navbar = Column::new().width(Length::Fill).push(
        navbar::view(NavbarViewContext {
            i18n: ctx.i18n,
            theme: ctx.controller.theme(),
            menu: ctx.controller.menu(),
            compact: ctx.compact,
        })
        .map(Message::Navbar),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(book_now(ctx.i18n))
        .push(navbar)
        .push(toasts)
        .into()
}

/// Floating pill in the bottom-right corner that jumps to the booking section.
fn book_now<'a>(i18n: &I18n) -> Element<'a, Message> {
    let pill = button(Text::new(i18n.tr("book-now")).size(typography::BODY))
        .on_press(Message::Section(sections::Message::Navigate(
            Section::Appointment,
        )))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::sticky);

    Container::new(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}
