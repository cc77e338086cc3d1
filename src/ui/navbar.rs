// SPDX-License-Identifier: MPL-2.0
//! Sticky navigation bar.
//!
//! On wide windows the bar shows the section links inline. Below the mobile
//! breakpoint the links move into a dropdown opened by the hamburger button;
//! choosing a link closes it again.

use crate::controller::{NavMenuState, ThemeMode};
use crate::domain::practice::DOCTOR_SHORT_NAME;
use crate::domain::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::tooltip::Position;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: ThemeMode,
    pub menu: NavMenuState,
    /// Window is narrower than the mobile breakpoint.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    ToggleTheme,
    Navigate(Section),
}

/// Links shown as plain text; the appointment section gets a button instead.
const TEXT_LINKS: [Section; 5] = [
    Section::Home,
    Section::About,
    Section::Services,
    Section::Qualifications,
    Section::Contact,
];

/// Glyph of the theme toggle. It shows the theme a click switches to.
#[must_use]
pub fn theme_glyph(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    }
}

fn theme_hint_key(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "nav-theme-to-dark",
        ThemeMode::Dark => "nav-theme-to-light",
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu.is_open() {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(DOCTOR_SHORT_NAME)
            .size(typography::TITLE_MD)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::from_theme(theme).brand_primary),
            }),
    )
    .on_press(Message::Navigate(Section::Home))
    .padding(0)
    .style(styles::button::nav_link);

    let theme_toggle = styles::tooltip::styled(
        button(Text::new(theme_glyph(ctx.theme)).size(sizing::ICON_SM))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(styles::button::icon),
        ctx.i18n.tr(theme_hint_key(ctx.theme)),
        Position::Bottom,
    );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let glyph = if ctx.menu.is_open() { "✕" } else { "☰" };
        let hamburger = styles::tooltip::styled(
            button(Text::new(glyph).size(sizing::ICON_SM))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::icon),
            ctx.i18n.tr("nav-menu-toggle"),
            Position::Bottom,
        );
        row = row.push(theme_toggle).push(hamburger);
    } else {
        for section in TEXT_LINKS {
            row = row.push(nav_link(ctx.i18n, section));
        }
        row = row.push(theme_toggle).push(
            button(Text::new(ctx.i18n.tr("nav-book-appointment")).size(typography::BODY))
                .on_press(Message::Navigate(Section::Appointment))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = TEXT_LINKS
        .into_iter()
        .chain(std::iter::once(Section::Appointment))
        .fold(Column::new().spacing(spacing::XXS), |column, section| {
            column.push(
                button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY_LG))
                    .on_press(Message::Navigate(section))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav_link),
            )
        });

    Container::new(links)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .align_x(Horizontal::Left)
        .into()
}

fn nav_link<'a>(i18n: &I18n, section: Section) -> Element<'a, Message> {
    button(Text::new(i18n.tr(section.nav_label_key())).size(typography::BODY))
        .on_press(Message::Navigate(section))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link)
        .into()
}
