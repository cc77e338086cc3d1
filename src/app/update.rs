// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers borrow the pieces of application state they need through
//! [`UpdateContext`] and translate component messages into controller
//! operations, scroll animations or toasts.

use super::Message;
use crate::controller::ViewStateController;
use crate::domain::practice::ExternalDocument;
use crate::error::Error;
use crate::ui::notifications::{self, Notification};
use crate::ui::scroll::{snap_page_to, AnchorMap, ScrollState};
use crate::ui::{navbar, sections};
use iced::Task;
use std::time::Instant;

/// Opens a URL outside the application.
pub type LinkOpener = fn(&str) -> std::io::Result<()>;

/// Opens `url` in the system browser.
pub fn open_in_browser(url: &str) -> std::io::Result<()> {
    open::that(url)
}

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub controller: &'a mut ViewStateController,
    pub notifications: &'a mut notifications::Manager,
    pub scroll: &'a mut ScrollState,
    pub anchors: &'a AnchorMap,
    pub link_opener: LinkOpener,
    pub now: Instant,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::ToggleMenu => {
            ctx.controller.toggle_menu();
            Task::none()
        }
        navbar::Message::ToggleTheme => {
            ctx.controller.toggle_theme();
            Task::none()
        }
        navbar::Message::Navigate(section) => navigate(ctx, section.id()),
    }
}

pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::Navigate(section) => navigate(ctx, section.id()),
        sections::Message::SelectTestimonial(index) => {
            ctx.controller.select_testimonial_at(index, ctx.now);
            Task::none()
        }
        sections::Message::OpenExternal(document) => {
            open_external(ctx, document);
            Task::none()
        }
    }
}

/// Navigates to `section_id`. Unknown ids only close the mobile menu.
pub fn navigate(ctx: &mut UpdateContext<'_>, section_id: &str) -> Task<Message> {
    if let Some(anchor) = ctx.controller.navigate_to(section_id, ctx.anchors) {
        ctx.scroll.start(&anchor, ctx.now);
    }
    Task::none()
}

/// Advances the running animations to `now`.
pub fn handle_animation_frame(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.controller.settle_transition(ctx.now);
    match ctx.scroll.frame(ctx.now) {
        Some(offset) => snap_page_to(offset),
        None => Task::none(),
    }
}

fn open_external(ctx: &mut UpdateContext<'_>, document: ExternalDocument) {
    match (ctx.link_opener)(document.url) {
        Ok(()) => {
            tracing::info!(title = document.title, "opened external document");
        }
        Err(err) => {
            let err = Error::Browser(err.to_string());
            tracing::warn!(title = document.title, error = %err, "could not open external document");
            ctx.notifications
                .push(Notification::error(err.i18n_key()).with_arg("url", document.url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Document, NavMenuState, ThemeMode};
    use crate::domain::practice::BOOKING_FORM;
    use crate::domain::{Section, TESTIMONIAL_COUNT};

    struct Harness {
        controller: ViewStateController,
        notifications: notifications::Manager,
        scroll: ScrollState,
        anchors: AnchorMap,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                controller: ViewStateController::new(TESTIMONIAL_COUNT, Document::detached()),
                notifications: notifications::Manager::new(),
                scroll: ScrollState::new(),
                anchors: AnchorMap::default(),
            }
        }

        fn context(&mut self, link_opener: LinkOpener) -> UpdateContext<'_> {
            UpdateContext {
                controller: &mut self.controller,
                notifications: &mut self.notifications,
                scroll: &mut self.scroll,
                anchors: &self.anchors,
                link_opener,
                now: Instant::now(),
            }
        }
    }

    fn opens_fine(_url: &str) -> std::io::Result<()> {
        Ok(())
    }

    fn never_opens(_url: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("no browser"))
    }

    #[test]
    fn navbar_toggles_reach_the_controller() {
        let mut harness = Harness::new();
        let mut ctx = harness.context(opens_fine);

        let _ = handle_navbar_message(&mut ctx, navbar::Message::ToggleTheme);
        let _ = handle_navbar_message(&mut ctx, navbar::Message::ToggleMenu);

        assert_eq!(harness.controller.theme(), ThemeMode::Dark);
        assert_eq!(harness.controller.menu(), NavMenuState::Open);
    }

    #[test]
    fn navigation_closes_menu_and_starts_scrolling() {
        let mut harness = Harness::new();
        harness.controller.toggle_menu();
        let mut ctx = harness.context(opens_fine);

        let _ = handle_navbar_message(&mut ctx, navbar::Message::Navigate(Section::Services));

        assert_eq!(harness.controller.menu(), NavMenuState::Closed);
        assert!(harness.scroll.is_animating());
    }

    #[test]
    fn unknown_section_only_closes_menu() {
        let mut harness = Harness::new();
        harness.controller.toggle_menu();
        let mut ctx = harness.context(opens_fine);

        let _ = navigate(&mut ctx, "nonexistent-section");

        assert_eq!(harness.controller.menu(), NavMenuState::Closed);
        assert!(!harness.scroll.is_animating());
    }

    #[test]
    fn selecting_a_testimonial_updates_the_carousel() {
        let mut harness = Harness::new();
        let mut ctx = harness.context(opens_fine);

        let _ = handle_section_message(&mut ctx, sections::Message::SelectTestimonial(2));

        assert_eq!(harness.controller.active_testimonial(), 2);
    }

    #[test]
    fn failed_link_shows_error_toast() {
        let mut harness = Harness::new();
        let mut ctx = harness.context(never_opens);

        let _ = handle_section_message(&mut ctx, sections::Message::OpenExternal(BOOKING_FORM));

        let toast = harness.notifications.visible().next().expect("toast shown");
        assert_eq!(toast.message_key(), "notification-open-link-error");
        assert_eq!(toast.message_args()[0].1, BOOKING_FORM.url);
    }

    #[test]
    fn opened_link_shows_nothing() {
        let mut harness = Harness::new();
        let mut ctx = harness.context(opens_fine);

        let _ = handle_section_message(&mut ctx, sections::Message::OpenExternal(BOOKING_FORM));

        assert!(!harness.notifications.has_notifications());
    }

    #[test]
    fn animation_frame_settles_finished_transition() {
        let mut harness = Harness::new();
        let start = Instant::now();
        harness.controller.advance_testimonial_at(start);
        assert!(harness.controller.carousel().transition().is_some());

        let mut ctx = harness.context(opens_fine);
        ctx.now = start + crate::controller::TRANSITION_DURATION;
        let _ = handle_animation_frame(&mut ctx);

        assert!(harness.controller.carousel().transition().is_none());
    }
}
