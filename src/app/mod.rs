// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the [`ViewStateController`] and wires it to the Iced
//! runtime: the controller is mounted when the window boots and unmounted
//! when the window is asked to close, its rotation timer runs as an abortable
//! task, and navigation requests become smooth scroll animations.

mod message;
pub mod paths;
pub mod scheduler;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{open_in_browser, LinkOpener};

use crate::config::{
    self, Config, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH, MOBILE_BREAKPOINT,
};
use crate::controller::{Change, Document, ViewStateController};
use crate::domain::TESTIMONIAL_COUNT;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::scroll::{AnchorMap, ScrollState};
use crate::ui::theming;
use iced::{window, Element, Subscription, Task, Theme};
use scheduler::TaskScheduler;
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    controller: ViewStateController,
    notifications: notifications::Manager,
    anchors: AnchorMap,
    scroll: ScrollState,
    window_width: f32,
    link_opener: LinkOpener,
    /// Time of the last update, used to interpolate transitions in `view`.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("window_width", &self.window_width)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        // The controller is unmounted before the window goes away.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and mounts the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning, Document::global())
    }

    /// Builds the application from an already loaded configuration and
    /// mounts the controller. The returned task runs the rotation timer.
    pub fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
        document: Document,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let theme = flags.theme.unwrap_or(config.general.theme).resolve();

        let mut controller = ViewStateController::new(TESTIMONIAL_COUNT, document)
            .with_theme(theme)
            .with_rotation(config.carousel.rotation());
        controller.subscribe(|change: &Change| tracing::trace!(?change, "view state changed"));

        let mut app = App {
            i18n,
            controller,
            notifications: notifications::Manager::new(),
            anchors: AnchorMap::default(),
            scroll: ScrollState::new(),
            window_width: DEFAULT_WINDOW_WIDTH,
            link_opener: open_in_browser,
            now: Instant::now(),
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        if flags.logging_failed {
            app.notifications
                .push(Notification::warning("notification-logging-error"));
        }

        let mut scheduler = TaskScheduler::new();
        app.controller.mount(&mut scheduler);

        (app, scheduler.into_task())
    }

    /// Replaces the function used to open external documents.
    #[must_use]
    pub fn with_link_opener(mut self, link_opener: LinkOpener) -> Self {
        self.link_opener = link_opener;
        self
    }

    #[must_use]
    pub fn controller(&self) -> &ViewStateController {
        &self.controller
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Window is narrower than the mobile breakpoint.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.window_width < MOBILE_BREAKPOINT
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// The Iced theme follows the document dark flag.
    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.controller.document().theme_mode())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let animating =
            self.scroll.is_animating() || self.controller.carousel().transition().is_some();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(animating),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match message {
            Message::AnimationFrame(now) | Message::Tick(now) => now,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            notifications: &mut self.notifications,
            scroll: &mut self.scroll,
            anchors: &self.anchors,
            link_opener: self.link_opener,
            now: self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::RotationTick(epoch) => {
                self.controller.on_rotation_tick_at(epoch, self.now);
                Task::none()
            }
            Message::AnimationFrame(_) => update::handle_animation_frame(&mut ctx),
            Message::PageScrolled(viewport) => {
                self.scroll.on_viewport(&viewport);
                Task::none()
            }
            Message::WindowResized(size) => {
                let was_compact = self.is_compact();
                self.window_width = size.width;
                if was_compact != self.is_compact() {
                    self.anchors = AnchorMap::for_layout(self.is_compact());
                    tracing::debug!(compact = self.is_compact(), "layout changed");
                }
                Task::none()
            }
            Message::WindowCloseRequested(_) => {
                self.controller.unmount();
                iced::exit()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            notifications: &self.notifications,
            now: self.now,
            compact: self.is_compact(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Lifecycle, NavMenuState, ThemeMode};
    use crate::domain::practice::CLINIC_MAP;
    use crate::domain::Section;
    use crate::ui::theming::ThemePreference;
    use crate::ui::{navbar, sections};
    use iced::Size;

    fn boot(flags: Flags, config: &Config) -> App {
        let (app, _task) = App::with_config(flags, config, None, Document::detached());
        app
    }

    fn failing_opener(_url: &str) -> std::io::Result<()> {
        Err(std::io::Error::other("no browser"))
    }

    #[test]
    fn boot_mounts_with_rotation_timer() {
        let app = boot(Flags::default(), &Config::default());
        assert!(app.controller().is_mounted());
        assert!(app.controller().has_timer());
        assert_eq!(app.controller().active_testimonial(), 0);
        assert_eq!(app.controller().menu(), NavMenuState::Closed);
    }

    #[test]
    fn autoplay_off_mounts_without_timer() {
        let mut config = Config::default();
        config.carousel.autoplay = false;
        let app = boot(Flags::default(), &config);
        assert!(app.controller().is_mounted());
        assert!(!app.controller().has_timer());
    }

    #[test]
    fn theme_flag_overrides_config() {
        let flags = Flags {
            theme: Some(ThemePreference::Dark),
            ..Flags::default()
        };
        let app = boot(flags, &Config::default());
        assert_eq!(app.controller().theme(), ThemeMode::Dark);
        assert!(app.controller().document().is_dark());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn theme_toggle_switches_iced_theme() {
        let mut app = boot(Flags::default(), &Config::default());
        assert_eq!(app.theme(), Theme::Light);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn config_warning_becomes_toast() {
        let (app, _task) = App::with_config(
            Flags::default(),
            &Config::default(),
            Some(config::LOAD_ERROR_KEY.to_string()),
            Document::detached(),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn toast_tick_dismisses_expired_warning() {
        let (mut app, _task) = App::with_config(
            Flags::default(),
            &Config::default(),
            Some(config::LOAD_ERROR_KEY.to_string()),
            Document::detached(),
        );

        let _ = app.update(Message::Tick(Instant::now() + std::time::Duration::from_secs(60)));

        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn logging_failure_becomes_toast() {
        let flags = Flags {
            logging_failed: true,
            ..Flags::default()
        };
        let app = boot(flags, &Config::default());
        let toast = app.notifications().visible().next().expect("toast shown");
        assert_eq!(toast.message_key(), "notification-logging-error");
    }

    #[test]
    fn rotation_tick_from_current_mount_advances() {
        let mut app = boot(Flags::default(), &Config::default());
        let Lifecycle::Mounted(epoch) = app.controller().lifecycle() else {
            panic!("expected mounted controller");
        };

        let _ = app.update(Message::RotationTick(epoch));
        assert_eq!(app.controller().active_testimonial(), 1);

        let _ = app.update(Message::RotationTick(epoch.next()));
        assert_eq!(app.controller().active_testimonial(), 1);
    }

    #[test]
    fn close_request_unmounts_and_stops_ticks() {
        let mut app = boot(Flags::default(), &Config::default());
        let Lifecycle::Mounted(epoch) = app.controller().lifecycle() else {
            panic!("expected mounted controller");
        };

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert_eq!(app.controller().lifecycle(), Lifecycle::Unmounted);
        assert!(!app.controller().has_timer());

        let _ = app.update(Message::RotationTick(epoch));
        assert_eq!(app.controller().active_testimonial(), 0);
    }

    #[test]
    fn resize_switches_layout() {
        let mut app = boot(Flags::default(), &Config::default());
        assert!(!app.is_compact());

        let _ = app.update(Message::WindowResized(Size::new(400.0, 800.0)));
        assert!(app.is_compact());
        assert_eq!(app.anchors, AnchorMap::for_layout(true));

        let _ = app.update(Message::WindowResized(Size::new(1200.0, 800.0)));
        assert!(!app.is_compact());
    }

    #[test]
    fn book_now_closes_menu_and_scrolls() {
        let mut app = boot(Flags::default(), &Config::default());
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert_eq!(app.controller().menu(), NavMenuState::Open);

        let _ = app.update(Message::Section(sections::Message::Navigate(
            Section::Appointment,
        )));
        assert_eq!(app.controller().menu(), NavMenuState::Closed);
        assert!(app.scroll().is_animating());
    }

    #[test]
    fn failing_link_opener_reports_error() {
        let mut app = boot(Flags::default(), &Config::default()).with_link_opener(failing_opener);
        let _ = app.update(Message::Section(sections::Message::OpenExternal(CLINIC_MAP)));
        assert!(app.notifications().has_notifications());
    }

    #[test]
    fn view_and_title_render() {
        let app = boot(Flags::default(), &Config::default());
        assert!(!app.title().is_empty());
        let _element = app.view();
    }
}
