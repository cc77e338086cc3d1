// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::controller::MountEpoch;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use crate::ui::theming::ThemePreference;
use iced::widget::scrollable::Viewport;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Notification(notifications::NotificationMessage),
    /// Carousel rotation tick, stamped with the mount that started the timer.
    RotationTick(MountEpoch),
    /// Frame while a smooth scroll or a carousel transition is running.
    AnimationFrame(Instant),
    /// The page scrollable moved or was resized.
    PageScrolled(Viewport),
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `bn`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override; takes precedence over `settings.toml`.
    pub theme: Option<ThemePreference>,
    /// Logging could not be initialized; reported once the window is up.
    pub logging_failed: bool,
}
