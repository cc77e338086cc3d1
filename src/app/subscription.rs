// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! The rotation timer is not a subscription: it is an abortable task owned
//! by the controller (see [`super::scheduler`]). Subscriptions here only
//! exist while there is something to animate or dismiss.

use super::Message;
use crate::config::ANIMATION_FRAME_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Interval of the toast auto-dismiss check.
const TOAST_TICK: Duration = Duration::from_millis(100);

/// Routes window resize and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Frame clock for the smooth scroll and the carousel transition.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TOAST_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
