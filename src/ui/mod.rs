// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! component renders from a borrowed `ViewContext` and emits its own
//! `Message` type, which the application maps into its root message.
//!
//! - [`navbar`] - Sticky navigation bar with theme toggle and mobile menu
//! - [`sections`] - Content sections of the page in page order
//! - [`scroll`] - Section anchors and smooth scrolling
//! - [`notifications`] - Toast notifications for ambient failures
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes and the configured theme preference

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod scroll;
pub mod sections;
pub mod styles;
pub mod theming;
