// SPDX-License-Identifier: MPL-2.0
//! `clinic_brochure` is a single-page brochure for a physician's practice,
//! built with the Iced GUI framework.
//!
//! The page state (theme, mobile menu, testimonial carousel) lives in
//! [`controller::ViewStateController`], which is independent of Iced and can
//! be driven by any host. The [`app`] module hosts it in an Iced window.

pub mod app;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
