// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Testimonial rotation interval and slide transition
//! - **Scrolling**: Smooth-scroll animation timing
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default delay between automatic testimonial advances (in seconds).
pub const DEFAULT_ROTATION_INTERVAL_SECS: u32 = 5;

/// Minimum rotation interval (in seconds).
pub const MIN_ROTATION_INTERVAL_SECS: u32 = 2;

/// Maximum rotation interval (in seconds).
pub const MAX_ROTATION_INTERVAL_SECS: u32 = 60;

/// Duration of the slide between two testimonials (in milliseconds).
pub const CAROUSEL_TRANSITION_MS: u64 = 500;

// ==========================================================================
// Scrolling Defaults
// ==========================================================================

/// Duration of a smooth-scroll animation to a section (in milliseconds).
pub const SCROLL_ANIMATION_MS: u64 = 400;

/// Frame interval used while an animation is running (in milliseconds).
pub const ANIMATION_FRAME_MS: u64 = 16;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Below this width the navbar collapses into the mobile menu.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ROTATION_INTERVAL_SECS > 0);
    assert!(MAX_ROTATION_INTERVAL_SECS >= MIN_ROTATION_INTERVAL_SECS);
    assert!(DEFAULT_ROTATION_INTERVAL_SECS >= MIN_ROTATION_INTERVAL_SECS);
    assert!(DEFAULT_ROTATION_INTERVAL_SECS <= MAX_ROTATION_INTERVAL_SECS);

    // The slide must finish well before the next automatic advance.
    assert!(CAROUSEL_TRANSITION_MS < MIN_ROTATION_INTERVAL_SECS as u64 * 1000);

    assert!(ANIMATION_FRAME_MS > 0);
    assert!(SCROLL_ANIMATION_MS > ANIMATION_FRAME_MS);

    assert!(MIN_WINDOW_WIDTH > 0.0);
    assert!(MIN_WINDOW_HEIGHT > 0.0);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MOBILE_BREAKPOINT > MIN_WINDOW_WIDTH);
};
