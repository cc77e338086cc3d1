// SPDX-License-Identifier: MPL-2.0
//! Carousel auto-rotation settings.

use crate::config::{
    DEFAULT_ROTATION_INTERVAL_SECS, MAX_ROTATION_INTERVAL_SECS, MIN_ROTATION_INTERVAL_SECS,
};
use std::time::Duration;

/// Delay between two automatic carousel advances, in seconds.
///
/// Values outside the supported range are clamped.
///
/// ```
/// use clinic_brochure::controller::RotationInterval;
///
/// assert_eq!(RotationInterval::default().value(), 5);
/// assert_eq!(RotationInterval::new(0).value(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationInterval(u32);

impl RotationInterval {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_ROTATION_INTERVAL_SECS, MAX_ROTATION_INTERVAL_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(DEFAULT_ROTATION_INTERVAL_SECS)
    }
}

/// How the carousel rotates once the page is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSettings {
    pub interval: RotationInterval,
    /// When `false`, mounting starts no timer and only user selection moves
    /// the carousel.
    pub autoplay: bool,
}

impl Default for RotationSettings {
    fn default() -> Self {
        Self {
            interval: RotationInterval::default(),
            autoplay: true,
        }
    }
}
