// SPDX-License-Identifier: MPL-2.0
//! Document-level dark mode flag.
//!
//! This is the one piece of globally visible state: presentation code reads
//! it to pick theme-specific styling, and the controller keeps it in step
//! with its [`ThemeMode`]. Production code shares [`Document::global`];
//! tests use [`Document::detached`] so parallel tests do not observe each
//! other.

use super::state::ThemeMode;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_DARK_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Shared handle to a dark mode flag.
#[derive(Clone)]
pub struct Document {
    dark: Arc<AtomicBool>,
}

impl Document {
    /// Handle to the process-wide flag.
    #[must_use]
    pub fn global() -> Self {
        let dark = GLOBAL_DARK_FLAG
            .get_or_init(|| Arc::new(AtomicBool::new(false)))
            .clone();
        Self { dark }
    }

    /// A private flag, independent from the process-wide one.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Acquire)
    }

    /// Theme mode the flag currently encodes.
    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub(crate) fn sync(&self, mode: ThemeMode) {
        self.dark.store(mode.is_dark(), Ordering::Release);
    }

    /// Clears the flag back to the light default.
    pub(crate) fn reset(&self) {
        self.dark.store(false, Ordering::Release);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("dark", &self.is_dark())
            .finish()
    }
}
