// SPDX-License-Identifier: MPL-2.0
//! Change notification for hosts that do not re-render reactively.
//!
//! Listeners are invoked synchronously, in registration order, after the
//! state mutation they describe has been applied.

use super::state::{NavMenuState, ThemeMode};
use std::fmt;

/// What moved the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Timer,
    User,
}

/// A state mutation reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Theme(ThemeMode),
    Menu(NavMenuState),
    Testimonial {
        from: usize,
        to: usize,
        cause: ChangeCause,
    },
    Mounted,
    Unmounted,
}

/// Identifier returned by [`Listeners::add`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&Change) + Send>;

/// Ordered set of change callbacks.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(ListenerId, Callback)>,
    next_id: u64,
}

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: impl FnMut(&Change) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns `true` if the listener was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &Change) {
        for (_, callback) in &mut self.entries {
            callback(change);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
