// SPDX-License-Identifier: MPL-2.0
//! Repeating timers as scoped resources.
//!
//! A [`Scheduler`] starts a repeating timer and hands back a [`TimerHandle`].
//! The timer runs until the handle is cancelled or dropped, whichever comes
//! first; cancellation happens exactly once.

use std::fmt;
use std::time::Duration;

/// Identifies one mount of the controller. Ticks carry the epoch of the
/// mount that started their timer so stale ticks can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MountEpoch(u64);

impl MountEpoch {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Starts repeating timers on behalf of the controller.
pub trait Scheduler {
    /// Starts a timer delivering a tick stamped with `epoch` every `period`.
    fn start_repeating(&mut self, period: Duration, epoch: MountEpoch) -> TimerHandle;
}

/// Owning handle to a running timer.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    /// Wraps the action that stops the underlying timer.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the timer now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_handle() -> (TimerHandle, Arc<AtomicUsize>) {
        let cancels = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cancels);
        let handle = TimerHandle::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (handle, cancels)
    }

    #[test]
    fn explicit_cancel_runs_once() {
        let (handle, cancels) = counting_handle();
        handle.cancel();
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_cancels() {
        let (handle, cancels) = counting_handle();
        drop(handle);
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn epochs_increase() {
        let first = MountEpoch::default();
        assert!(first.next() > first);
        assert_eq!(first.next().value(), 1);
    }
}
