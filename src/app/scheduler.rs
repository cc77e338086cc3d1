// SPDX-License-Identifier: MPL-2.0
//! Rotation timer backed by an abortable Iced task.
//!
//! [`TaskScheduler`] turns every timer the controller starts into a task that
//! streams [`Message::RotationTick`]. The tasks are collected and handed to
//! the runtime by the caller; the returned [`TimerHandle`] aborts the stream.

use super::Message;
use crate::controller::{MountEpoch, Scheduler, TimerHandle};
use futures_util::stream::{self, Stream};
use iced::Task;
use std::time::Duration;
use tokio::time::{self as tokio_time, Interval, MissedTickBehavior};

/// Collects the tasks of the timers started during one update.
#[derive(Default)]
pub struct TaskScheduler {
    pending: Vec<Task<Message>>,
}

impl TaskScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers started and not yet handed to the runtime.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Hands the started timers over to the runtime.
    #[must_use]
    pub fn into_task(self) -> Task<Message> {
        Task::batch(self.pending)
    }
}

impl Scheduler for TaskScheduler {
    fn start_repeating(&mut self, period: Duration, epoch: MountEpoch) -> TimerHandle {
        let (task, handle) =
            Task::run(ticks(period), move |()| Message::RotationTick(epoch)).abortable();
        self.pending.push(task);

        TimerHandle::new(move || {
            tracing::debug!(epoch = epoch.value(), "rotation timer aborted");
            handle.abort();
        })
    }
}

/// Endless stream yielding once per `period`, first after one full period.
///
/// The interval is created on first poll so the stream can be built outside
/// the runtime.
pub fn ticks(period: Duration) -> impl Stream<Item = ()> + Send + 'static {
    stream::unfold(None, move |interval: Option<Interval>| async move {
        let mut interval = interval.unwrap_or_else(|| {
            let mut interval =
                tokio_time::interval_at(tokio_time::Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
        Some(((), Some(interval)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn ticks_wait_a_full_period_between_items() {
        let period = Duration::from_millis(5000);
        let start = tokio_time::Instant::now();

        let ticks: Vec<()> = ticks(period).take(3).collect().await;

        assert_eq!(ticks.len(), 3);
        assert_eq!(start.elapsed(), period * 3);
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_is_not_immediate() {
        let period = Duration::from_secs(5);
        let mut stream = Box::pin(ticks(period));

        let early = tokio_time::timeout(period - Duration::from_millis(1), stream.next()).await;
        assert!(early.is_err());
    }

    #[test]
    fn every_started_timer_is_collected() {
        let mut scheduler = TaskScheduler::new();
        let first = scheduler.start_repeating(Duration::from_secs(5), MountEpoch::default().next());
        let second = scheduler.start_repeating(Duration::from_secs(5), MountEpoch::default().next());
        assert_eq!(scheduler.pending(), 2);

        first.cancel();
        drop(second);
        let _task = scheduler.into_task();
    }
}
