// SPDX-License-Identifier: MPL-2.0
//! View state controller for the brochure page.
//!
//! [`ViewStateController`] owns the three independent pieces of view state
//! (theme, mobile menu and testimonial carousel) together with the repeating
//! rotation timer. Every operation is total: it either changes state or does
//! nothing, and it never fails.
//!
//! # Lifecycle
//!
//! ```text
//! Created ──mount()──▶ Mounted(epoch) ──unmount()──▶ Unmounted
//!                          ▲                              │
//!                          └──────────mount()─────────────┘
//! ```
//!
//! The rotation timer exists only while mounted. Mounting twice does not
//! start a second timer, and dropping a mounted controller cancels it.
//!
//! # Example
//!
//! ```
//! use clinic_brochure::controller::{Document, NavMenuState, ViewStateController};
//! use clinic_brochure::domain::{Section, TESTIMONIAL_COUNT};
//!
//! let mut controller = ViewStateController::new(TESTIMONIAL_COUNT, Document::detached());
//! controller.toggle_menu();
//! let anchor = controller.navigate_to("services", &|id: &str| Section::from_id(id));
//!
//! assert_eq!(anchor, Some(Section::Services));
//! assert_eq!(controller.menu(), NavMenuState::Closed);
//! ```

mod document;
mod listeners;
mod navigation;
mod rotation;
mod scheduler;
mod state;

pub use document::Document;
pub use listeners::{Change, ChangeCause, ListenerId, Listeners};
pub use navigation::ScrollTargets;
pub use rotation::{RotationInterval, RotationSettings};
pub use scheduler::{MountEpoch, Scheduler, TimerHandle};
pub use state::{CarouselState, NavMenuState, ThemeMode, Transition, TRANSITION_DURATION};

use std::num::NonZeroUsize;
use std::time::Instant;

/// Where the controller is in its mount cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted(MountEpoch),
    Unmounted,
}

/// Owns the page's view state and the carousel rotation timer.
#[derive(Debug)]
pub struct ViewStateController {
    theme: ThemeMode,
    menu: NavMenuState,
    carousel: CarouselState,
    rotation: RotationSettings,
    lifecycle: Lifecycle,
    last_epoch: MountEpoch,
    timer: Option<TimerHandle>,
    document: Document,
    listeners: Listeners,
}

impl ViewStateController {
    /// Creates a controller in the light theme with the menu closed and the
    /// first of `testimonial_count` testimonials active. The document flag is
    /// synchronised immediately.
    #[must_use]
    pub fn new(testimonial_count: NonZeroUsize, document: Document) -> Self {
        let theme = ThemeMode::default();
        document.sync(theme);
        Self {
            theme,
            menu: NavMenuState::default(),
            carousel: CarouselState::new(testimonial_count),
            rotation: RotationSettings::default(),
            lifecycle: Lifecycle::Created,
            last_epoch: MountEpoch::default(),
            timer: None,
            document,
            listeners: Listeners::new(),
        }
    }

    /// Starts in `theme` instead of light.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self.document.sync(theme);
        self
    }

    /// Takes effect at the next mount.
    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationSettings) -> Self {
        self.rotation = rotation;
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn menu(&self) -> NavMenuState {
        self.menu
    }

    #[must_use]
    pub fn active_testimonial(&self) -> usize {
        self.carousel.active_index()
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    #[must_use]
    pub fn rotation(&self) -> RotationSettings {
        self.rotation
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted(_))
    }

    /// Whether a rotation timer is currently held.
    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Registers a callback invoked after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&Change) + Send + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // -------------------------------------------------------------------------
    // Theme and menu
    // -------------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.document.sync(self.theme);
        tracing::debug!(theme = ?self.theme, "theme toggled");
        self.listeners.notify(&Change::Theme(self.theme));
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggled();
        tracing::debug!(menu = ?self.menu, "menu toggled");
        self.listeners.notify(&Change::Menu(self.menu));
    }

    pub fn close_menu(&mut self) {
        if self.menu.is_open() {
            self.menu = NavMenuState::Closed;
            tracing::debug!("menu closed");
            self.listeners.notify(&Change::Menu(self.menu));
        }
    }

    /// Resolves `section_id` to a scroll anchor and closes the menu.
    ///
    /// The menu is closed whether or not the id resolves. An unknown id
    /// returns `None` and changes nothing else.
    pub fn navigate_to<T>(&mut self, section_id: &str, targets: &T) -> Option<T::Anchor>
    where
        T: ScrollTargets + ?Sized,
    {
        let anchor = targets.resolve(section_id);
        if anchor.is_none() {
            tracing::debug!(section_id, "navigation target not found");
        }
        self.close_menu();
        anchor
    }

    // -------------------------------------------------------------------------
    // Carousel
    // -------------------------------------------------------------------------

    /// Makes testimonial `index` active.
    ///
    /// `index` must be below the testimonial count. An out-of-range index is
    /// a caller bug: it panics in debug builds and is ignored otherwise.
    /// The rotation timer is not restarted; the next tick advances from
    /// `index`.
    pub fn select_testimonial(&mut self, index: usize) {
        self.select_testimonial_at(index, Instant::now());
    }

    /// [`select_testimonial`](Self::select_testimonial) with an explicit clock.
    pub fn select_testimonial_at(&mut self, index: usize, now: Instant) {
        debug_assert!(
            index < self.carousel.len(),
            "testimonial index {index} out of range (count {})",
            self.carousel.len()
        );
        match self.carousel.select(index, now) {
            Some(previous) if previous != index => {
                tracing::debug!(from = previous, to = index, "testimonial selected");
                self.listeners.notify(&Change::Testimonial {
                    from: previous,
                    to: index,
                    cause: ChangeCause::User,
                });
            }
            Some(_) => {}
            None => {
                tracing::warn!(
                    index,
                    count = self.carousel.len(),
                    "ignoring out-of-range testimonial selection"
                );
            }
        }
    }

    /// Moves to the next testimonial, wrapping after the last one.
    ///
    /// This is the rotation step; listeners see it as a timer change.
    pub fn advance_testimonial(&mut self) {
        self.advance_testimonial_at(Instant::now());
    }

    /// [`advance_testimonial`](Self::advance_testimonial) with an explicit clock.
    pub fn advance_testimonial_at(&mut self, now: Instant) {
        self.advance(now, ChangeCause::Timer);
    }

    /// Handles a rotation timer tick. Returns `true` if the carousel moved.
    ///
    /// Ticks are only honoured while mounted and only from the timer started
    /// by the current mount.
    pub fn on_rotation_tick(&mut self, epoch: MountEpoch) -> bool {
        self.on_rotation_tick_at(epoch, Instant::now())
    }

    /// [`on_rotation_tick`](Self::on_rotation_tick) with an explicit clock.
    pub fn on_rotation_tick_at(&mut self, epoch: MountEpoch, now: Instant) -> bool {
        match self.lifecycle {
            Lifecycle::Mounted(current) if current == epoch && self.timer.is_some() => {
                self.advance(now, ChangeCause::Timer);
                true
            }
            _ => {
                tracing::trace!(epoch = epoch.value(), "ignoring stale rotation tick");
                false
            }
        }
    }

    /// Clears a finished carousel transition. Returns `true` if one was
    /// cleared.
    pub fn settle_transition(&mut self, now: Instant) -> bool {
        self.carousel.settle(now)
    }

    fn advance(&mut self, now: Instant, cause: ChangeCause) {
        let from = self.carousel.advance(now);
        let to = self.carousel.active_index();
        tracing::debug!(from, to, ?cause, "testimonial advanced");
        if from != to {
            self.listeners.notify(&Change::Testimonial { from, to, cause });
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Activates the controller: synchronises the document flag and starts
    /// the rotation timer through `scheduler`.
    ///
    /// Returns the epoch of this mount. Mounting while already mounted is a
    /// no-op that returns the current epoch.
    pub fn mount<S>(&mut self, scheduler: &mut S) -> MountEpoch
    where
        S: Scheduler + ?Sized,
    {
        if let Lifecycle::Mounted(epoch) = self.lifecycle {
            tracing::debug!(epoch = epoch.value(), "already mounted");
            return epoch;
        }

        let epoch = self.last_epoch.next();
        self.last_epoch = epoch;
        self.lifecycle = Lifecycle::Mounted(epoch);
        self.document.sync(self.theme);

        if self.rotation.autoplay {
            let period = self.rotation.interval.as_duration();
            self.timer = Some(scheduler.start_repeating(period, epoch));
            tracing::info!(
                epoch = epoch.value(),
                period_ms = period.as_millis(),
                "rotation timer started"
            );
        } else {
            tracing::info!(epoch = epoch.value(), "mounted without autoplay");
        }

        self.listeners.notify(&Change::Mounted);
        epoch
    }

    /// Tears the controller down: cancels the rotation timer and resets the
    /// document flag. Does nothing unless mounted.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.release();
        self.lifecycle = Lifecycle::Unmounted;
        self.listeners.notify(&Change::Unmounted);
    }

    fn release(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            tracing::info!("rotation timer cancelled");
        }
        self.document.reset();
    }
}

impl Drop for ViewStateController {
    fn drop(&mut self) {
        if self.is_mounted() {
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Records timer starts and counts cancellations.
    #[derive(Default)]
    struct ManualScheduler {
        started: Vec<(Duration, MountEpoch)>,
        cancelled: Arc<AtomicUsize>,
    }

    impl ManualScheduler {
        fn cancelled(&self) -> usize {
            self.cancelled.load(Ordering::SeqCst)
        }
    }

    impl Scheduler for ManualScheduler {
        fn start_repeating(&mut self, period: Duration, epoch: MountEpoch) -> TimerHandle {
            self.started.push((period, epoch));
            let cancelled = Arc::clone(&self.cancelled);
            TimerHandle::new(move || {
                cancelled.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    fn controller(count: usize) -> ViewStateController {
        ViewStateController::new(
            NonZeroUsize::new(count).expect("non-zero count"),
            Document::detached(),
        )
    }

    fn sections(id: &str) -> Option<Section> {
        Section::from_id(id)
    }

    #[test]
    fn initial_state() {
        let c = controller(3);
        assert_eq!(c.theme(), ThemeMode::Light);
        assert_eq!(c.menu(), NavMenuState::Closed);
        assert_eq!(c.active_testimonial(), 0);
        assert_eq!(c.lifecycle(), Lifecycle::Created);
        assert!(!c.document().is_dark());
    }

    #[test]
    fn with_theme_syncs_document() {
        let c = controller(3).with_theme(ThemeMode::Dark);
        assert!(c.document().is_dark());
    }

    #[test]
    fn toggle_theme_twice_restores_mode_and_flag_tracks_each_step() {
        let mut c = controller(3);
        c.toggle_theme();
        assert_eq!(c.theme(), ThemeMode::Dark);
        assert!(c.document().is_dark());
        c.toggle_theme();
        assert_eq!(c.theme(), ThemeMode::Light);
        assert!(!c.document().is_dark());
    }

    #[test]
    fn advancing_n_times_returns_to_start() {
        for start in 0..4 {
            let mut c = controller(4);
            c.select_testimonial(start);
            for _ in 0..4 {
                c.advance_testimonial();
            }
            assert_eq!(c.active_testimonial(), start);
        }
    }

    #[test]
    fn five_ticks_over_three_testimonials_lands_on_two() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        let epoch = c.mount(&mut scheduler);
        for _ in 0..5 {
            assert!(c.on_rotation_tick(epoch));
        }
        assert_eq!(c.active_testimonial(), 2);
    }

    #[test]
    fn next_tick_advances_from_selected_index() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        let epoch = c.mount(&mut scheduler);
        c.select_testimonial(2);
        assert_eq!(c.active_testimonial(), 2);
        c.on_rotation_tick(epoch);
        assert_eq!(c.active_testimonial(), 0);
        assert_eq!(scheduler.started.len(), 1);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn out_of_range_selection_is_ignored_in_release() {
        let mut c = controller(3);
        c.select_testimonial(7);
        assert_eq!(c.active_testimonial(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn out_of_range_selection_panics_in_debug() {
        let mut c = controller(3);
        c.select_testimonial(3);
    }

    #[test]
    fn navigate_closes_menu_and_resolves_anchor() {
        let mut c = controller(3);
        c.toggle_menu();
        assert!(c.menu().is_open());
        let anchor = c.navigate_to("about", &sections);
        assert_eq!(anchor, Some(Section::About));
        assert_eq!(c.menu(), NavMenuState::Closed);
    }

    #[test]
    fn navigate_to_unknown_id_changes_nothing_but_the_menu() {
        let mut c = controller(3).with_theme(ThemeMode::Dark);
        c.select_testimonial(1);
        c.toggle_menu();

        assert_eq!(c.navigate_to("nonexistent", &sections), None);

        assert_eq!(c.menu(), NavMenuState::Closed);
        assert_eq!(c.theme(), ThemeMode::Dark);
        assert_eq!(c.active_testimonial(), 1);
    }

    #[test]
    fn mount_toggle_menu_then_navigate_to_services_closes_menu() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        c.mount(&mut scheduler);
        c.toggle_menu();
        assert_eq!(c.menu(), NavMenuState::Open);
        c.navigate_to("services", &sections);
        assert_eq!(c.menu(), NavMenuState::Closed);
    }

    #[test]
    fn mount_starts_single_timer_with_configured_period() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3).with_rotation(RotationSettings {
            interval: RotationInterval::new(8),
            autoplay: true,
        });
        let first = c.mount(&mut scheduler);
        let second = c.mount(&mut scheduler);

        assert_eq!(first, second);
        assert_eq!(scheduler.started, vec![(Duration::from_secs(8), first)]);
        assert!(c.has_timer());
    }

    #[test]
    fn default_period_is_five_seconds() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        c.mount(&mut scheduler);
        assert_eq!(scheduler.started[0].0, Duration::from_millis(5000));
    }

    #[test]
    fn unmount_cancels_timer_once_and_ignores_later_ticks() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        let epoch = c.mount(&mut scheduler);
        c.on_rotation_tick(epoch);

        c.unmount();
        c.unmount();
        assert_eq!(scheduler.cancelled(), 1);
        assert!(!c.has_timer());

        assert!(!c.on_rotation_tick(epoch));
        assert_eq!(c.active_testimonial(), 1);
        drop(c);
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn remount_ignores_ticks_from_previous_mount() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        let old = c.mount(&mut scheduler);
        c.unmount();
        let new = c.mount(&mut scheduler);

        assert_ne!(old, new);
        assert!(!c.on_rotation_tick(old));
        assert!(c.on_rotation_tick(new));
        assert_eq!(scheduler.started.len(), 2);
        assert_eq!(scheduler.cancelled(), 1);
    }

    #[test]
    fn drop_while_mounted_cancels_timer_and_resets_flag() {
        let mut scheduler = ManualScheduler::default();
        let document = Document::detached();
        let mut c = ViewStateController::new(
            NonZeroUsize::new(3).expect("non-zero count"),
            document.clone(),
        );
        c.mount(&mut scheduler);
        c.toggle_theme();
        assert!(document.is_dark());

        drop(c);
        assert_eq!(scheduler.cancelled(), 1);
        assert!(!document.is_dark());
    }

    #[test]
    fn autoplay_disabled_mounts_without_timer() {
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3).with_rotation(RotationSettings {
            autoplay: false,
            ..RotationSettings::default()
        });
        let epoch = c.mount(&mut scheduler);
        assert!(c.is_mounted());
        assert!(scheduler.started.is_empty());
        assert!(!c.on_rotation_tick(epoch));
    }

    #[test]
    fn mount_resyncs_document_flag() {
        let mut scheduler = ManualScheduler::default();
        let c_doc = Document::detached();
        let mut c = ViewStateController::new(
            NonZeroUsize::new(2).expect("non-zero count"),
            c_doc.clone(),
        )
        .with_theme(ThemeMode::Dark);
        c_doc.reset();
        c.mount(&mut scheduler);
        assert!(c_doc.is_dark());
    }

    #[test]
    fn listeners_see_changes_after_they_apply() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = ManualScheduler::default();
        let mut c = controller(3);
        let sink = Arc::clone(&seen);
        let id = c.subscribe(move |change| sink.lock().expect("lock").push(*change));

        let epoch = c.mount(&mut scheduler);
        c.toggle_theme();
        c.close_menu();
        c.select_testimonial(0);
        c.select_testimonial(2);
        c.on_rotation_tick(epoch);
        c.unmount();
        assert!(c.unsubscribe(id));
        c.toggle_menu();

        assert_eq!(
            *seen.lock().expect("lock"),
            vec![
                Change::Mounted,
                Change::Theme(ThemeMode::Dark),
                Change::Testimonial {
                    from: 0,
                    to: 2,
                    cause: ChangeCause::User
                },
                Change::Testimonial {
                    from: 2,
                    to: 0,
                    cause: ChangeCause::Timer
                },
                Change::Unmounted,
            ]
        );
    }

    #[test]
    fn advance_is_reported_as_a_timer_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut c = controller(3);
        let sink = Arc::clone(&seen);
        c.subscribe(move |change| sink.lock().expect("lock").push(*change));

        c.advance_testimonial();

        assert_eq!(
            *seen.lock().expect("lock"),
            vec![Change::Testimonial {
                from: 0,
                to: 1,
                cause: ChangeCause::Timer
            }]
        );
    }

    #[test]
    fn settle_transition_clears_after_duration() {
        let start = Instant::now();
        let mut c = controller(3);
        c.select_testimonial_at(1, start);
        assert!(c.carousel().transition().is_some());
        assert!(c.settle_transition(start + TRANSITION_DURATION));
        assert!(c.carousel().transition().is_none());
    }
}
