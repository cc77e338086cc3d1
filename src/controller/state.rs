// SPDX-License-Identifier: MPL-2.0
//! The three independent pieces of view state: theme, navigation menu and
//! testimonial carousel.

use crate::config::CAROUSEL_TRANSITION_MS;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

// =============================================================================
// ThemeMode
// =============================================================================

/// Visual theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

// =============================================================================
// NavMenuState
// =============================================================================

/// Whether the mobile navigation menu is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenuState {
    #[default]
    Closed,
    Open,
}

impl NavMenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            NavMenuState::Closed => NavMenuState::Open,
            NavMenuState::Open => NavMenuState::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == NavMenuState::Open
    }
}

// =============================================================================
// CarouselState
// =============================================================================

/// Duration of the slide between two testimonials.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(CAROUSEL_TRANSITION_MS);

/// An in-flight slide from one testimonial to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index that is sliding out.
    pub from: usize,
    pub started_at: Instant,
}

impl Transition {
    /// Fraction of the slide completed at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= TRANSITION_DURATION
    }
}

/// Cyclic cursor over a fixed, non-empty sequence of testimonials.
///
/// `active_index` is always `< len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    len: NonZeroUsize,
    transition: Option<Transition>,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            active_index: 0,
            len,
            transition: None,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of testimonials cycled through.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Moves to the next index, wrapping to 0 after the last one.
    /// Returns the previous index.
    pub fn advance(&mut self, now: Instant) -> usize {
        let previous = self.active_index;
        self.active_index = (self.active_index + 1) % self.len.get();
        if self.active_index != previous {
            self.transition = Some(Transition {
                from: previous,
                started_at: now,
            });
        }
        previous
    }

    /// Jumps to `index`. Returns the previous index, or `None` if `index` is
    /// out of range (state is left untouched).
    pub fn select(&mut self, index: usize, now: Instant) -> Option<usize> {
        if index >= self.len.get() {
            return None;
        }
        let previous = self.active_index;
        if index != previous {
            self.active_index = index;
            self.transition = Some(Transition {
                from: previous,
                started_at: now,
            });
        }
        Some(previous)
    }

    /// Drops the transition once it has run its course.
    /// Returns `true` if a transition was cleared.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.transition {
            Some(transition) if transition.is_finished(now) => {
                self.transition = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn carousel(len: usize) -> CarouselState {
        CarouselState::new(NonZeroUsize::new(len).expect("non-zero length"))
    }

    #[test]
    fn toggles_are_involutions() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
        for menu in [NavMenuState::Closed, NavMenuState::Open] {
            assert_eq!(menu.toggled().toggled(), menu);
        }
    }

    #[test]
    fn advance_wraps_around() {
        let now = Instant::now();
        let mut state = carousel(3);
        assert_eq!(state.advance(now), 0);
        assert_eq!(state.advance(now), 1);
        assert_eq!(state.advance(now), 2);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn advance_n_times_returns_to_start_for_every_start() {
        let now = Instant::now();
        for len in 1..=6 {
            for start in 0..len {
                let mut state = carousel(len);
                state.select(start, now);
                for _ in 0..len {
                    state.advance(now);
                }
                assert_eq!(state.active_index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn single_item_carousel_never_transitions() {
        let mut state = carousel(1);
        state.advance(Instant::now());
        assert_eq!(state.active_index(), 0);
        assert!(state.transition().is_none());
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut state = carousel(3);
        assert_eq!(state.select(3, Instant::now()), None);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn select_same_index_starts_no_transition() {
        let mut state = carousel(3);
        assert_eq!(state.select(0, Instant::now()), Some(0));
        assert!(state.transition().is_none());
    }

    #[test]
    fn transition_progress_and_settle() {
        let start = Instant::now();
        let mut state = carousel(3);
        state.select(2, start);

        let transition = state.transition().expect("transition started");
        assert_eq!(transition.from, 0);
        assert_abs_diff_eq!(transition.progress(start), 0.0);
        assert_abs_diff_eq!(
            transition.progress(start + TRANSITION_DURATION / 2),
            0.5,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(transition.progress(start + TRANSITION_DURATION * 2), 1.0);

        assert!(!state.settle(start + TRANSITION_DURATION / 2));
        assert!(state.settle(start + TRANSITION_DURATION));
        assert!(state.transition().is_none());
    }
}
