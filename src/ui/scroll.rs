// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling to page sections.
//!
//! The page is one long scrollable column. Sections do not report their own
//! positions, so [`AnchorMap`] keeps the start of every anchored section as
//! a fraction of the total content height for the current layout. The
//! fraction is turned into a scroll offset with the latest viewport metrics
//! and reached through an eased [`ScrollAnimation`].

use crate::config::SCROLL_ANIMATION_MS;
use crate::controller::ScrollTargets;
use crate::domain::Section;
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Widget id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Duration of one smooth scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(SCROLL_ANIMATION_MS);

/// Rough rendered height of every block in page order, wide layout first.
///
/// The testimonial carousel and the footer are not anchored but still take
/// space, so they appear here too.
const WIDE_BLOCK_HEIGHTS: [(Option<Section>, f32); 8] = [
    (Some(Section::Home), 560.0),
    (Some(Section::About), 620.0),
    (Some(Section::Services), 560.0),
    (Some(Section::Qualifications), 700.0),
    (None, 520.0),
    (Some(Section::Appointment), 440.0),
    (Some(Section::Contact), 620.0),
    (None, 360.0),
];

const COMPACT_BLOCK_HEIGHTS: [(Option<Section>, f32); 8] = [
    (Some(Section::Home), 640.0),
    (Some(Section::About), 1080.0),
    (Some(Section::Services), 1280.0),
    (Some(Section::Qualifications), 980.0),
    (None, 620.0),
    (Some(Section::Appointment), 520.0),
    (Some(Section::Contact), 1020.0),
    (None, 620.0),
];

/// Resolved navigation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    pub section: Section,
    /// Start of the section relative to the whole content height.
    pub content_fraction: f32,
}

/// Start positions of the anchored sections for one layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorMap {
    starts: Vec<(Section, f32)>,
}

impl AnchorMap {
    /// Anchor positions for the wide (`compact == false`) or the stacked
    /// mobile layout.
    #[must_use]
    pub fn for_layout(compact: bool) -> Self {
        let blocks = if compact {
            &COMPACT_BLOCK_HEIGHTS
        } else {
            &WIDE_BLOCK_HEIGHTS
        };
        Self::from_block_heights(blocks)
    }

    fn from_block_heights(blocks: &[(Option<Section>, f32)]) -> Self {
        let total: f32 = blocks.iter().map(|(_, height)| height).sum();
        let mut offset = 0.0;
        let mut starts = Vec::with_capacity(Section::ALL.len());

        for (section, height) in blocks {
            if let Some(section) = section {
                starts.push((*section, offset / total));
            }
            offset += height;
        }

        Self { starts }
    }

    /// Start fraction of `section`.
    #[must_use]
    pub fn start_of(&self, section: Section) -> Option<f32> {
        self.starts
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, fraction)| *fraction)
    }
}

impl Default for AnchorMap {
    fn default() -> Self {
        Self::for_layout(false)
    }
}

impl ScrollTargets for AnchorMap {
    type Anchor = ScrollAnchor;

    fn resolve(&self, section_id: &str) -> Option<ScrollAnchor> {
        let section = Section::from_id(section_id)?;
        let content_fraction = self.start_of(section)?;
        Some(ScrollAnchor {
            section,
            content_fraction,
        })
    }
}

/// Cubic ease-in-out over `t` in `0.0..=1.0`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One running smooth scroll, in relative offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            started_at,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Relative offset the page should show at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= SCROLL_DURATION
    }
}

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Metrics {
    content_height: f32,
    viewport_height: f32,
    offset_y: f32,
}

impl Metrics {
    fn scroll_range(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

/// Tracks the page scroll position and any running smooth scroll.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    metrics: Option<Metrics>,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the geometry reported by the scrollable.
    pub fn on_viewport(&mut self, viewport: &Viewport) {
        let AbsoluteOffset { y, .. } = viewport.absolute_offset();
        self.record(
            viewport.content_bounds().height,
            viewport.bounds().height,
            y,
        );
    }

    fn record(&mut self, content_height: f32, viewport_height: f32, offset_y: f32) {
        self.metrics = Some(Metrics {
            content_height,
            viewport_height,
            offset_y,
        });
    }

    /// Current position as a fraction of the scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> f32 {
        match self.metrics {
            Some(metrics) if metrics.scroll_range() > 0.0 => {
                (metrics.offset_y / metrics.scroll_range()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Relative offset that brings `anchor` to the top of the viewport.
    ///
    /// Without metrics the content fraction is used as is.
    #[must_use]
    pub fn relative_target(&self, anchor: &ScrollAnchor) -> f32 {
        match self.metrics {
            Some(metrics) if metrics.scroll_range() > 0.0 => {
                let start = anchor.content_fraction * metrics.content_height;
                (start / metrics.scroll_range()).clamp(0.0, 1.0)
            }
            Some(_) => 0.0,
            None => anchor.content_fraction.clamp(0.0, 1.0),
        }
    }

    /// Begins scrolling towards `anchor`, replacing any running animation.
    pub fn start(&mut self, anchor: &ScrollAnchor, now: Instant) {
        let from = self
            .animation
            .map_or_else(|| self.relative_offset(), |running| running.offset_at(now));
        let to = self.relative_target(anchor);
        tracing::debug!(section = %anchor.section, from, to, "smooth scroll");
        self.animation = Some(ScrollAnimation::new(from, to, now));
    }

    #[must_use]
    pub fn animation(&self) -> Option<ScrollAnimation> {
        self.animation
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances the animation to `now` and returns the offset to show.
    /// The animation is dropped once its last frame has been produced.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation?;
        if animation.is_finished(now) {
            self.animation = None;
            return Some(animation.target());
        }
        Some(animation.offset_at(now))
    }
}

/// Moves the page scrollable to a relative vertical offset.
pub fn snap_page_to<Message: Send + 'static>(y: f32) -> Task<Message> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn anchors_are_ordered_and_start_at_top() {
        for compact in [false, true] {
            let map = AnchorMap::for_layout(compact);
            assert_eq!(map.start_of(Section::Home), Some(0.0));

            let fractions: Vec<f32> = Section::ALL
                .iter()
                .filter_map(|section| map.start_of(*section))
                .collect();
            assert_eq!(fractions.len(), Section::ALL.len());
            assert!(fractions.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(fractions.iter().all(|f| (0.0..1.0).contains(f)));
        }
    }

    #[test]
    fn resolve_rejects_unknown_ids() {
        let map = AnchorMap::default();
        assert!(map.resolve("nonexistent-section").is_none());
        assert!(map.resolve("").is_none());
        assert!(map.resolve("testimonials").is_none());
    }

    #[test]
    fn resolve_returns_section_anchor() {
        let map = AnchorMap::default();
        let anchor = map.resolve("contact").expect("contact is anchored");
        assert_eq!(anchor.section, Section::Contact);
        assert!(anchor.content_fraction > 0.5);
    }

    #[test]
    fn ease_in_out_is_symmetric_and_bounded() {
        assert_abs_diff_eq!(ease_in_out(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out(1.0), 1.0);
        assert_abs_diff_eq!(ease_in_out(0.25) + ease_in_out(0.75), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ease_in_out(-1.0), 0.0);
        assert_abs_diff_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn relative_target_accounts_for_viewport() {
        let mut state = ScrollState::new();
        state.record(4000.0, 1000.0, 0.0);
        let anchor = ScrollAnchor {
            section: Section::Services,
            content_fraction: 0.3,
        };
        assert_abs_diff_eq!(state.relative_target(&anchor), 0.4, epsilon = 1e-6);

        let near_end = ScrollAnchor {
            section: Section::Contact,
            content_fraction: 0.9,
        };
        assert_abs_diff_eq!(state.relative_target(&near_end), 1.0);
    }

    #[test]
    fn relative_target_without_scroll_range_is_top() {
        let mut state = ScrollState::new();
        state.record(600.0, 800.0, 0.0);
        let anchor = ScrollAnchor {
            section: Section::Contact,
            content_fraction: 0.8,
        };
        assert_abs_diff_eq!(state.relative_target(&anchor), 0.0);
    }

    #[test]
    fn animation_runs_to_target_then_stops() {
        let mut state = ScrollState::new();
        state.record(4000.0, 1000.0, 0.0);
        let anchor = ScrollAnchor {
            section: Section::Services,
            content_fraction: 0.3,
        };
        let start = Instant::now();
        state.start(&anchor, start);
        assert!(state.is_animating());

        let midway = state
            .frame(start + SCROLL_DURATION / 2)
            .expect("animation running");
        assert_abs_diff_eq!(midway, 0.2, epsilon = 1e-4);

        let last = state.frame(start + SCROLL_DURATION).expect("final frame");
        assert_abs_diff_eq!(last, 0.4, epsilon = 1e-6);
        assert!(!state.is_animating());
        assert!(state.frame(start + SCROLL_DURATION * 2).is_none());
    }

    #[test]
    fn restarting_continues_from_current_animated_offset() {
        let mut state = ScrollState::new();
        state.record(4000.0, 1000.0, 0.0);
        let start = Instant::now();
        state.start(
            &ScrollAnchor {
                section: Section::Contact,
                content_fraction: 0.75,
            },
            start,
        );

        let halfway = start + SCROLL_DURATION / 2;
        let expected_from = state.animation().expect("running").offset_at(halfway);
        state.start(
            &ScrollAnchor {
                section: Section::Home,
                content_fraction: 0.0,
            },
            halfway,
        );

        let restarted = state.animation().expect("running");
        assert_abs_diff_eq!(restarted.offset_at(halfway), expected_from, epsilon = 1e-6);
        assert_abs_diff_eq!(restarted.target(), 0.0);
    }
}
