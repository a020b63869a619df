// SPDX-License-Identifier: MPL-2.0
//! Cosmetic page effects.
//!
//! Most of this is pure state or arithmetic, and the browser adapter applies
//! the resulting class names and inline styles. [`ScrollEffects`] writes
//! through the [`ScrollView`] port itself, since it owns a trailing timer.

use crate::application::gallery::Key;
use crate::application::navigation::HeaderStyle;
use crate::application::port::{Scheduler, ScrollView, TaskId, TaskOwner};
use crate::domain::ui::Opacity;
use std::collections::HashSet;
use std::time::Duration;

/// Selectors whose elements fade in as they enter the viewport.
///
/// Stagger delays restart at zero for each selector.
pub const REVEAL_GROUPS: [&str; 7] = [
    ".feature-card",
    ".menu-item",
    ".gallery-item",
    ".team-member",
    ".testimonial",
    ".award-item",
    ".value-card",
];

/// Class marking an element as a reveal candidate.
pub const SCROLL_ANIMATE_CLASS: &str = "scroll-animate";
/// Class added once a reveal candidate has been seen.
pub const ANIMATE_CLASS: &str = "animate";
/// Class on `<body>` while the user navigates with the keyboard.
pub const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

/// Fraction of an element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// =============================================================================
// Reveal on scroll
// =============================================================================

/// Transition delay of the `index`-th element of a reveal group.
#[must_use]
pub fn reveal_delay(index: usize, stagger: Duration) -> Duration {
    stagger.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// CSS `transition-delay` value, e.g. `0.3s`.
#[must_use]
pub fn reveal_delay_css(index: usize, stagger: Duration) -> String {
    format!("{}s", reveal_delay(index, stagger).as_secs_f64())
}

/// Remembers which observed elements have already been revealed.
///
/// Elements are identified by an opaque key assigned by the host, typically
/// their registration order.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an intersection. Returns `true` only the first time an element
    /// intersects, i.e. when the animate class must be added.
    pub fn intersected(&mut self, key: usize) -> bool {
        self.revealed.insert(key)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

// =============================================================================
// Parallax and fade
// =============================================================================

/// Hero background offset for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

/// CSS transform for the hero at a scroll position.
#[must_use]
pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y, rate))
}

/// State of a `.fade-on-scroll` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    /// Below the fold, shifted down and transparent.
    Waiting,
    /// Has entered the viewport.
    Shown,
}

impl FadeState {
    #[must_use]
    pub fn opacity(self) -> Opacity {
        match self {
            Self::Waiting => Opacity::HIDDEN,
            Self::Shown => Opacity::VISIBLE,
        }
    }

    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Waiting => "translateY(30px)",
            Self::Shown => "translateY(0)",
        }
    }
}

/// Transition applied to fading elements.
pub const FADE_TRANSITION: &str = "all 0.6s ease-out";

/// Transition applied to images fading in on load.
pub const IMAGE_FADE_TRANSITION: &str = "opacity 0.3s ease";

/// Class removed from a lazy image once its real source is set.
pub const LAZY_CLASS: &str = "lazy";

/// Opacity an image starts at: loaded images show at once, others fade in
/// from transparent when their `load` event fires.
#[must_use]
pub fn image_initial_opacity(complete: bool) -> Opacity {
    if complete {
        Opacity::VISIBLE
    } else {
        Opacity::HIDDEN
    }
}

/// Source a lazy image should load: its `data-src` when present.
#[must_use]
pub fn lazy_source<'a>(data_src: Option<&'a str>, current_src: &'a str) -> &'a str {
    data_src.filter(|src| !src.is_empty()).unwrap_or(current_src)
}

// =============================================================================
// Scroll effects
// =============================================================================

/// Leading-edge rate limiter for high-frequency events such as `scroll`.
///
/// The first call passes, and further calls are refused until `interval` has
/// elapsed since the last accepted one.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns `true` if the event at `now` should be handled.
    ///
    /// `now` is any monotonic timestamp, e.g. `performance.now()`.
    pub fn ready(&mut self, now: Duration) -> bool {
        if self.remaining(now).is_zero() {
            self.last = Some(now);
            true
        } else {
            false
        }
    }

    /// Time left at `now` before the next event is accepted.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Duration {
        self.last.map_or(Duration::ZERO, |last| {
            (last + self.interval).saturating_sub(now)
        })
    }
}

/// Trailing update of a throttled scroll burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTask;

/// Header styling and hero parallax driven by the scroll position.
///
/// Scroll events are throttled: the first event of each window is applied at
/// once, and events refused inside the window arm a single trailing update
/// that applies the latest position when the window closes. The page is
/// therefore always styled for the position where scrolling stopped.
#[derive(Debug)]
pub struct ScrollEffects<V, S> {
    throttle: Throttle,
    header_threshold: f64,
    parallax_rate: f64,
    latest: f64,
    trailing: Option<TaskId>,
    view: V,
    scheduler: S,
}

impl<V: ScrollView, S: Scheduler<ScrollTask>> ScrollEffects<V, S> {
    pub fn new(
        interval: Duration,
        header_threshold: f64,
        parallax_rate: f64,
        view: V,
        scheduler: S,
    ) -> Self {
        Self {
            throttle: Throttle::new(interval),
            header_threshold,
            parallax_rate,
            latest: 0.0,
            trailing: None,
            view,
            scheduler,
        }
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Handles a scroll event at timestamp `now` and position `scroll_y`.
    pub fn scrolled(&mut self, now: Duration, scroll_y: f64) {
        self.latest = scroll_y;
        if self.throttle.ready(now) {
            if let Some(stale) = self.trailing.take() {
                self.scheduler.cancel(stale);
            }
            self.render(scroll_y);
        } else if self.trailing.is_none() {
            let wait = self.throttle.remaining(now);
            self.trailing = Some(self.scheduler.schedule(wait, ScrollTask));
        }
    }

    /// Applies the trailing update with the latest position.
    pub fn on_task(&mut self, id: TaskId, _task: ScrollTask) {
        if self.trailing != Some(id) {
            return;
        }
        self.trailing = None;
        self.render(self.latest);
    }

    fn render(&mut self, scroll_y: f64) {
        self.view
            .set_header_style(HeaderStyle::for_scroll(scroll_y, self.header_threshold));
        self.view
            .set_hero_transform(&parallax_transform(scroll_y, self.parallax_rate));
    }
}

impl<V: ScrollView, S: Scheduler<ScrollTask>> TaskOwner for ScrollEffects<V, S> {
    type Task = ScrollTask;
    type Scheduler = S;

    fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn deliver(&mut self, id: TaskId, task: ScrollTask) {
        self.on_task(id, task);
    }
}

// =============================================================================
// Keyboard focus
// =============================================================================

/// Tracks whether focus outlines should be shown.
///
/// Pressing Tab switches to keyboard navigation; any mouse press switches back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardFocus {
    active: bool,
}

impl KeyboardFocus {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Returns `Some(new_state)` when the body class must change.
    pub fn key_pressed(&mut self, key: Key) -> Option<bool> {
        (key == Key::Tab).then(|| self.set(true)).flatten()
    }

    /// Returns `Some(false)` when the body class must be removed.
    pub fn mouse_down(&mut self) -> Option<bool> {
        self.set(false)
    }

    fn set(&mut self, active: bool) -> Option<bool> {
        if self.active == active {
            return None;
        }
        self.active = active;
        Some(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::headless::HeadlessScroll;
    use crate::infrastructure::scheduler::{AdvanceClock, ManualScheduler};
    use crate::test_utils::assert_abs_diff_eq;

    const MS: Duration = Duration::from_millis(1);

    fn scroll_effects() -> ScrollEffects<HeadlessScroll, ManualScheduler<ScrollTask>> {
        ScrollEffects::new(
            16 * MS,
            100.0,
            -0.5,
            HeadlessScroll::new(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn reveal_delay_staggers_by_index() {
        let stagger = Duration::from_millis(100);
        assert_eq!(reveal_delay(0, stagger), Duration::ZERO);
        assert_eq!(reveal_delay(3, stagger), Duration::from_millis(300));
        assert_eq!(reveal_delay_css(0, stagger), "0s");
        assert_eq!(reveal_delay_css(5, stagger), "0.5s");
    }

    #[test]
    fn element_reveals_once() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.intersected(4));
        assert!(!tracker.intersected(4));
        assert!(tracker.intersected(5));
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_abs_diff_eq!(parallax_offset(200.0, -0.5), -100.0);
        assert_eq!(parallax_transform(200.0, -0.5), "translateY(-100px)");
    }

    #[test]
    fn fade_states() {
        assert_eq!(FadeState::Waiting.opacity(), Opacity::HIDDEN);
        assert_eq!(FadeState::Shown.transform(), "translateY(0)");
    }

    #[test]
    fn complete_images_are_not_hidden() {
        assert_eq!(image_initial_opacity(true), Opacity::VISIBLE);
        assert_eq!(image_initial_opacity(false), Opacity::HIDDEN);
    }

    #[test]
    fn lazy_images_prefer_data_src() {
        assert_eq!(lazy_source(Some("full.jpg"), "thumb.jpg"), "full.jpg");
        assert_eq!(lazy_source(Some(""), "thumb.jpg"), "thumb.jpg");
        assert_eq!(lazy_source(None, "thumb.jpg"), "thumb.jpg");
    }

    #[test]
    fn throttle_drops_calls_within_interval() {
        let mut throttle = Throttle::new(Duration::from_millis(16));
        assert!(throttle.ready(Duration::from_millis(0)));
        assert!(!throttle.ready(Duration::from_millis(5)));
        assert!(!throttle.ready(Duration::from_millis(15)));
        assert!(throttle.ready(Duration::from_millis(16)));
        assert!(!throttle.ready(Duration::from_millis(20)));
        assert_eq!(throttle.remaining(Duration::from_millis(20)), 12 * MS);
    }

    #[test]
    fn final_scroll_position_wins() {
        let mut scroll = scroll_effects();
        scroll.scrolled(Duration::ZERO, 500.0);
        scroll.scrolled(20 * MS, 300.0);
        scroll.scrolled(25 * MS, 40.0);
        assert_eq!(scroll.view().header(), Some(HeaderStyle::Scrolled));

        scroll.advance(11 * MS);
        assert_eq!(scroll.view().header(), Some(HeaderStyle::Top));
        assert_eq!(scroll.view().hero_transform(), Some("translateY(-20px)"));
    }

    #[test]
    fn burst_arms_one_trailing_update() {
        let mut scroll = scroll_effects();
        scroll.scrolled(Duration::ZERO, 0.0);
        scroll.scrolled(2 * MS, 150.0);
        scroll.scrolled(5 * MS, 180.0);
        scroll.scrolled(9 * MS, 60.0);
        assert_eq!(scroll.scheduler().pending_count(), 1);
        assert_eq!(scroll.view().writes(), 1);

        scroll.advance(16 * MS);
        assert_eq!(scroll.view().writes(), 2);
        assert_eq!(scroll.view().hero_transform(), Some("translateY(-30px)"));
    }

    #[test]
    fn accepted_event_supersedes_trailing_update() {
        let mut scroll = scroll_effects();
        scroll.scrolled(Duration::ZERO, 0.0);
        scroll.scrolled(5 * MS, 400.0);
        assert_eq!(scroll.scheduler().pending_count(), 1);

        scroll.scrolled(16 * MS, 120.0);
        assert_eq!(scroll.scheduler().pending_count(), 0);
        assert_eq!(scroll.view().header(), Some(HeaderStyle::Scrolled));
        assert_eq!(scroll.view().hero_transform(), Some("translateY(-60px)"));
    }

    #[test]
    fn keyboard_focus_follows_tab_and_mouse() {
        let mut focus = KeyboardFocus::default();
        assert_eq!(focus.key_pressed(Key::ArrowLeft), None);
        assert_eq!(focus.key_pressed(Key::Tab), Some(true));
        assert_eq!(focus.key_pressed(Key::Tab), None);
        assert!(focus.is_active());
        assert_eq!(focus.mouse_down(), Some(false));
        assert_eq!(focus.mouse_down(), None);
    }
}
