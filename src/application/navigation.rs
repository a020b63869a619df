// SPDX-License-Identifier: MPL-2.0
//! Navigation glue: the mobile menu, the header's scroll styling and the
//! offset applied when jumping to an in-page anchor under the fixed header.

use crate::config::defaults::{DEFAULT_ANCHOR_MARGIN_PX, DEFAULT_HEADER_SCROLL_THRESHOLD_PX};

/// Open/closed state of the hamburger menu.
///
/// The hamburger icon and the menu panel both carry the `active` class while
/// the menu is open, so a single flag drives both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link was followed. Returns `true` if the menu closed.
    pub fn link_clicked(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }

    /// A click landed somewhere on the page.
    ///
    /// `inside` is `true` when the target lies within the menu or the
    /// hamburger. Returns `true` if the menu closed.
    pub fn outside_click(&mut self, inside: bool) -> bool {
        if self.open && !inside {
            self.open = false;
            return true;
        }
        false
    }
}

/// Header appearance for the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// At or near the top of the page.
    Top,
    /// Scrolled past the threshold.
    Scrolled,
}

impl HeaderStyle {
    /// Picks the style for a vertical scroll offset.
    #[must_use]
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    /// Same as [`for_scroll`](Self::for_scroll) with the default threshold.
    #[must_use]
    pub fn for_default_scroll(scroll_y: f64) -> Self {
        Self::for_scroll(scroll_y, DEFAULT_HEADER_SCROLL_THRESHOLD_PX)
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Top => "rgba(255, 255, 255, 0.95)",
            Self::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    #[must_use]
    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => "0 2px 20px rgba(0, 0, 0, 0.1)",
            Self::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.15)",
        }
    }
}

/// Document scroll position that puts an anchor target just below the header.
///
/// Never negative: targets near the top of the page scroll to the top.
#[must_use]
pub fn anchor_scroll_top(target_offset_top: f64, header_height: f64, margin: f64) -> f64 {
    (target_offset_top - header_height - margin).max(0.0)
}

/// [`anchor_scroll_top`] with the default margin.
#[must_use]
pub fn default_anchor_scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    anchor_scroll_top(target_offset_top, header_height, DEFAULT_ANCHOR_MARGIN_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn toggle_flips_state() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
    }

    #[test]
    fn link_click_closes_open_menu() {
        let mut menu = NavMenu::new();
        assert!(!menu.link_clicked());
        menu.toggle();
        assert!(menu.link_clicked());
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_only_closes_when_outside() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(!menu.outside_click(true));
        assert!(menu.is_open());
        assert!(menu.outside_click(false));
        assert!(!menu.is_open());
        assert!(!menu.outside_click(false));
    }

    #[test]
    fn header_switches_past_threshold() {
        assert_eq!(HeaderStyle::for_default_scroll(0.0), HeaderStyle::Top);
        assert_eq!(HeaderStyle::for_default_scroll(100.0), HeaderStyle::Top);
        assert_eq!(HeaderStyle::for_default_scroll(100.5), HeaderStyle::Scrolled);
        assert_eq!(HeaderStyle::for_scroll(50.0, 40.0), HeaderStyle::Scrolled);
    }

    #[test]
    fn header_styles_match_stylesheet_values() {
        assert_eq!(HeaderStyle::Scrolled.background(), "rgba(255, 255, 255, 0.98)");
        assert_eq!(HeaderStyle::Top.box_shadow(), "0 2px 20px rgba(0, 0, 0, 0.1)");
    }

    #[test]
    fn anchor_offset_subtracts_header_and_margin() {
        assert_abs_diff_eq!(default_anchor_scroll_top(800.0, 80.0), 700.0);
        assert_abs_diff_eq!(anchor_scroll_top(50.0, 80.0, 20.0), 0.0);
    }
}
