// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for visual values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Opacity
// =============================================================================

/// Element opacity, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const HIDDEN: Self = Self(0.0);
    /// Fully opaque.
    pub const VISIBLE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to the valid range.
    /// Non-finite input maps to fully opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::VISIBLE
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the CSS `opacity` value.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}", self.0)
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::VISIBLE
    }
}

// =============================================================================
// Scale
// =============================================================================

/// Uniform scale factor for a `transform: scale(..)`, within `0.0..=1.0`.
///
/// Only shrinking is meaningful for gallery items, so values above 1.0
/// are clamped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Scale(f32);

impl Scale {
    /// Natural size.
    pub const IDENTITY: Self = Self(1.0);

    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::IDENTITY
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the CSS `transform` value.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("scale({})", self.0)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale({})", self.0)
    }
}

// =============================================================================
// ItemAppearance
// =============================================================================

/// Opacity and scale applied together to a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemAppearance {
    pub opacity: Opacity,
    pub scale: Scale,
}

impl ItemAppearance {
    /// Fully shown at natural size.
    pub const SHOWN: Self = Self {
        opacity: Opacity::VISIBLE,
        scale: Scale::IDENTITY,
    };

    /// Faded out at the given scale.
    #[must_use]
    pub fn faded(scale: Scale) -> Self {
        Self {
            opacity: Opacity::HIDDEN,
            scale,
        }
    }
}

// =============================================================================
// TransitionTiming
// =============================================================================

/// Timing contract between the gallery controller and the stylesheet.
///
/// `hide_delay` must cover the CSS opacity/transform transition so items
/// leave the layout only once they are fully faded. `show_delay` only needs
/// to be long enough for the browser to lay the item out again before the
/// fade-in starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub show_delay: Duration,
    pub hide_delay: Duration,
    pub hidden_scale: Scale,
}

impl TransitionTiming {
    #[must_use]
    pub fn new(show_delay: Duration, hide_delay: Duration, hidden_scale: f32) -> Self {
        Self {
            show_delay,
            hide_delay,
            hidden_scale: Scale::new(hidden_scale),
        }
    }

    /// Appearance applied to items as soon as they start hiding.
    #[must_use]
    pub fn hiding_appearance(&self) -> ItemAppearance {
        ItemAppearance::faded(self.hidden_scale)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        use crate::config::defaults::{
            DEFAULT_HIDDEN_SCALE, DEFAULT_HIDE_DELAY_MS, DEFAULT_SHOW_DELAY_MS,
        };
        Self::new(
            Duration::from_millis(u64::from(DEFAULT_SHOW_DELAY_MS)),
            Duration::from_millis(u64::from(DEFAULT_HIDE_DELAY_MS)),
            DEFAULT_HIDDEN_SCALE,
        )
    }
}
