// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Filter transition timings, paired with the stylesheet
//! - **Contact**: Simulated submission delays
//! - **Navigation**: Header scroll threshold and anchor offset
//! - **Effects**: Parallax, reveal stagger and scroll throttling
//! - **Accessibility**: Live-region lifetime

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Delay before a re-shown gallery item fades back in (in milliseconds).
///
/// Gives the browser one frame to apply `display: block` before the
/// opacity transition starts.
pub const DEFAULT_SHOW_DELAY_MS: u32 = 10;

/// Delay before a fading gallery item is removed from layout (in milliseconds).
///
/// Must match the `.gallery-item` transition duration in the stylesheet.
pub const DEFAULT_HIDE_DELAY_MS: u32 = 300;

/// Maximum transition delay accepted from configuration (in milliseconds).
pub const MAX_TRANSITION_DELAY_MS: u32 = 5_000;

/// Scale applied to gallery items while they fade out.
pub const DEFAULT_HIDDEN_SCALE: f32 = 0.8;

/// Minimum scale for hidden gallery items.
pub const MIN_HIDDEN_SCALE: f32 = 0.0;

/// Maximum scale for hidden gallery items.
pub const MAX_HIDDEN_SCALE: f32 = 1.0;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated network latency before the success message appears (in milliseconds).
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 2_000;

/// How long the success message stays before the form is restored (in milliseconds).
pub const DEFAULT_RESET_DELAY_MS: u32 = 5_000;

/// Maximum simulated delay accepted from configuration (in milliseconds).
pub const MAX_CONTACT_DELAY_MS: u32 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll offset past which the header switches to its scrolled style (in pixels).
pub const DEFAULT_HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Extra gap left above an anchor target below the fixed header (in pixels).
pub const DEFAULT_ANCHOR_MARGIN_PX: f64 = 20.0;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Hero translation per scrolled pixel.
pub const DEFAULT_PARALLAX_RATE: f64 = -0.5;

/// Parallax rate bounds.
pub const MIN_PARALLAX_RATE: f64 = -2.0;
pub const MAX_PARALLAX_RATE: f64 = 2.0;

/// Transition delay added per element within a reveal group (in milliseconds).
pub const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;

/// Minimum interval between two handled scroll events (in milliseconds, ~60fps).
pub const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;

// ==========================================================================
// Accessibility Defaults
// ==========================================================================

/// Lifetime of a screen-reader announcement before its region is removed (in milliseconds).
pub const DEFAULT_ANNOUNCE_TTL_MS: u32 = 1_000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when no other source resolves.
pub const DEFAULT_LOCALE: &str = "en-US";
