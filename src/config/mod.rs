// SPDX-License-Identifier: MPL-2.0
//! This module handles the site configuration, loaded from a `site.toml`
//! document embedded in the page or passed by the host.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and log level
//! - `[gallery]` - Filter transition timings (the contract with the stylesheet)
//! - `[contact]` - Simulated submission delays
//! - `[navigation]` - Header scroll threshold and anchor offset
//! - `[effects]` - Parallax, reveal stagger and scroll throttling
//! - `[accessibility]` - Live-region lifetime
//!
//! Every field is optional. Accessors on each section return the effective
//! value, falling back to [`defaults`] and clamping out-of-range numbers.
//!
//! # Examples
//!
//! ```
//! use savory_bites::config::Config;
//! use std::time::Duration;
//!
//! let config = Config::from_toml_str("[gallery]\nhide_delay_ms = 450\n").unwrap();
//! assert_eq!(config.gallery.timing().hide_delay, Duration::from_millis(450));
//! assert_eq!(config.gallery.timing().show_delay, Duration::from_millis(10));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::TransitionTiming;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Maximum verbosity for the console log layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_filter(self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Console log verbosity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl GeneralConfig {
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }
}

/// Gallery filter transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Delay before re-shown items fade in (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_delay_ms: Option<u32>,

    /// Delay before faded items leave the layout (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_delay_ms: Option<u32>,

    /// Scale of items while fading out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_scale: Option<f32>,
}

impl GalleryConfig {
    /// Returns the effective transition timing.
    #[must_use]
    pub fn timing(&self) -> TransitionTiming {
        let show = self
            .show_delay_ms
            .unwrap_or(DEFAULT_SHOW_DELAY_MS)
            .min(MAX_TRANSITION_DELAY_MS);
        let hide = self
            .hide_delay_ms
            .unwrap_or(DEFAULT_HIDE_DELAY_MS)
            .min(MAX_TRANSITION_DELAY_MS);
        TransitionTiming::new(
            Duration::from_millis(u64::from(show)),
            Duration::from_millis(u64::from(hide)),
            self.hidden_scale.unwrap_or(DEFAULT_HIDDEN_SCALE),
        )
    }
}

/// Contact form submission settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactConfig {
    /// Simulated latency before the success message (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_delay_ms: Option<u32>,

    /// Time the success message stays before the form returns (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_delay_ms: Option<u32>,
}

impl ContactConfig {
    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        millis(self.submit_delay_ms, DEFAULT_SUBMIT_DELAY_MS, MAX_CONTACT_DELAY_MS)
    }

    #[must_use]
    pub fn reset_delay(&self) -> Duration {
        millis(self.reset_delay_ms, DEFAULT_RESET_DELAY_MS, MAX_CONTACT_DELAY_MS)
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NavigationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_scroll_threshold_px: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_margin_px: Option<f64>,
}

impl NavigationConfig {
    #[must_use]
    pub fn header_scroll_threshold(&self) -> f64 {
        non_negative(self.header_scroll_threshold_px, DEFAULT_HEADER_SCROLL_THRESHOLD_PX)
    }

    #[must_use]
    pub fn anchor_margin(&self) -> f64 {
        non_negative(self.anchor_margin_px, DEFAULT_ANCHOR_MARGIN_PX)
    }
}

/// Cosmetic scroll effect settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EffectsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_rate: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_stagger_ms: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_throttle_ms: Option<u32>,
}

impl EffectsConfig {
    #[must_use]
    pub fn parallax_rate(&self) -> f64 {
        let rate = self.parallax_rate.unwrap_or(DEFAULT_PARALLAX_RATE);
        if rate.is_finite() {
            rate.clamp(MIN_PARALLAX_RATE, MAX_PARALLAX_RATE)
        } else {
            DEFAULT_PARALLAX_RATE
        }
    }

    #[must_use]
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(u64::from(
            self.reveal_stagger_ms.unwrap_or(DEFAULT_REVEAL_STAGGER_MS),
        ))
    }

    #[must_use]
    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(u64::from(
            self.scroll_throttle_ms.unwrap_or(DEFAULT_SCROLL_THROTTLE_MS),
        ))
    }
}

/// Accessibility settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessibilityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announce_ttl_ms: Option<u32>,
}

impl AccessibilityConfig {
    #[must_use]
    pub fn announce_ttl(&self) -> Duration {
        Duration::from_millis(u64::from(
            self.announce_ttl_ms.unwrap_or(DEFAULT_ANNOUNCE_TTL_MS),
        ))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Site configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub contact: ContactConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub effects: EffectsConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

impl Config {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML or a field
    /// has the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses an optional document, falling back to defaults.
    ///
    /// Returns a tuple of (config, optional_warning) so the caller can log
    /// why the defaults were used.
    #[must_use]
    pub fn from_optional_toml(content: Option<&str>) -> (Self, Option<String>) {
        match content {
            None => (Self::default(), None),
            Some(text) => match Self::from_toml_str(text) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err.to_string())),
            },
        }
    }

    /// Serializes the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(Error::from)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn millis(value: Option<u32>, default: u32, max: u32) -> Duration {
    Duration::from_millis(u64::from(value.unwrap_or(default).min(max)))
}

fn non_negative(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => default,
    }
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Config::from_toml_str(&content)
}

/// Loads configuration from a path, falling back to defaults.
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults plus a warning message.
#[must_use]
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err.to_string())),
    }
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = config.to_toml_string()?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                log_level: Some(LogLevel::Debug),
            },
            gallery: GalleryConfig {
                show_delay_ms: Some(20),
                hide_delay_ms: Some(450),
                hidden_scale: Some(0.5),
            },
            contact: ContactConfig {
                submit_delay_ms: Some(1_000),
                reset_delay_ms: None,
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("site.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn empty_document_yields_default_timings() {
        let config = Config::from_toml_str("").expect("empty toml is valid");
        let timing = config.gallery.timing();
        assert_eq!(timing.show_delay, Duration::from_millis(10));
        assert_eq!(timing.hide_delay, Duration::from_millis(300));
        assert_abs_diff_eq!(timing.hidden_scale.value(), 0.8, epsilon = F32_EPSILON);
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(2_000));
        assert_eq!(config.contact.reset_delay(), Duration::from_millis(5_000));
        assert_eq!(config.general.log_level(), LogLevel::Info);
    }

    #[test]
    fn invalid_toml_errors() {
        let err = Config::from_toml_str("not = valid = toml").expect_err("should fail");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn optional_toml_falls_back_with_warning() {
        let (config, warning) = Config::from_optional_toml(Some("[gallery]\nhide_delay_ms = \"x\""));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());

        let (_, warning) = Config::from_optional_toml(None);
        assert!(warning.is_none());
    }

    #[test]
    fn load_or_default_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_or_default(&temp_dir.path().join("absent.toml"));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_or_default_invalid_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("site.toml");
        fs::write(&path, "[[[").expect("failed to write invalid toml");
        let (config, warning) = load_or_default(&path);
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [gallery]
            hide_delay_ms = 999999
            hidden_scale = 3.0

            [navigation]
            header_scroll_threshold_px = -5.0

            [effects]
            parallax_rate = 10.0
            "#,
        )
        .expect("valid toml");

        let timing = config.gallery.timing();
        assert_eq!(timing.hide_delay, Duration::from_millis(u64::from(MAX_TRANSITION_DELAY_MS)));
        assert_abs_diff_eq!(timing.hidden_scale.value(), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(
            config.navigation.header_scroll_threshold(),
            DEFAULT_HEADER_SCROLL_THRESHOLD_PX
        );
        assert_abs_diff_eq!(config.effects.parallax_rate(), MAX_PARALLAX_RATE);
    }

    #[test]
    fn log_level_parses_kebab_case() {
        let config = Config::from_toml_str("[general]\nlog_level = \"warn\"").expect("valid toml");
        assert_eq!(config.general.log_level(), LogLevel::Warn);
        assert_eq!(
            config.general.log_level().as_filter(),
            tracing::level_filters::LevelFilter::WARN
        );
    }
}
