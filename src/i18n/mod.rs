// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Locale resolution from the host, config, or browser settings
//! - Translation files embedded in the binary (`assets/i18n/*.ftl`)
//! - Plural-aware messages for announcements
//! - Missing keys rendered as `MISSING: <key>`

pub mod fluent;
