// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains visual value objects that are independent
//! of the browser.

pub mod newtypes;

pub use newtypes::{ItemAppearance, Opacity, Scale, TransitionTiming};
