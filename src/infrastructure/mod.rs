// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`scheduler`]: Virtual-clock and `setTimeout` schedulers (implement [`Scheduler`])
//! - [`headless`]: In-memory views for native hosts and tests
//! - `dom` (wasm32 only): `web-sys` views bound to the page markup
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Browser adapters compile only for `wasm32`; everything else builds natively
//!
//! [`Scheduler`]: crate::application::port::Scheduler

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;
pub mod scheduler;

pub use headless::{HeadlessForm, HeadlessGallery, HeadlessLiveRegions, HeadlessScroll};
pub use scheduler::{AdvanceClock, ManualScheduler};
