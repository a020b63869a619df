// SPDX-License-Identifier: MPL-2.0
//! Gallery filter and lightbox.
//!
//! - [`GalleryController`]: filter selection, item transitions, lightbox
//! - [`LightboxState`]: circular cursor over the visible snapshot
//! - [`GalleryEvent`] / [`GalleryResponse`]: the input command table

pub mod controller;
pub mod event;
pub mod lightbox;

pub use controller::{FilterOutcome, GalleryController};
pub use event::{GalleryEvent, GalleryResponse, GalleryTask, Key};
pub use lightbox::LightboxState;
