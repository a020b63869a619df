// SPDX-License-Identifier: MPL-2.0
//! `savory_bites` drives the interactive parts of the Savory Bites restaurant
//! website: the gallery filter and lightbox, the reservation form, navigation
//! and scroll effects.
//!
//! The behavior lives in browser-independent controllers that talk to the page
//! through port traits and schedule delayed steps through a cancellable
//! scheduler, so it runs natively against in-memory views. On `wasm32` the
//! `site` module binds those ports to the DOM and exports `start` to
//! JavaScript.

#![doc(html_root_url = "https://docs.rs/savory_bites/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod site;

#[cfg(test)]
mod test_utils;
