// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! # Available Types
//!
//! - [`Filter`] / [`Category`]: Category filter selected by the filter buttons
//! - [`GalleryItem`]: One tile, with its image, caption and derived visibility

pub mod filter;
pub mod item;

pub use filter::{Category, Filter, ALL_TOKEN};
pub use item::{Caption, GalleryItem, ImageRef, ItemIndex};
