// SPDX-License-Identifier: MPL-2.0
//! Domain layer - page model and business rules with no browser dependency.
//!
//! This module contains pure domain types, value objects, and rules. Apart
//! from `chrono` for calendar dates it depends only on `std`, so everything
//! here is testable natively.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery items and the category filter
//!   ([`GalleryItem`](gallery::GalleryItem), [`Filter`](gallery::Filter))
//! - [`form`]: Reservation fields and validation
//!   ([`FieldId`](form::FieldId), [`FieldError`](form::FieldError))
//! - [`ui`]: Visual value objects ([`Opacity`](ui::Opacity),
//!   [`Scale`](ui::Scale), [`TransitionTiming`](ui::TransitionTiming))

pub mod form;
pub mod gallery;
pub mod ui;
