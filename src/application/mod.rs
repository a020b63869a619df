// SPDX-License-Identifier: MPL-2.0
//! Application layer - Page behaviors and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`gallery`]: Gallery filter and lightbox controller
//! - [`contact`]: Reservation form validation and simulated submission
//! - [`navigation`]: Mobile menu, header styling, anchor offsets
//! - [`effects`]: Reveal, parallax, fade and focus effects
//! - [`announcer`]: Screen-reader live regions
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Controllers never touch the DOM or a clock directly
//!
//! # Example
//!
//! ```
//! use savory_bites::application::gallery::GalleryController;
//! use savory_bites::domain::gallery::{Filter, GalleryItem, ImageRef, ItemIndex};
//! use savory_bites::domain::ui::TransitionTiming;
//! use savory_bites::infrastructure::headless::HeadlessGallery;
//! use savory_bites::infrastructure::scheduler::ManualScheduler;
//!
//! let items = vec![
//!     GalleryItem::new("mains", ImageRef::new("1.jpg", "Steak")),
//!     GalleryItem::new("desserts", ImageRef::new("2.jpg", "Tart")),
//! ];
//! let buttons = vec![Filter::All, Filter::from_token("mains")];
//! let mut gallery = GalleryController::new(
//!     items,
//!     buttons,
//!     TransitionTiming::default(),
//!     HeadlessGallery::new(),
//!     ManualScheduler::new(),
//! );
//!
//! gallery.apply_filter(Filter::from_token("mains"));
//! assert_eq!(gallery.visible_items(), vec![ItemIndex(0)]);
//! ```

pub mod announcer;
pub mod contact;
pub mod effects;
pub mod gallery;
pub mod navigation;
pub mod port;
