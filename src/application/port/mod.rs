// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of the browser.
//!
//! # Available Ports
//!
//! - [`gallery`]: Gallery grid, filter buttons and lightbox
//! - [`form`]: Reservation form and success message
//! - [`announce`]: Screen-reader live regions
//! - [`scroll`]: Header and hero restyled on scroll
//! - [`scheduler`]: Cancellable delayed tasks
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `web-sys` handles)
//! - View methods are infallible: adapters skip missing elements
//! - No `async fn`: delayed work is expressed as scheduled task values

pub mod announce;
pub mod form;
pub mod gallery;
pub mod scheduler;
pub mod scroll;

pub use announce::{LiveRegionView, RegionId};
pub use form::FormView;
pub use gallery::GalleryView;
pub use scheduler::{Scheduler, TaskId, TaskOwner};
pub use scroll::ScrollView;
