// SPDX-License-Identifier: MPL-2.0
//! [`Scheduler`](crate::application::port::Scheduler) adapters.
//!
//! - [`ManualScheduler`]: virtual clock, advanced by the host through [`AdvanceClock`]
//! - `TimeoutScheduler` (wasm32 only): browser `setTimeout` / `clearTimeout`, with
//!   each timer's callback owned until it fires or is cleared

mod manual;
#[cfg(target_arch = "wasm32")]
mod timeout;
#[cfg(any(test, target_arch = "wasm32"))]
mod timers;

pub use manual::{AdvanceClock, ManualScheduler};
#[cfg(target_arch = "wasm32")]
pub use timeout::TimeoutScheduler;
