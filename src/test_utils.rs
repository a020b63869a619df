// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Opacities, scales and scroll offsets are floats; compare them with the
//! `approx` macros re-exported here instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for `f32` style values (opacity, scale, parallax rate).
pub const F32_EPSILON: f32 = 1e-6;
