// SPDX-License-Identifier: MPL-2.0
//! Scroll effects view port definition.

use crate::application::navigation::HeaderStyle;

/// Write access to the elements restyled while the page scrolls.
pub trait ScrollView {
    /// Applies the header background and shadow for `style`.
    fn set_header_style(&mut self, style: HeaderStyle);

    /// Sets the hero's CSS `transform`.
    fn set_hero_transform(&mut self, transform: &str);
}
