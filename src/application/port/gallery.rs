// SPDX-License-Identifier: MPL-2.0
//! Gallery view port definition.
//!
//! The [`GalleryView`] trait is everything the gallery controller writes to
//! the page. Adapters skip elements that are missing from the markup, so
//! every method is infallible.

use crate::domain::gallery::{Caption, ImageRef, ItemIndex};
use crate::domain::ui::ItemAppearance;

/// Write access to the gallery grid, the filter buttons and the lightbox.
pub trait GalleryView {
    /// Puts an item in or out of layout (`display: block` / `none`).
    fn set_item_displayed(&mut self, item: ItemIndex, displayed: bool);

    /// Applies opacity and scale to an item.
    fn set_item_appearance(&mut self, item: ItemIndex, appearance: ItemAppearance);

    /// Marks the filter button at `button` (document order) active or not.
    fn set_filter_active(&mut self, button: usize, active: bool);

    /// Renders an image and its caption into the lightbox.
    ///
    /// `None` clears the caption so a previous item's text never lingers.
    fn render_slide(&mut self, image: &ImageRef, caption: Option<&Caption>);

    /// Shows or hides the lightbox overlay.
    fn set_lightbox_visible(&mut self, visible: bool);

    /// Locks or restores background page scrolling.
    fn set_page_scroll_locked(&mut self, locked: bool);
}
