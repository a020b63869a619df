// SPDX-License-Identifier: MPL-2.0
//! Gallery item model, built once from the page markup.

use super::filter::{Category, Filter};

/// Position of an item in document order.
///
/// Items are never added or removed during a session, so the position is a
/// stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemIndex(pub usize);

/// The displayable image of a gallery item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Title and description shown under the lightbox image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Caption {
    pub title: String,
    pub description: String,
}

impl Caption {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// One gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    category: Category,
    image: ImageRef,
    caption: Option<Caption>,
    visible: bool,
}

impl GalleryItem {
    /// Creates a visible item; markup starts with every item shown.
    pub fn new(category: impl Into<Category>, image: ImageRef) -> Self {
        Self {
            category: category.into(),
            image,
            caption: None,
            visible: true,
        }
    }

    /// Attaches the overlay caption.
    #[must_use]
    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    #[must_use]
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Re-derives visibility from a filter. Returns the previous visibility.
    pub fn apply_filter(&mut self, filter: &Filter) -> bool {
        let was_visible = self.visible;
        self.visible = filter.matches(&self.category);
        was_visible
    }
}
