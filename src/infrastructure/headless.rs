// SPDX-License-Identifier: MPL-2.0
//! In-memory view adapters.
//!
//! These implement the view ports without a browser, recording the state the
//! page would be in. Native hosts use them to drive the controllers
//! deterministically; the crate's own tests inspect them after each step.

use crate::application::navigation::HeaderStyle;
use crate::application::port::{FormView, GalleryView, LiveRegionView, RegionId, ScrollView};
use crate::domain::form::FieldId;
use crate::domain::gallery::{Caption, ImageRef, ItemIndex};
use crate::domain::ui::ItemAppearance;
use std::collections::BTreeMap;

// =============================================================================
// Gallery
// =============================================================================

/// Style state of one gallery tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub displayed: bool,
    pub appearance: ItemAppearance,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            displayed: true,
            appearance: ItemAppearance::SHOWN,
        }
    }
}

/// Rendered lightbox content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: ImageRef,
    pub caption: Option<Caption>,
}

/// Records what the gallery controller wrote.
#[derive(Debug, Clone, Default)]
pub struct HeadlessGallery {
    items: BTreeMap<ItemIndex, ItemStyle>,
    active_buttons: BTreeMap<usize, bool>,
    slide: Option<Slide>,
    render_count: usize,
    lightbox_visible: bool,
    scroll_locked: bool,
}

impl HeadlessGallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Style of an item; untouched items read as shown.
    #[must_use]
    pub fn item(&self, item: ItemIndex) -> ItemStyle {
        self.items.get(&item).copied().unwrap_or_default()
    }

    /// Positions of buttons currently marked active.
    #[must_use]
    pub fn active_buttons(&self) -> Vec<usize> {
        self.active_buttons
            .iter()
            .filter(|(_, &active)| active)
            .map(|(&button, _)| button)
            .collect()
    }

    #[must_use]
    pub fn slide(&self) -> Option<&Slide> {
        self.slide.as_ref()
    }

    /// Number of times a slide was rendered.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    #[must_use]
    pub fn lightbox_visible(&self) -> bool {
        self.lightbox_visible
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl GalleryView for HeadlessGallery {
    fn set_item_displayed(&mut self, item: ItemIndex, displayed: bool) {
        self.items.entry(item).or_default().displayed = displayed;
    }

    fn set_item_appearance(&mut self, item: ItemIndex, appearance: ItemAppearance) {
        self.items.entry(item).or_default().appearance = appearance;
    }

    fn set_filter_active(&mut self, button: usize, active: bool) {
        self.active_buttons.insert(button, active);
    }

    fn render_slide(&mut self, image: &ImageRef, caption: Option<&Caption>) {
        self.slide = Some(Slide {
            image: image.clone(),
            caption: caption.cloned(),
        });
        self.render_count += 1;
    }

    fn set_lightbox_visible(&mut self, visible: bool) {
        self.lightbox_visible = visible;
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

// =============================================================================
// Reservation form
// =============================================================================

/// Records what the contact controller wrote.
#[derive(Debug, Clone)]
pub struct HeadlessForm {
    errors: BTreeMap<FieldId, String>,
    submit_label: String,
    submit_enabled: bool,
    form_visible: bool,
    success_visible: bool,
    success_scrolls: usize,
    resets: usize,
    min_date: Option<String>,
}

impl HeadlessForm {
    /// Creates a visible form whose submit button reads `submit_label`.
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            errors: BTreeMap::new(),
            submit_label: submit_label.into(),
            submit_enabled: true,
            form_visible: true,
            success_visible: false,
            success_scrolls: 0,
            resets: 0,
            min_date: None,
        }
    }

    /// Message shown for a field, if its error slot is visible.
    #[must_use]
    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Fields with a visible error, in field order.
    #[must_use]
    pub fn error_fields(&self) -> Vec<FieldId> {
        self.errors.keys().copied().collect()
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    #[must_use]
    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    #[must_use]
    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    #[must_use]
    pub fn success_scrolls(&self) -> usize {
        self.success_scrolls
    }

    #[must_use]
    pub fn resets(&self) -> usize {
        self.resets
    }

    #[must_use]
    pub fn min_date(&self) -> Option<&str> {
        self.min_date.as_deref()
    }
}

impl FormView for HeadlessForm {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    fn submit_label(&self) -> String {
        self.submit_label.clone()
    }

    fn set_submit_button(&mut self, label: &str, enabled: bool) {
        self.submit_label = label.to_string();
        self.submit_enabled = enabled;
    }

    fn set_form_visible(&mut self, visible: bool) {
        self.form_visible = visible;
    }

    fn set_success_visible(&mut self, visible: bool) {
        self.success_visible = visible;
    }

    fn scroll_to_success(&mut self) {
        self.success_scrolls += 1;
    }

    fn reset_fields(&mut self) {
        self.resets += 1;
    }

    fn set_min_date(&mut self, iso_date: &str) {
        self.min_date = Some(iso_date.to_string());
    }
}

// =============================================================================
// Live regions
// =============================================================================

/// Records live regions currently attached and every message announced.
#[derive(Debug, Clone, Default)]
pub struct HeadlessLiveRegions {
    attached: BTreeMap<RegionId, String>,
    history: Vec<String>,
}

impl HeadlessLiveRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of regions still attached, oldest first.
    #[must_use]
    pub fn attached(&self) -> Vec<&str> {
        self.attached.values().map(String::as_str).collect()
    }

    /// Every message ever announced.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl LiveRegionView for HeadlessLiveRegions {
    fn add_region(&mut self, id: RegionId, message: &str) {
        self.attached.insert(id, message.to_string());
        self.history.push(message.to_string());
    }

    fn remove_region(&mut self, id: RegionId) {
        self.attached.remove(&id);
    }
}

// =============================================================================
// Scroll
// =============================================================================

/// Records the header style and hero transform last applied.
#[derive(Debug, Clone, Default)]
pub struct HeadlessScroll {
    header: Option<HeaderStyle>,
    hero_transform: Option<String>,
    writes: usize,
}

impl HeadlessScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(&self) -> Option<HeaderStyle> {
        self.header
    }

    #[must_use]
    pub fn hero_transform(&self) -> Option<&str> {
        self.hero_transform.as_deref()
    }

    /// Number of header updates applied.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScrollView for HeadlessScroll {
    fn set_header_style(&mut self, style: HeaderStyle) {
        self.header = Some(style);
        self.writes += 1;
    }

    fn set_hero_transform(&mut self, transform: &str) {
        self.hero_transform = Some(transform.to_string());
    }
}
