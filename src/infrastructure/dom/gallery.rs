// SPDX-License-Identifier: MPL-2.0
//! Gallery grid, filter buttons and lightbox bound to page markup.

use super::{select, select_all, set_class, set_style};
use crate::application::port::GalleryView;
use crate::domain::gallery::{Caption, Filter, GalleryItem, ImageRef, ItemIndex};
use crate::domain::ui::ItemAppearance;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

const ACTIVE_CLASS: &str = "active";

/// Gallery content read from markup at startup.
#[derive(Debug, Clone, Default)]
pub struct GalleryMarkup {
    pub items: Vec<GalleryItem>,
    /// Filter of each `.filter-btn`, in document order.
    pub filters: Vec<Filter>,
}

/// Lightbox buttons the host listens on.
#[derive(Debug, Clone, Default)]
pub struct LightboxControls {
    pub close: Option<Element>,
    pub previous: Option<Element>,
    pub next: Option<Element>,
}

/// [`GalleryView`] writing inline styles and classes.
#[derive(Debug, Clone)]
pub struct DomGallery {
    body: Option<HtmlElement>,
    items: Vec<HtmlElement>,
    buttons: Vec<Element>,
    lightbox: Option<HtmlElement>,
    image: Option<HtmlImageElement>,
    caption_title: Option<Element>,
    caption_text: Option<Element>,
    controls: LightboxControls,
}

impl DomGallery {
    /// Resolves gallery elements and reads the items they describe.
    pub fn bind(document: &Document) -> (Self, GalleryMarkup) {
        let items: Vec<HtmlElement> = select_all(document, ".gallery-item")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let buttons = select_all(document, ".filter-btn");

        let markup = GalleryMarkup {
            items: items.iter().map(read_item).collect(),
            filters: buttons
                .iter()
                .map(|button| {
                    Filter::from_token(&button.get_attribute("data-filter").unwrap_or_default())
                })
                .collect(),
        };

        let lightbox = select(document, "#lightbox");
        let within = |selector: &str| lightbox.as_ref().and_then(|lb| select(lb, selector));
        let view = Self {
            body: document.body(),
            image: within(".lightbox-image").and_then(|el| el.dyn_into().ok()),
            caption_title: within(".lightbox-caption h3"),
            caption_text: within(".lightbox-caption p"),
            controls: LightboxControls {
                close: within(".lightbox-close"),
                previous: within(".lightbox-prev"),
                next: within(".lightbox-next"),
            },
            lightbox: lightbox.and_then(|el| el.dyn_into().ok()),
            items,
            buttons,
        };
        tracing::debug!(
            items = view.items.len(),
            buttons = view.buttons.len(),
            lightbox = view.lightbox.is_some(),
            "gallery markup bound"
        );
        (view, markup)
    }

    #[must_use]
    pub fn item_elements(&self) -> &[HtmlElement] {
        &self.items
    }

    #[must_use]
    pub fn button_elements(&self) -> &[Element] {
        &self.buttons
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&HtmlElement> {
        self.lightbox.as_ref()
    }

    #[must_use]
    pub fn controls(&self) -> &LightboxControls {
        &self.controls
    }
}

fn read_item(element: &HtmlElement) -> GalleryItem {
    let category = element.get_attribute("data-category").unwrap_or_default();
    let root: &Element = element;
    let image = select(root, "img")
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        .map(|img| ImageRef::new(img.src(), img.alt()))
        .unwrap_or_else(|| ImageRef::new("", ""));
    let item = GalleryItem::new(category.as_str(), image);

    match select(root, ".gallery-overlay") {
        Some(overlay) => {
            let text = |selector: &str| {
                select(&overlay, selector)
                    .and_then(|el| el.text_content())
                    .unwrap_or_default()
            };
            item.with_caption(Caption::new(text("h3"), text("p")))
        }
        None => item,
    }
}

impl GalleryView for DomGallery {
    fn set_item_displayed(&mut self, item: ItemIndex, displayed: bool) {
        if let Some(el) = self.items.get(item.0) {
            set_style(el, "display", if displayed { "block" } else { "none" });
        }
    }

    fn set_item_appearance(&mut self, item: ItemIndex, appearance: ItemAppearance) {
        if let Some(el) = self.items.get(item.0) {
            set_style(el, "opacity", &appearance.opacity.to_css());
            set_style(el, "transform", &appearance.scale.to_css());
        }
    }

    fn set_filter_active(&mut self, button: usize, active: bool) {
        if let Some(el) = self.buttons.get(button) {
            set_class(el, ACTIVE_CLASS, active);
        }
    }

    fn render_slide(&mut self, image: &ImageRef, caption: Option<&Caption>) {
        if let Some(img) = &self.image {
            img.set_src(&image.src);
            img.set_alt(&image.alt);
        }
        let (title, text) = caption.map_or(("", ""), |c| (c.title.as_str(), c.description.as_str()));
        if let Some(el) = &self.caption_title {
            el.set_text_content(Some(title));
        }
        if let Some(el) = &self.caption_text {
            el.set_text_content(Some(text));
        }
    }

    fn set_lightbox_visible(&mut self, visible: bool) {
        if let Some(lightbox) = &self.lightbox {
            set_style(lightbox, "display", if visible { "block" } else { "none" });
        }
    }

    fn set_page_scroll_locked(&mut self, locked: bool) {
        if let Some(body) = &self.body {
            set_style(body, "overflow", if locked { "hidden" } else { "auto" });
        }
    }
}
