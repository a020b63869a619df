// SPDX-License-Identifier: MPL-2.0
//! `web-sys` adapters for the view ports.
//!
//! Adapters resolve their elements once at construction. An element that is
//! missing from the page is logged at debug level and every write to it is
//! skipped, so a page without a lightbox or form still runs the rest.

pub mod form;
pub mod gallery;
pub mod live_region;
pub mod scroll;

pub use form::DomForm;
pub use gallery::DomGallery;
pub use live_region::DomLiveRegions;
pub use scroll::DomScroll;

use crate::error::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Nodes that support CSS selector queries.
pub trait Query {
    fn query_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue>;
    fn query_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue>;
}

impl Query for Document {
    fn query_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn query_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Query for Element {
    fn query_all(&self, selector: &str) -> std::result::Result<NodeList, JsValue> {
        self.query_selector_all(selector)
    }

    fn query_one(&self, selector: &str) -> std::result::Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

/// Returns the global window.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("no global window".into()))
}

/// Returns the window's document.
pub fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| Error::Dom("window has no document".into()))
}

/// Every element under `root` matching `selector`, in document order.
///
/// An invalid selector yields an empty list.
pub fn select_all(root: &impl Query, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_all(selector) else {
        tracing::debug!(selector, "invalid selector");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element under `root` matching `selector`.
pub fn select(root: &impl Query, selector: &str) -> Option<Element> {
    let found = root.query_one(selector).ok().flatten();
    if found.is_none() {
        tracing::debug!(selector, "element not found");
    }
    found
}

/// First element matching `selector`, as an [`HtmlElement`].
pub fn select_html(root: &impl Query, selector: &str) -> Option<HtmlElement> {
    select(root, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Sets an inline style property, logging rejected values.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::debug!(property, value, error = ?err, "style rejected");
    }
}

/// Adds or removes a class.
pub fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();
    let result = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = result {
        tracing::debug!(class, error = ?err, "class change rejected");
    }
}
