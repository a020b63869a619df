// SPDX-License-Identifier: MPL-2.0
//! Reservation form bound to `#contactForm`.

use super::{select, select_all, set_style};
use crate::application::port::FormView;
use crate::domain::form::{FieldId, FormValues};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions,
};

const ERROR_BORDER: &str = "#e74c3c";
const NORMAL_BORDER: &str = "#ddd";

/// [`FormView`] over the contact form and its success block.
#[derive(Debug, Clone)]
pub struct DomForm {
    document: Document,
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    success: Option<HtmlElement>,
}

impl DomForm {
    /// Binds to `#contactForm`, or returns `None` if the page has no form.
    pub fn bind(document: &Document) -> Option<Self> {
        let form = document
            .get_element_by_id("contactForm")?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        let root: &Element = &form;
        let submit = select(root, "button[type=\"submit\"]").and_then(|el| el.dyn_into().ok());
        let success = document
            .get_element_by_id("successMessage")
            .and_then(|el| el.dyn_into().ok());
        Some(Self {
            document: document.clone(),
            form,
            submit,
            success,
        })
    }

    #[must_use]
    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// Input element of a field.
    #[must_use]
    pub fn field_element(&self, field: FieldId) -> Option<Element> {
        self.document.get_element_by_id(field.element_id())
    }

    /// Reads every field's current value.
    #[must_use]
    pub fn read_values(&self) -> FormValues {
        FieldId::ALL
            .into_iter()
            .fold(FormValues::new(), |values, field| {
                let value = self
                    .field_element(field)
                    .map(|el| field_value(&el))
                    .unwrap_or_default();
                values.with(field, value)
            })
    }

    fn error_slot(&self, field: FieldId) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(&field.error_slot_id())
            .and_then(|el| el.dyn_into().ok())
    }

    fn set_border(&self, field: FieldId, color: &str) {
        if let Some(input) = self
            .field_element(field)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            set_style(&input, "border-color", color);
        }
    }
}

/// Current value of an `input`, `select` or `textarea`.
#[must_use]
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

impl FormView for DomForm {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        if let Some(slot) = self.error_slot(field) {
            slot.set_text_content(Some(message));
            set_style(&slot, "display", "block");
        }
        self.set_border(field, ERROR_BORDER);
    }

    fn clear_field_error(&mut self, field: FieldId) {
        if let Some(slot) = self.error_slot(field) {
            set_style(&slot, "display", "none");
        }
        self.set_border(field, NORMAL_BORDER);
    }

    fn submit_label(&self) -> String {
        self.submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_submit_button(&mut self, label: &str, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(label));
            button.set_disabled(!enabled);
        }
    }

    fn set_form_visible(&mut self, visible: bool) {
        set_style(&self.form, "display", if visible { "grid" } else { "none" });
    }

    fn set_success_visible(&mut self, visible: bool) {
        if let Some(success) = &self.success {
            set_style(success, "display", if visible { "block" } else { "none" });
        }
    }

    fn scroll_to_success(&mut self) {
        if let Some(success) = &self.success {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            success.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn reset_fields(&mut self) {
        self.form.reset();
        let root: &Element = &self.form;
        for slot in select_all(root, ".error-message") {
            if let Ok(slot) = slot.dyn_into::<HtmlElement>() {
                set_style(&slot, "display", "none");
            }
        }
    }

    fn set_min_date(&mut self, iso_date: &str) {
        if let Some(input) = self
            .field_element(FieldId::Date)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_min(iso_date);
        }
    }
}
