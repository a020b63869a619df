// SPDX-License-Identifier: MPL-2.0
//! Reservation form view port definition.

use crate::domain::form::FieldId;

/// Write access to the reservation form and its success message.
pub trait FormView {
    /// Shows `message` in the field's error slot and flags the input.
    fn show_field_error(&mut self, field: FieldId, message: &str);

    /// Hides the field's error slot and restores the input border.
    fn clear_field_error(&mut self, field: FieldId);

    /// Current text of the submit button.
    fn submit_label(&self) -> String;

    /// Sets the submit button text and whether it can be clicked.
    fn set_submit_button(&mut self, label: &str, enabled: bool);

    fn set_form_visible(&mut self, visible: bool);

    fn set_success_visible(&mut self, visible: bool);

    /// Smoothly scrolls the success message into view.
    fn scroll_to_success(&mut self);

    /// Restores every field to its initial value.
    fn reset_fields(&mut self);

    /// Sets the earliest selectable reservation date (`YYYY-MM-DD`).
    fn set_min_date(&mut self, iso_date: &str);
}
