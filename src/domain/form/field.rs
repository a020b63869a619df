// SPDX-License-Identifier: MPL-2.0
//! Reservation form fields and submitted values.

use std::collections::BTreeMap;
use std::fmt;

/// A field of the reservation form.
///
/// The element id of each field is its lowercase name; its error slot is the
/// id followed by `Error` (e.g. `emailError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
}

impl FieldId {
    /// Every field in document order.
    pub const ALL: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Date,
        FieldId::Time,
        FieldId::Guests,
        FieldId::Message,
    ];

    /// Fields checked on submit, in the order errors are reported.
    pub const REQUIRED: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Date,
        FieldId::Time,
        FieldId::Guests,
    ];

    /// Returns the element id of the input.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Guests => "guests",
            FieldId::Message => "message",
        }
    }

    /// Returns the element id of the error message slot.
    #[must_use]
    pub fn error_slot_id(self) -> String {
        format!("{}Error", self.element_id())
    }

    /// Looks a field up by element id.
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, FieldId::Message)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Raw values read from the form at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    values: BTreeMap<FieldId, String>,
}

impl FormValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Returns the raw value, or an empty string for an absent field.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }
}
