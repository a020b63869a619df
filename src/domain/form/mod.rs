// SPDX-License-Identifier: MPL-2.0
//! Reservation form domain types and validation rules.

pub mod field;
pub mod validation;

pub use field::{FieldId, FormValues};
pub use validation::{
    is_upcoming_date, is_valid_email, is_valid_phone, validate_field, validate_form, FieldError,
    FieldErrorKind,
};
