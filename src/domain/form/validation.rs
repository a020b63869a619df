// SPDX-License-Identifier: MPL-2.0
//! Reservation form validation rules.
//!
//! Rules are pure functions of the submitted text and today's date, so the
//! caller decides what "today" means (the browser's local date on the page).
//!
//! # Rules
//!
//! - **Email**: `local@domain.tld`, no whitespace, a single `@`, and a dot
//!   inside the domain with text on both sides
//! - **Phone**: after dropping spaces, dashes and parentheses, an optional `+`
//!   then 10 to 16 digits, the first of which is not `0`
//! - **Date**: an ISO `YYYY-MM-DD` date no earlier than today

use super::field::{FieldId, FormValues};
use chrono::NaiveDate;

/// Smallest accepted phone length after cleaning, `+` included.
pub const MIN_PHONE_LEN: usize = 10;

/// Largest accepted digit count after the optional `+`.
const MAX_PHONE_DIGITS: usize = 16;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Empty at submit time; the message is specific to the field.
    Missing,
    /// Empty on blur; the message is generic.
    Required,
    InvalidEmail,
    InvalidPhone,
    /// Unparseable or in the past.
    DateNotUpcoming,
}

/// A rejected field and the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub kind: FieldErrorKind,
}

impl FieldError {
    #[must_use]
    pub fn new(field: FieldId, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }

    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match (self.kind, self.field) {
            (FieldErrorKind::Missing, FieldId::Name) => "contact-error-name-missing",
            (FieldErrorKind::Missing | FieldErrorKind::InvalidEmail, FieldId::Email) => {
                "contact-error-email-invalid"
            }
            (FieldErrorKind::Missing, FieldId::Phone) => "contact-error-phone-missing",
            (FieldErrorKind::Missing, FieldId::Date) => "contact-error-date-missing",
            (FieldErrorKind::Missing, FieldId::Time) => "contact-error-time-missing",
            (FieldErrorKind::Missing, FieldId::Guests) => "contact-error-guests-missing",
            (FieldErrorKind::InvalidEmail, _) => "contact-error-email-invalid",
            (FieldErrorKind::InvalidPhone, _) => "contact-error-phone-invalid",
            (FieldErrorKind::DateNotUpcoming, _) => "contact-error-date-past",
            (FieldErrorKind::Missing | FieldErrorKind::Required, _) => "contact-error-required",
        }
    }
}

/// Returns `true` if `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Strips the separators people type into phone numbers.
#[must_use]
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect()
}

/// Returns `true` if `phone` is a plausible international or national number.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let clean = clean_phone(phone);
    let digits = clean.strip_prefix('+').unwrap_or(&clean);
    let mut chars = digits.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    ('1'..='9').contains(&first)
        && chars.all(|c| c.is_ascii_digit())
        && digits.len() <= MAX_PHONE_DIGITS
        && clean.len() >= MIN_PHONE_LEN
}

/// Parses an ISO date as produced by `<input type="date">`.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Returns `true` if `value` is a date no earlier than `today`.
#[must_use]
pub fn is_upcoming_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| date >= today)
}

/// Validates one field on blur.
///
/// An empty required field is reported with the generic message; an empty
/// optional field passes. Non-empty values go through the field's format rule.
#[must_use]
pub fn validate_field(
    field: FieldId,
    value: &str,
    required: bool,
    today: NaiveDate,
) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return required.then(|| FieldError::new(field, FieldErrorKind::Required));
    }
    format_error(field, value, today)
}

/// Validates the whole form on submit.
///
/// Returns every failing required field in [`FieldId::REQUIRED`] order; an
/// empty result means the form may be submitted.
#[must_use]
pub fn validate_form(values: &FormValues, today: NaiveDate) -> Vec<FieldError> {
    FieldId::REQUIRED
        .into_iter()
        .filter_map(|field| {
            let value = values.get(field).trim();
            if value.is_empty() {
                Some(FieldError::new(field, FieldErrorKind::Missing))
            } else {
                format_error(field, value, today)
            }
        })
        .collect()
}

fn format_error(field: FieldId, value: &str, today: NaiveDate) -> Option<FieldError> {
    let ok = match field {
        FieldId::Email => is_valid_email(value),
        FieldId::Phone => is_valid_phone(value),
        FieldId::Date => is_upcoming_date(value, today),
        _ => true,
    };
    if ok {
        return None;
    }
    let kind = match field {
        FieldId::Email => FieldErrorKind::InvalidEmail,
        FieldId::Phone => FieldErrorKind::InvalidPhone,
        _ => FieldErrorKind::DateNotUpcoming,
    };
    Some(FieldError::new(field, kind))
}
