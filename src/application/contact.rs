// SPDX-License-Identifier: MPL-2.0
//! Reservation form submission.
//!
//! There is no backend: a valid submission is acknowledged after a fixed
//! simulated latency, and the form comes back after the success message has
//! been shown for a while.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --submit_delay--> Succeeded --reset_delay--> Idle
//! ```
//!
//! A submit that arrives while not idle is ignored (the button is disabled
//! anyway). The pending phase task is tracked and any other task is dropped
//! on arrival.

use crate::application::port::{FormView, Scheduler, TaskId, TaskOwner};
use crate::domain::form::{validate_field, validate_form, FieldError, FieldId, FormValues};
use crate::i18n::fluent::I18n;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::time::Duration;

const SUBMITTING_KEY: &str = "contact-submitting";

/// Value for the date input's `min` attribute.
#[must_use]
pub fn min_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Deferred steps of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTask {
    /// The simulated request completed.
    Acknowledge,
    /// The success message has been shown long enough.
    Restore,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; these errors are now shown.
    Rejected(Vec<FieldError>),
    /// Validation passed and the simulated request started.
    Accepted,
    /// A submission is already in flight.
    Busy,
}

/// Localized strings the controller writes into the page.
#[derive(Debug, Clone, Default)]
pub struct ContactMessages {
    submitting: String,
    errors: HashMap<&'static str, String>,
}

impl ContactMessages {
    /// Resolves every message the form can show.
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        let keys = [
            "contact-error-name-missing",
            "contact-error-email-invalid",
            "contact-error-phone-missing",
            "contact-error-phone-invalid",
            "contact-error-date-missing",
            "contact-error-date-past",
            "contact-error-time-missing",
            "contact-error-guests-missing",
            "contact-error-required",
        ];
        Self {
            submitting: i18n.tr(SUBMITTING_KEY),
            errors: keys.into_iter().map(|key| (key, i18n.tr(key))).collect(),
        }
    }

    #[must_use]
    pub fn error(&self, error: &FieldError) -> &str {
        let key = error.i18n_key();
        self.errors.get(key).map_or(key, String::as_str)
    }

    #[must_use]
    pub fn submitting(&self) -> &str {
        &self.submitting
    }
}

/// Delays of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    pub submit_delay: Duration,
    pub reset_delay: Duration,
}

impl Default for SubmissionTiming {
    fn default() -> Self {
        use crate::config::defaults::{DEFAULT_RESET_DELAY_MS, DEFAULT_SUBMIT_DELAY_MS};
        Self {
            submit_delay: Duration::from_millis(u64::from(DEFAULT_SUBMIT_DELAY_MS)),
            reset_delay: Duration::from_millis(u64::from(DEFAULT_RESET_DELAY_MS)),
        }
    }
}

/// Owns validation display and the submission lifecycle of the form.
#[derive(Debug)]
pub struct ContactController<V, S> {
    phase: SubmissionPhase,
    pending: Option<TaskId>,
    idle_label: Option<String>,
    messages: ContactMessages,
    timing: SubmissionTiming,
    view: V,
    scheduler: S,
}

impl<V: FormView, S: Scheduler<ContactTask>> ContactController<V, S> {
    pub fn new(messages: ContactMessages, timing: SubmissionTiming, view: V, scheduler: S) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            pending: None,
            idle_label: None,
            messages,
            timing,
            view,
            scheduler,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Prevents picking a date before today.
    pub fn set_min_date(&mut self, today: NaiveDate) {
        self.view.set_min_date(&min_date(today));
    }

    /// Validates and, if valid, starts the simulated submission.
    pub fn submit(&mut self, values: &FormValues, today: NaiveDate) -> SubmitOutcome {
        if self.phase != SubmissionPhase::Idle {
            tracing::debug!(phase = ?self.phase, "submit ignored while busy");
            return SubmitOutcome::Busy;
        }

        for field in FieldId::ALL {
            self.view.clear_field_error(field);
        }

        let errors = validate_form(values, today);
        if !errors.is_empty() {
            for error in &errors {
                self.view
                    .show_field_error(error.field, self.messages.error(error));
            }
            tracing::debug!(errors = errors.len(), "reservation rejected by validation");
            return SubmitOutcome::Rejected(errors);
        }

        self.idle_label = Some(self.view.submit_label());
        self.view
            .set_submit_button(self.messages.submitting(), false);
        self.phase = SubmissionPhase::Submitting;
        self.pending = Some(
            self.scheduler
                .schedule(self.timing.submit_delay, ContactTask::Acknowledge),
        );
        tracing::info!("reservation submitted");
        SubmitOutcome::Accepted
    }

    /// Validates one field when it loses focus.
    pub fn field_blur(
        &mut self,
        field: FieldId,
        value: &str,
        required: bool,
        today: NaiveDate,
    ) -> Option<FieldError> {
        self.view.clear_field_error(field);
        let error = validate_field(field, value, required, today)?;
        self.view
            .show_field_error(field, self.messages.error(&error));
        Some(error)
    }

    /// Hides a field's error as soon as the user types into it.
    pub fn field_input(&mut self, field: FieldId) {
        self.view.clear_field_error(field);
    }

    /// Applies a fired lifecycle task.
    pub fn on_task(&mut self, id: TaskId, task: ContactTask) {
        if self.pending != Some(id) {
            tracing::debug!(%id, ?task, "dropping superseded contact task");
            return;
        }
        self.pending = None;
        match (self.phase, task) {
            (SubmissionPhase::Submitting, ContactTask::Acknowledge) => {
                self.view.set_form_visible(false);
                self.view.set_success_visible(true);
                self.view.scroll_to_success();
                self.phase = SubmissionPhase::Succeeded;
                self.pending = Some(
                    self.scheduler
                        .schedule(self.timing.reset_delay, ContactTask::Restore),
                );
                tracing::info!("reservation acknowledged");
            }
            (SubmissionPhase::Succeeded, ContactTask::Restore) => self.restore(),
            (phase, task) => {
                tracing::warn!(?phase, ?task, "contact task does not match phase");
            }
        }
    }

    fn restore(&mut self) {
        self.view.reset_fields();
        self.view.set_form_visible(true);
        self.view.set_success_visible(false);
        let label = self
            .idle_label
            .take()
            .unwrap_or_else(|| self.view.submit_label());
        self.view.set_submit_button(&label, true);
        self.phase = SubmissionPhase::Idle;
    }
}

impl<V: FormView, S: Scheduler<ContactTask>> TaskOwner for ContactController<V, S> {
    type Task = ContactTask;
    type Scheduler = S;

    fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn deliver(&mut self, id: TaskId, task: ContactTask) {
        self.on_task(id, task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::form::FieldErrorKind;
    use crate::infrastructure::headless::HeadlessForm;
    use crate::infrastructure::scheduler::{AdvanceClock, ManualScheduler};

    type Controller = ContactController<HeadlessForm, ManualScheduler<ContactTask>>;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
    }

    fn controller() -> Controller {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        ContactController::new(
            ContactMessages::from_i18n(&i18n),
            SubmissionTiming::default(),
            HeadlessForm::new("Book a Table"),
            ManualScheduler::new(),
        )
    }

    fn valid_values() -> FormValues {
        FormValues::new()
            .with(FieldId::Name, "Ada Lovelace")
            .with(FieldId::Email, "a@b.co")
            .with(FieldId::Phone, "+1 555 123 4567")
            .with(FieldId::Date, "2026-11-01")
            .with(FieldId::Time, "19:00")
            .with(FieldId::Guests, "2")
    }

    #[test]
    fn invalid_email_shows_message_and_blocks() {
        let mut contact = controller();
        let values = valid_values().with(FieldId::Email, "bad");
        let outcome = contact.submit(&values, today());

        assert!(matches!(outcome, SubmitOutcome::Rejected(ref e) if e.len() == 1));
        assert_eq!(
            contact.view().error(FieldId::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(contact.phase(), SubmissionPhase::Idle);
        assert_eq!(contact.scheduler().pending_count(), 0);
    }

    #[test]
    fn resubmitting_clears_previous_errors() {
        let mut contact = controller();
        contact.submit(&FormValues::new(), today());
        assert_eq!(contact.view().error_fields().len(), 6);

        contact.submit(&valid_values(), today());
        assert!(contact.view().error_fields().is_empty());
    }

    #[test]
    fn valid_submission_runs_full_lifecycle() {
        let mut contact = controller();
        assert_eq!(contact.submit(&valid_values(), today()), SubmitOutcome::Accepted);
        assert_eq!(contact.phase(), SubmissionPhase::Submitting);
        assert!(!contact.view().submit_enabled());
        assert_eq!(contact.view().submit_label(), "Submitting...");

        contact.advance(Duration::from_millis(1_999));
        assert!(contact.view().form_visible());

        contact.advance(Duration::from_millis(1));
        assert_eq!(contact.phase(), SubmissionPhase::Succeeded);
        assert!(!contact.view().form_visible());
        assert!(contact.view().success_visible());
        assert_eq!(contact.view().success_scrolls(), 1);

        contact.advance(Duration::from_millis(5_000));
        assert_eq!(contact.phase(), SubmissionPhase::Idle);
        assert!(contact.view().form_visible());
        assert!(!contact.view().success_visible());
        assert_eq!(contact.view().resets(), 1);
        assert!(contact.view().submit_enabled());
        assert_eq!(contact.view().submit_label(), "Book a Table");
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let mut contact = controller();
        contact.submit(&valid_values(), today());
        assert_eq!(contact.submit(&valid_values(), today()), SubmitOutcome::Busy);
        assert_eq!(contact.scheduler().pending_count(), 1);
    }

    #[test]
    fn blur_reports_single_field() {
        let mut contact = controller();
        let error = contact
            .field_blur(FieldId::Phone, "12", true, today())
            .expect("too short");
        assert_eq!(error.kind, FieldErrorKind::InvalidPhone);
        assert_eq!(
            contact.view().error(FieldId::Phone),
            Some("Please enter a valid phone number")
        );

        contact.field_input(FieldId::Phone);
        assert_eq!(contact.view().error(FieldId::Phone), None);
    }

    #[test]
    fn min_date_is_today_in_iso_format() {
        let mut contact = controller();
        contact.set_min_date(today());
        assert_eq!(contact.view().min_date(), Some("2026-10-15"));
    }
}
