// SPDX-License-Identifier: MPL-2.0
//! Reservation form flow: validation, simulated submission, restore.

use chrono::NaiveDate;
use savory_bites::application::announcer::{AnnounceTask, Announcer};
use savory_bites::application::contact::{
    ContactController, ContactMessages, ContactTask, SubmissionPhase, SubmissionTiming,
    SubmitOutcome,
};
use savory_bites::application::port::FormView;
use savory_bites::domain::form::{FieldId, FormValues};
use savory_bites::i18n::fluent::I18n;
use savory_bites::infrastructure::{AdvanceClock, HeadlessForm, HeadlessLiveRegions, ManualScheduler};
use savory_bites::logging::{ConsoleLayer, LogSink};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;

type Contact = ContactController<HeadlessForm, ManualScheduler<ContactTask>>;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
}

fn contact() -> Contact {
    let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
    ContactController::new(
        ContactMessages::from_i18n(&i18n),
        SubmissionTiming::default(),
        HeadlessForm::new("Book a Table"),
        ManualScheduler::new(),
    )
}

fn reservation() -> FormValues {
    FormValues::new()
        .with(FieldId::Name, "Ada Lovelace")
        .with(FieldId::Email, "ada@example.com")
        .with(FieldId::Phone, "(555) 123-4567")
        .with(FieldId::Date, "2026-10-15")
        .with(FieldId::Time, "19:30")
        .with(FieldId::Guests, "2")
}

#[test]
fn bad_email_blocks_submission() {
    let mut contact = contact();
    let mut values = reservation();
    values.set(FieldId::Email, "ada@example");

    let outcome = contact.submit(&values, today());
    assert!(matches!(outcome, SubmitOutcome::Rejected(ref errors) if errors.len() == 1));
    assert_eq!(
        contact.view().error(FieldId::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(contact.phase(), SubmissionPhase::Idle);
    assert_eq!(contact.scheduler().pending_count(), 0);
    assert!(contact.view().submit_enabled());
}

#[test]
fn fixing_the_field_clears_its_error_on_the_next_submit() {
    let mut contact = contact();
    let mut values = reservation();
    values.set(FieldId::Email, "not an email");
    contact.submit(&values, today());

    values.set(FieldId::Email, "ada@example.com");
    assert_eq!(contact.submit(&values, today()), SubmitOutcome::Accepted);
    assert!(contact.view().error_fields().is_empty());
}

#[test]
fn valid_submission_runs_the_full_lifecycle() {
    let mut contact = contact();
    assert_eq!(contact.submit(&reservation(), today()), SubmitOutcome::Accepted);
    assert_eq!(contact.phase(), SubmissionPhase::Submitting);
    assert_eq!(contact.view().submit_label(), "Submitting...");
    assert!(!contact.view().submit_enabled());

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
    assert_eq!(contact.view().submit_label(), "Book a Table");
    assert!(contact.view().submit_enabled());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut contact = contact();
    contact.submit(&reservation(), today());
    assert_eq!(contact.submit(&reservation(), today()), SubmitOutcome::Busy);
    assert_eq!(contact.scheduler().pending_count(), 1);
}

#[test]
fn success_is_announced_once_and_then_expires() {
    let mut contact = contact();
    let mut announcer: Announcer<HeadlessLiveRegions, ManualScheduler<AnnounceTask>> =
        Announcer::new(
            Duration::from_millis(1_000),
            HeadlessLiveRegions::new(),
            ManualScheduler::new(),
        );

    contact.submit(&reservation(), today());
    let before = contact.phase();
    contact.advance(Duration::from_millis(2_000));
    if before == SubmissionPhase::Submitting && contact.phase() == SubmissionPhase::Succeeded {
        announcer.announce("Thank you! Your reservation request has been sent.");
    }

    assert_eq!(
        announcer.view().attached(),
        vec!["Thank you! Your reservation request has been sent."]
    );
    announcer.advance(Duration::from_millis(1_000));
    assert!(announcer.view().attached().is_empty());
    assert_eq!(announcer.view().history().len(), 1);
}

#[test]
fn submission_is_logged() {
    let (sink, logs) = LogSink::capture();
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(sink).show_target(false));

    tracing::subscriber::with_default(subscriber, || {
        let mut contact = contact();
        contact.submit(&reservation(), today());
        contact.advance(Duration::from_millis(2_000));
    });

    assert!(logs.contains("INFO  reservation submitted"));
    assert!(logs.contains("INFO  reservation acknowledged"));
}
