//! Contact form lifecycle against the shipped content document.

use std::sync::Arc;
use std::time::Duration;

use culture_content::{validate_str, ContentDocument};
use culture_form::{
    ContactForm, FieldName, FormError, FormSettings, NoticeKind, SelectField, SimulatedSubmission,
    SubmissionPhase, SubmitOutcome, TextField, SUBMIT_FAILED_NOTICE,
};
use tokio::time::Instant;

fn content() -> Arc<ContentDocument> {
    Arc::new(validate_str(include_str!("../../../content/home.json")).unwrap())
}

fn fill_jo_lee<H: culture_form::SubmissionHandler>(form: &mut ContactForm<H>) {
    form.set_text(TextField::FullName, "Jo Lee");
    form.set_text(TextField::Organisation, "Acme");
    form.set_text(TextField::Email, "jo@acme.com");
    form.set_select(SelectField::EngagementType, "sprint");
    form.set_select(SelectField::BudgetRange, "3k-7k");
    form.set_text(TextField::Message, "We need help aligning culture.");
    form.set_consent(true);
}

#[tokio::test(start_paused = true)]
async fn jo_lee_enquiry_succeeds_and_resets() {
    let mut form = ContactForm::new(
        content(),
        SimulatedSubmission::default(),
        FormSettings::default(),
    );
    fill_jo_lee(&mut form);

    let started = Instant::now();
    let outcome = form.submit().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));

    assert_eq!(form.phase(), SubmissionPhase::Succeeded);
    assert!(form.success_panel_visible());
    assert_eq!(form.copy().success_title, "Thank you!");
    let notice = form.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(
        notice.message,
        "Thank you for your enquiry! I'll be in touch within 24 hours."
    );
    assert!(form.values().full_name.is_empty());
    assert!(!form.values().consent);
    assert!(form.receipt().is_some());

    // still inside the success window
    tokio::time::advance(Duration::from_secs(4)).await;
    tokio::task::yield_now().await;
    assert_eq!(form.apply_pending(), 0);
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);

    let succeeded_at = started + Duration::from_millis(1000);
    form.wait_for_reset().await;
    assert!(succeeded_at.elapsed() >= Duration::from_secs(5));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(!form.success_panel_visible());
    assert!(form.values().email.is_empty());

    let trail: Vec<(SubmissionPhase, SubmissionPhase)> =
        form.history().iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        trail,
        vec![
            (SubmissionPhase::Idle, SubmissionPhase::Submitting),
            (SubmissionPhase::Submitting, SubmissionPhase::Succeeded),
            (SubmissionPhase::Succeeded, SubmissionPhase::Idle),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn consent_missing_blocks_submission() {
    let mut form = ContactForm::new(
        content(),
        SimulatedSubmission::default(),
        FormSettings::default(),
    );
    fill_jo_lee(&mut form);
    form.set_consent(false);

    let outcome = form.submit().await.unwrap();
    let SubmitOutcome::Invalid { errors } = outcome else {
        panic!("expected field errors, got {:?}", outcome);
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, FieldName::Consent);
    assert_eq!(errors[0].message, "You must agree to be contacted");
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.history().is_empty());
    assert_eq!(form.values().full_name, "Jo Lee");

    // ticking the box clears the error without another submit
    form.set_consent(true);
    assert!(form.errors().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failed_submission_keeps_values() {
    let mut form = ContactForm::new(
        content(),
        SimulatedSubmission::failing(Duration::from_millis(1000)),
        FormSettings::default(),
    );
    fill_jo_lee(&mut form);
    form.toggle_area("measurement");
    let before = form.values().clone();

    let outcome = form.submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Failed { transient: true, .. }));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert_eq!(form.values(), &before);
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(form.notice().unwrap().message, SUBMIT_FAILED_NOTICE);
    assert!(form.submit_enabled());
}

#[tokio::test(start_paused = true)]
async fn submit_refused_during_success_window() {
    let mut form = ContactForm::new(
        content(),
        SimulatedSubmission::new(Duration::from_millis(10)),
        FormSettings {
            success_reset: Duration::from_secs(2),
        },
    );
    fill_jo_lee(&mut form);
    form.submit().await.unwrap();
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);

    let err = form.submit().await.unwrap_err();
    assert_eq!(err, FormError::Busy(SubmissionPhase::Succeeded));

    form.wait_for_reset().await;
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn earlier_window_does_not_end_the_next_one() {
    let mut form = ContactForm::new(
        content(),
        SimulatedSubmission::new(Duration::from_millis(10)),
        FormSettings::default(),
    );
    fill_jo_lee(&mut form);
    form.submit().await.unwrap();
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);

    // first window's timer fires, but its event is never applied
    tokio::task::yield_now().await;
    tokio::time::advance(Duration::from_secs(6)).await;
    tokio::task::yield_now().await;
    form.expire_success_window().unwrap();
    assert_eq!(form.phase(), SubmissionPhase::Idle);

    fill_jo_lee(&mut form);
    form.submit().await.unwrap();
    let second_success = Instant::now();
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);

    assert_eq!(form.apply_pending(), 0);
    assert_eq!(form.phase(), SubmissionPhase::Succeeded);

    form.wait_for_reset().await;
    assert!(second_success.elapsed() >= Duration::from_secs(5));
    assert_eq!(form.phase(), SubmissionPhase::Idle);
}
