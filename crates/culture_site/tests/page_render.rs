//! The page rendered from a live contact form at each phase.

use std::path::PathBuf;

use culture_form::{
    ContactForm, ContactFormValues, SimulatedSubmission, SubmissionError, SubmissionReceipt,
    SubmitStart, SUBMIT_FAILED_NOTICE,
};
use culture_site::{FormView, Site, SiteConfig};

fn site() -> Site {
    let config = SiteConfig {
        content_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../content/home.json"),
        ..SiteConfig::default()
    };
    Site::init(config).unwrap()
}

fn jo_lee() -> ContactFormValues {
    ContactFormValues {
        full_name: "Jo Lee".to_string(),
        organisation: "Acme".to_string(),
        email: "jo@acme.com".to_string(),
        engagement_type: "sprint".to_string(),
        budget_range: "3k-7k".to_string(),
        message: "We need help aligning culture.".to_string(),
        consent: true,
        ..ContactFormValues::default()
    }
}

fn render_with(site: &Site, form: &ContactForm<SimulatedSubmission>) -> String {
    let mut state = site.initial_state(2026);
    state.form = FormView::of(form);
    site.render(&state)
}

#[test]
fn blank_form_shows_idle_button() {
    let site = site();
    let form = site.contact_form(site.simulated_handler(false));
    let html = render_with(&site, &form);
    assert!(html.contains("<form class=\"contact-form\""));
    assert!(html.contains("<button type=\"submit\">Send enquiry</button>"));
    assert!(!html.contains("field-error"));
    assert!(!html.contains("toast"));
}

#[test]
fn submitting_disables_the_button() {
    let site = site();
    let mut form = site.contact_form(site.simulated_handler(false));
    form.fill(jo_lee());
    assert!(matches!(form.begin_submit().unwrap(), SubmitStart::Ready(_)));

    let html = render_with(&site, &form);
    assert!(html.contains("disabled=\"\""));
    assert!(html.contains(">Sending...</button>"));
    assert!(html.contains("value=\"Jo Lee\""));
}

#[test]
fn consent_error_is_inline() {
    let site = site();
    let mut form = site.contact_form(site.simulated_handler(false));
    form.fill(ContactFormValues {
        consent: false,
        ..jo_lee()
    });
    assert!(matches!(form.begin_submit().unwrap(), SubmitStart::Invalid(_)));

    let html = render_with(&site, &form);
    assert_eq!(html.matches("class=\"field-error\"").count(), 1);
    assert!(html.contains("id=\"consent-error\">You must agree to be contacted</p>"));
}

#[test]
fn success_replaces_form_with_confirmation() {
    let site = site();
    let mut form = site.contact_form(site.simulated_handler(false));
    form.fill(jo_lee());
    form.begin_submit().unwrap();
    form.complete_submit(Ok(SubmissionReceipt::new())).unwrap();

    let html = render_with(&site, &form);
    assert!(html.contains("<h3>Thank you!</h3>"));
    assert!(html.contains("toast toast-success"));
    assert!(html.contains("I&#39;ll be in touch within 24 hours."));
    assert!(!html.contains("<form class=\"contact-form\""));
}

#[test]
fn failure_keeps_values_and_shows_error_toast() {
    let site = site();
    let mut form = site.contact_form(site.simulated_handler(true));
    form.fill(jo_lee());
    form.begin_submit().unwrap();
    form.complete_submit(Err(SubmissionError::Unavailable("down".to_string())))
        .unwrap();

    let html = render_with(&site, &form);
    assert!(html.contains("toast toast-error"));
    assert!(html.contains(&culture_site::page::escape(SUBMIT_FAILED_NOTICE)));
    assert!(html.contains("value=\"Jo Lee\""));
    assert!(html.contains("<button type=\"submit\">Send enquiry</button>"));
}
