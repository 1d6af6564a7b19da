//! Contact Form Controller
//!
//! Owns the form state (values, inline errors, submission phase) and drives
//! it through the phase machine. Copy and option lists are read from the
//! shared, immutable [`ContentDocument`].
//!
//! The success panel stays up for the reset window. The window is a tokio
//! timer that posts [`FormEvent::SuccessWindowElapsed`] back to the form;
//! the form applies it in [`ContactForm::apply_pending`] or
//! [`ContactForm::wait_for_reset`]. Each window has its own generation;
//! an event from an earlier window is ignored. Dropping the form aborts
//! the timer.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use culture_content::{ContentDocument, FormContract};

use crate::fields::{ContactFormValues, ContactSubmission, FieldName, SelectField, TextField};
use crate::phase::{PhaseError, PhaseMachine, PhaseTransition, SubmissionPhase};
use crate::rules::{check_all, check_field, FieldError};
use crate::submission::{SubmissionError, SubmissionHandler, SubmissionReceipt};

/// Shown when the handler fails. Not editable content.
pub const SUBMIT_FAILED_NOTICE: &str =
    "Sorry, your enquiry could not be sent. Please try again.";

#[derive(Debug, Clone)]
pub struct FormSettings {
    /// How long the success panel stays before the form returns to idle
    pub success_reset: Duration,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            success_reset: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Deferred actions delivered back to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The success window with this generation ran out
    SuccessWindowElapsed(u64),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Submit pressed while a submission is in flight or the success panel is up
    #[error("form is busy ({0}); submit is unavailable")]
    Busy(SubmissionPhase),

    #[error(transparent)]
    Phase(#[from] PhaseError),
}

/// First half of a submission: validation, then hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; the form stays idle with these errors shown
    Invalid(Vec<FieldError>),
    /// The form is now submitting this payload
    Ready(ContactSubmission),
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SubmitOutcome {
    Invalid { errors: Vec<FieldError> },
    Accepted { receipt: SubmissionReceipt },
    Failed { error: String, transient: bool },
}

pub struct ContactForm<H: SubmissionHandler> {
    content: Arc<ContentDocument>,
    handler: H,
    settings: FormSettings,
    values: ContactFormValues,
    errors: BTreeMap<FieldName, FieldError>,
    touched: BTreeSet<FieldName>,
    submit_attempted: bool,
    phase: PhaseMachine,
    notice: Option<Notice>,
    receipt: Option<SubmissionReceipt>,
    events_tx: mpsc::UnboundedSender<FormEvent>,
    events_rx: mpsc::UnboundedReceiver<FormEvent>,
    reset_timer: Option<JoinHandle<()>>,
    reset_generation: u64,
}

impl<H: SubmissionHandler> ContactForm<H> {
    pub fn new(content: Arc<ContentDocument>, handler: H, settings: FormSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            content,
            handler,
            settings,
            values: ContactFormValues::default(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submit_attempted: false,
            phase: PhaseMachine::new(),
            notice: None,
            receipt: None,
            events_tx,
            events_rx,
            reset_timer: None,
            reset_generation: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------------

    pub fn copy(&self) -> &FormContract {
        &self.content.contact_section.form
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.current()
    }

    pub fn history(&self) -> &[PhaseTransition] {
        self.phase.history()
    }

    /// Inline errors, in layout order.
    pub fn errors(&self) -> Vec<&FieldError> {
        self.errors.values().collect()
    }

    pub fn error_for(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.phase() != SubmissionPhase::Submitting
    }

    pub fn submit_label(&self) -> &str {
        match self.phase() {
            SubmissionPhase::Submitting => &self.copy().submit_loading_label,
            _ => &self.copy().submit_idle_label,
        }
    }

    pub fn success_panel_visible(&self) -> bool {
        self.phase() == SubmissionPhase::Succeeded
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.values.set_text(field, value);
        self.revalidate(field.field());
    }

    pub fn set_select(&mut self, field: SelectField, value: impl Into<String>) {
        self.values.set_select(field, value);
        self.revalidate(field.field());
    }

    pub fn toggle_area(&mut self, id: &str) {
        self.values.toggle_area(id);
        self.revalidate(FieldName::AreasOfInterest);
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.values.consent = consent;
        self.revalidate(FieldName::Consent);
    }

    /// Replace every value at once (prefill), revalidating as edits would.
    pub fn fill(&mut self, values: ContactFormValues) {
        self.values = values;
        for field in FieldName::ALL {
            self.revalidate(field);
        }
    }

    /// The field lost focus: validate it now and on every later edit.
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.validate_field(field);
    }

    fn revalidate(&mut self, field: FieldName) {
        if self.submit_attempted || self.touched.contains(&field) {
            self.validate_field(field);
        }
    }

    fn validate_field(&mut self, field: FieldName) {
        match check_field(field, &self.values, &self.content.contact_section.form.fields) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Validate every field and, if all pass, enter `Submitting`.
    pub fn begin_submit(&mut self) -> Result<SubmitStart, FormError> {
        let phase = self.phase();
        if phase != SubmissionPhase::Idle {
            debug!(%phase, "Submit refused");
            return Err(FormError::Busy(phase));
        }

        self.submit_attempted = true;
        let errors = check_all(&self.values, &self.content.contact_section.form.fields);
        self.errors = errors
            .iter()
            .map(|error| (error.field, error.clone()))
            .collect();

        if !errors.is_empty() {
            debug!(invalid = errors.len(), "Submit blocked by field errors");
            return Ok(SubmitStart::Invalid(errors));
        }

        self.phase
            .transition(SubmissionPhase::Submitting, "submit with valid values")?;
        self.notice = None;
        Ok(SubmitStart::Ready(self.values.to_submission()))
    }

    /// Apply the handler's outcome to a form in `Submitting`.
    pub fn complete_submit(
        &mut self,
        result: Result<SubmissionReceipt, SubmissionError>,
    ) -> Result<SubmitOutcome, FormError> {
        match result {
            Ok(receipt) => {
                self.phase
                    .transition(SubmissionPhase::Succeeded, "submission accepted")?;
                info!(submission_id = %receipt.submission_id, "Enquiry submitted");

                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: self.copy().toast_success.clone(),
                });
                self.reset_values();
                self.receipt = Some(receipt.clone());
                self.schedule_reset();
                Ok(SubmitOutcome::Accepted { receipt })
            }
            Err(error) => {
                self.phase
                    .transition(SubmissionPhase::Idle, format!("submission failed: {}", error))?;
                warn!(error = %error, "Enquiry submission failed");

                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    message: SUBMIT_FAILED_NOTICE.to_string(),
                });
                Ok(SubmitOutcome::Failed {
                    error: error.to_string(),
                    transient: error.is_transient(),
                })
            }
        }
    }

    /// Validate, hand the enquiry to the handler, and apply the outcome.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        let submission = match self.begin_submit()? {
            SubmitStart::Invalid(errors) => return Ok(SubmitOutcome::Invalid { errors }),
            SubmitStart::Ready(submission) => submission,
        };
        let result = self.handler.submit(&submission).await;
        self.complete_submit(result)
    }

    // ------------------------------------------------------------------------
    // Success window
    // ------------------------------------------------------------------------

    fn reset_values(&mut self) {
        self.values = ContactFormValues::default();
        self.errors.clear();
        self.touched.clear();
        self.submit_attempted = false;
    }

    fn schedule_reset(&mut self) {
        self.cancel_reset();
        self.reset_generation += 1;

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime; success panel stays until expire_success_window");
            return;
        };

        let tx = self.events_tx.clone();
        let after = self.settings.success_reset;
        let generation = self.reset_generation;
        self.reset_timer = Some(runtime.spawn(async move {
            tokio::time::sleep(after).await;
            // Receiver gone means the form was torn down.
            let _ = tx.send(FormEvent::SuccessWindowElapsed(generation));
        }));
    }

    fn cancel_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }

    /// Return from `Succeeded` to a blank idle form.
    pub fn expire_success_window(&mut self) -> Result<(), FormError> {
        self.cancel_reset();
        // Anything the old timer already queued is now stale.
        self.reset_generation += 1;
        self.phase
            .transition(SubmissionPhase::Idle, "success window elapsed")?;
        self.reset_values();
        Ok(())
    }

    /// Returns whether the event belonged to the current window.
    fn handle_event(&mut self, event: FormEvent) -> bool {
        match event {
            FormEvent::SuccessWindowElapsed(generation) => {
                if generation != self.reset_generation {
                    debug!(generation, current = self.reset_generation, "Stale success window event ignored");
                    return false;
                }
                self.reset_timer = None;
                if self.phase() == SubmissionPhase::Succeeded {
                    if let Err(err) = self.expire_success_window() {
                        warn!(error = %err, "Could not leave success state");
                    }
                } else {
                    debug!(phase = %self.phase(), "Success window event outside success state ignored");
                }
                true
            }
        }
    }

    /// Apply any deferred events that have already fired. Returns how many
    /// belonged to the current window.
    pub fn apply_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            if self.handle_event(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the success window to elapse and apply it.
    ///
    /// Returns immediately unless the form is in `Succeeded` with a timer
    /// running.
    pub async fn wait_for_reset(&mut self) {
        if self.phase() != SubmissionPhase::Succeeded || self.reset_timer.is_none() {
            return;
        }
        while let Some(event) = self.events_rx.recv().await {
            if self.handle_event(event) {
                break;
            }
        }
    }
}

impl<H: SubmissionHandler> Drop for ContactForm<H> {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
