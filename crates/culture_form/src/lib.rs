//! Contact Form
//!
//! Typed form values, field-level rules, and the submission lifecycle:
//!
//! ```text
//! Idle -> Submitting -> Succeeded -> (reset window) -> Idle
//!              \--> Idle (failure, values kept)
//! ```
//!
//! The form never mutates content. Labels, success copy and the option lists
//! that selects are checked against all come from the validated
//! [`culture_content::ContentDocument`].

pub mod fields;
pub mod form;
pub mod phase;
pub mod rules;
pub mod submission;

pub use fields::{ContactFormValues, ContactSubmission, FieldName, SelectField, TextField};
pub use form::{
    ContactForm, FormError, FormEvent, FormSettings, Notice, NoticeKind, SubmitOutcome,
    SubmitStart, SUBMIT_FAILED_NOTICE,
};
pub use phase::{PhaseError, PhaseMachine, PhaseTransition, SubmissionPhase};
pub use rules::{check_all, check_field, FieldError, Rule};
pub use submission::{SimulatedSubmission, SubmissionError, SubmissionHandler, SubmissionReceipt};
