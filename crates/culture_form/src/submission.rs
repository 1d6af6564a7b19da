//! Submission handlers.
//!
//! The form does not know where an enquiry goes. It hands a validated
//! [`ContactSubmission`] to a [`SubmissionHandler`] and awaits the outcome.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::fields::ContactSubmission;

/// Acknowledgement returned by a handler that accepted an enquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn new() -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// The handler refused this enquiry
    #[error("enquiry rejected: {0}")]
    Rejected(String),

    /// The handler could not be reached
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

impl SubmissionError {
    /// Whether sending the same enquiry again might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, SubmissionError::Unavailable(_))
    }
}

/// Receives enquiries from the contact form.
pub trait SubmissionHandler: Send + Sync {
    /// Deliver one enquiry. Awaited to completion; never cancelled by the form.
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<SubmissionReceipt, SubmissionError>> + Send;
}

/// Stand-in for a real backend: waits, logs the enquiry, and accepts it.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    latency: Duration,
    fail: bool,
}

impl SimulatedSubmission {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail: false,
        }
    }

    /// A handler that always reports the service as unavailable.
    pub fn failing(latency: Duration) -> Self {
        Self {
            latency,
            fail: true,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

impl SubmissionHandler for SimulatedSubmission {
    async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tokio::time::sleep(self.latency).await;

        if self.fail {
            warn!(email = %submission.email, "Simulated submission failure");
            return Err(SubmissionError::Unavailable(
                "simulated outage".to_string(),
            ));
        }

        let receipt = SubmissionReceipt::new();
        info!(
            submission_id = %receipt.submission_id,
            organisation = %submission.organisation,
            engagement_type = %submission.engagement_type,
            budget_range = %submission.budget_range,
            areas = submission.areas_of_interest.len(),
            "Enquiry received"
        );
        Ok(receipt)
    }
}
