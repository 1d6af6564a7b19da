//! Submission Phase Machine
//!
//! ```text
//! Idle --submit(valid)--> Submitting --success--> Succeeded --window elapsed--> Idle
//!                              |
//!                              +------failure------> Idle
//! ```
//!
//! Every transition is recorded with a timestamp and reason.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    /// Accepting input
    #[default]
    Idle,
    /// Enquiry handed to the submission handler, awaiting the outcome
    Submitting,
    /// Enquiry accepted; success panel shown until the reset window elapses
    Succeeded,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
        }
    }

    pub fn valid_transitions(&self) -> &'static [SubmissionPhase] {
        match self {
            SubmissionPhase::Idle => &[SubmissionPhase::Submitting],
            SubmissionPhase::Submitting => &[SubmissionPhase::Succeeded, SubmissionPhase::Idle],
            SubmissionPhase::Succeeded => &[SubmissionPhase::Idle],
        }
    }

    pub fn can_transition_to(&self, target: SubmissionPhase) -> bool {
        self.valid_transitions().contains(&target)
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded phase change.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseTransition {
    pub from: SubmissionPhase,
    pub to: SubmissionPhase,
    pub timestamp: DateTime<Utc>,
    pub reason: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhaseError {
    #[error("invalid phase transition from {from} to {to}")]
    InvalidTransition {
        from: SubmissionPhase,
        to: SubmissionPhase,
    },
}

#[derive(Debug, Default)]
pub struct PhaseMachine {
    current: SubmissionPhase,
    history: Vec<PhaseTransition>,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SubmissionPhase {
        self.current
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.history
    }

    pub fn transition(
        &mut self,
        to: SubmissionPhase,
        reason: impl Into<String>,
    ) -> Result<&PhaseTransition, PhaseError> {
        if !self.current.can_transition_to(to) {
            return Err(PhaseError::InvalidTransition {
                from: self.current,
                to,
            });
        }

        let transition = PhaseTransition {
            from: self.current,
            to,
            timestamp: Utc::now(),
            reason: reason.into(),
        };
        tracing::debug!(from = %transition.from, to = %transition.to, reason = %transition.reason, "Form phase changed");

        self.current = to;
        self.history.push(transition);
        Ok(&self.history[self.history.len() - 1])
    }
}
