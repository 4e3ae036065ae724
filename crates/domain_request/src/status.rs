//! Submission status state machine
//!
//! # Lifecycle
//!
//! ```text
//! Inactive -> Pending -> Succeeded
//!                  |----> Rejected ----> Pending (resubmission)
//!                  `----> Unreachable -> Pending (resubmission)
//! ```
//!
//! Succeeded is terminal. A rejected or unreachable submission may be retried
//! by the applicant, which mints a fresh attempt id. Transitions outside the
//! table are errors, including the double-submit case (Pending -> Pending),
//! which gets its own error variant so callers can disable the submit action
//! while a request is in flight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientRequestId, SubmissionAttemptId};

use crate::error::RequestError;

/// Path prefix of the client detail page opened after a successful create
pub const CLIENT_PAGE_PATH: &str = "/clientPage";

/// Builds the navigation path for a created request
pub fn client_page_path(id: &ClientRequestId) -> String {
    format!("{}/{}", CLIENT_PAGE_PATH, id)
}

/// Parsed success response from the create endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestReceipt {
    /// Backend-assigned identifier of the created request
    pub id: ClientRequestId,
    /// Full response body as returned by the backend
    pub body: serde_json::Value,
}

/// Status of the one outstanding submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing submitted yet
    Inactive,
    /// A request is in flight
    Pending {
        attempt: SubmissionAttemptId,
        started_at: DateTime<Utc>,
    },
    /// The backend created the request
    Succeeded {
        receipt: RequestReceipt,
        /// Latch for the one-shot navigation side effect
        navigated: bool,
    },
    /// The backend answered with HTTP >= 400
    Rejected {
        status: u16,
        details: serde_json::Value,
    },
    /// The backend could not be reached or its answer could not be read
    Unreachable { reason: String },
}

/// Status discriminant used by the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Inactive,
    Pending,
    Succeeded,
    Rejected,
    Unreachable,
}

impl SubmissionStatus {
    /// Returns the wire-friendly label of this status
    pub const fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Inactive => "inactive",
            SubmissionStatus::Pending { .. } => "pending",
            SubmissionStatus::Succeeded { .. } => "succeeded",
            SubmissionStatus::Rejected { .. } => "rejected",
            SubmissionStatus::Unreachable { .. } => "unreachable",
        }
    }

    /// Returns true while a request is in flight
    pub const fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending { .. })
    }

    /// Returns true once the backend has created the request
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded { .. })
    }

    const fn kind(&self) -> StatusKind {
        match self {
            SubmissionStatus::Inactive => StatusKind::Inactive,
            SubmissionStatus::Pending { .. } => StatusKind::Pending,
            SubmissionStatus::Succeeded { .. } => StatusKind::Succeeded,
            SubmissionStatus::Rejected { .. } => StatusKind::Rejected,
            SubmissionStatus::Unreachable { .. } => StatusKind::Unreachable,
        }
    }

    /// Checks whether a transition is allowed
    fn can_transition_to(&self, target: StatusKind) -> bool {
        use StatusKind::*;
        matches!(
            (self.kind(), target),
            (Inactive, Pending)
                | (Pending, Succeeded)
                | (Pending, Rejected)
                | (Pending, Unreachable)
                | (Rejected, Pending)
                | (Unreachable, Pending)
        )
    }

    /// Starts a submission attempt
    ///
    /// Refuses a second submit while one is pending with
    /// [`RequestError::SubmissionInFlight`]; any other illegal start (e.g.
    /// after success) is an invalid transition.
    pub fn begin(&mut self, attempt: SubmissionAttemptId) -> Result<(), RequestError> {
        if self.is_pending() {
            return Err(RequestError::SubmissionInFlight);
        }
        if !self.can_transition_to(StatusKind::Pending) {
            return Err(RequestError::invalid_transition(self.label(), "pending"));
        }
        *self = SubmissionStatus::Pending {
            attempt,
            started_at: Utc::now(),
        };
        Ok(())
    }

    /// Records a successful create response
    pub fn succeed(&mut self, receipt: RequestReceipt) -> Result<(), RequestError> {
        if !self.can_transition_to(StatusKind::Succeeded) {
            return Err(RequestError::invalid_transition(self.label(), "succeeded"));
        }
        *self = SubmissionStatus::Succeeded {
            receipt,
            navigated: false,
        };
        Ok(())
    }

    /// Records a backend rejection (HTTP >= 400) with the echoed body
    pub fn reject(&mut self, status: u16, details: serde_json::Value) -> Result<(), RequestError> {
        if !self.can_transition_to(StatusKind::Rejected) {
            return Err(RequestError::invalid_transition(self.label(), "rejected"));
        }
        *self = SubmissionStatus::Rejected { status, details };
        Ok(())
    }

    /// Records a transport-level failure
    pub fn fail_unreachable(&mut self, reason: impl Into<String>) -> Result<(), RequestError> {
        if !self.can_transition_to(StatusKind::Unreachable) {
            return Err(RequestError::invalid_transition(self.label(), "unreachable"));
        }
        *self = SubmissionStatus::Unreachable {
            reason: reason.into(),
        };
        Ok(())
    }

    /// Takes the one-shot navigation path for a successful submission
    ///
    /// Returns `Some` exactly once per success; later calls return `None`,
    /// guarding against duplicate navigation.
    pub fn take_navigation(&mut self) -> Option<String> {
        match self {
            SubmissionStatus::Succeeded { receipt, navigated } if !*navigated => {
                *navigated = true;
                Some(client_page_path(&receipt.id))
            }
            _ => None,
        }
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Inactive
    }
}
