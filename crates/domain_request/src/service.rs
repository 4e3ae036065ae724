//! The intake service
//!
//! `RequestIntake` owns the draft, the inline-feedback flag, and the
//! submission status, and drives the whole pipeline:
//!
//! 1. validate the draft; failures light up the `validated` display flag but
//!    do NOT block the attempt (the backend stays the authority)
//! 2. refuse a second submit while one is pending
//! 3. transition to Pending under a fresh attempt id (the idempotency key)
//! 4. deliver the full payload through the submission port
//! 5. settle the status from the outcome; transport failures become the
//!    explicit Unreachable state instead of vanishing
//! 6. hand out the client-page navigation path exactly once on success

use std::sync::Arc;

use core_kernel::{OperationMetadata, SubmissionAttemptId};

use crate::applicant::ApplicantType;
use crate::carryover::Carryover;
use crate::draft::RequestDraft;
use crate::error::RequestError;
use crate::ports::{CarryoverStore, SubmissionOutcome, SubmissionPort};
use crate::status::SubmissionStatus;
use crate::validation::{RequestValidator, ValidationReport};

/// Form-state holder and submission pipeline for one loan request
pub struct RequestIntake {
    draft: RequestDraft,
    validated: bool,
    status: SubmissionStatus,
    port: Arc<dyn SubmissionPort>,
}

impl std::fmt::Debug for RequestIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestIntake")
            .field("draft", &self.draft)
            .field("validated", &self.validated)
            .field("status", &self.status)
            .field("port", &"<dyn SubmissionPort>")
            .finish()
    }
}

impl RequestIntake {
    /// Creates an intake with an explicitly provided carryover
    pub fn new(carryover: Carryover, port: Arc<dyn SubmissionPort>) -> Self {
        Self {
            draft: RequestDraft::new(carryover),
            validated: false,
            status: SubmissionStatus::Inactive,
            port,
        }
    }

    /// Creates an intake by loading the carryover from the session store
    ///
    /// An absent carryover is reported as
    /// [`RequestError::CarryoverMissing`]; the calculator step must run
    /// before the form is opened.
    pub async fn from_store(
        store: &dyn CarryoverStore,
        port: Arc<dyn SubmissionPort>,
    ) -> Result<Self, RequestError> {
        let carryover = store.load().await.map_err(|e| {
            if e.is_not_found() {
                RequestError::CarryoverMissing(e.to_string())
            } else {
                RequestError::Port(e)
            }
        })?;
        Ok(Self::new(carryover, port))
    }

    /// Returns the current draft
    pub fn draft(&self) -> &RequestDraft {
        &self.draft
    }

    /// Returns the draft for editing
    pub fn draft_mut(&mut self) -> &mut RequestDraft {
        &mut self.draft
    }

    /// Returns the current submission status
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Returns true once a failed validation should be shown inline
    pub fn is_validated(&self) -> bool {
        self.validated
    }

    /// Switches the applicant type, resetting the rest of the draft
    pub fn change_applicant_type(&mut self, applicant_type: ApplicantType) {
        self.draft.change_applicant_type(applicant_type);
        self.validated = false;
    }

    /// Validates the current draft without submitting
    pub fn validate(&self) -> ValidationReport {
        RequestValidator::validate(&self.draft)
    }

    /// Runs the submission pipeline
    ///
    /// Returns the validation report of the attempt; the submission result
    /// itself is read from [`status`](Self::status). A pending submission
    /// refuses re-entry with [`RequestError::SubmissionInFlight`].
    pub async fn submit(&mut self) -> Result<ValidationReport, RequestError> {
        if self.status.is_pending() {
            return Err(RequestError::SubmissionInFlight);
        }

        let report = self.validate();
        if !report.is_valid {
            // Inline feedback only; the attempt still goes out.
            self.validated = true;
            tracing::warn!(
                issues = report.issues.len(),
                "Draft failed client-side validation, submitting anyway"
            );
        }

        let attempt = SubmissionAttemptId::new();
        self.status.begin(attempt)?;

        let applicant_type = self
            .draft
            .applicant_type
            .map(ApplicantType::label)
            .unwrap_or("UNSET");
        tracing::info!(%attempt, applicant_type, "Submitting loan request");

        let payload = self.draft.payload();
        let metadata = OperationMetadata::with_correlation_id(attempt.to_string());

        let result = self
            .port
            .create_request(&payload, attempt, Some(metadata))
            .await;

        match result {
            Ok(SubmissionOutcome::Accepted(receipt)) => {
                tracing::info!(%attempt, id = %receipt.id, "Loan request created");
                self.status.succeed(receipt)?;
            }
            Ok(SubmissionOutcome::Rejected { status, details }) => {
                tracing::warn!(%attempt, status, "Loan request rejected by backend");
                self.status.reject(status, details)?;
            }
            Err(e) => {
                tracing::error!(%attempt, error = %e, "Loan request could not be delivered");
                self.status.fail_unreachable(e.to_string())?;
            }
        }

        Ok(report)
    }

    /// Takes the one-shot navigation path after a successful submission
    pub fn take_navigation(&mut self) -> Option<String> {
        self.status.take_navigation()
    }
}
