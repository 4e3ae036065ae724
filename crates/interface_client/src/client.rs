//! HTTP submission adapter
//!
//! Implements [`SubmissionPort`] against the loan backend's REST API. The
//! response body is read regardless of status code: an HTTP >= 400 answer is
//! returned as a defined [`SubmissionOutcome::Rejected`] with the echoed
//! body, while transport problems (refused connection, timeout, unreadable
//! body) surface as `PortError`s for the domain to map onto its explicit
//! unreachable state.
//!
//! Every attempt carries its `SubmissionAttemptId` in an `Idempotency-Key`
//! header so a retried delivery can be deduplicated server-side.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use core_kernel::{
    ClientRequestId, DomainPort, OperationMetadata, PortError, SubmissionAttemptId,
};
use domain_request::{RequestPayload, RequestReceipt, SubmissionOutcome, SubmissionPort};

use crate::config::ClientConfig;

/// Path of the create endpoint, relative to the configured base URL
pub const REQUEST_CREATE_PATH: &str = "/request/create";

/// Reqwest-backed implementation of the submission port
#[derive(Debug)]
pub struct HttpSubmissionAdapter {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpSubmissionAdapter {
    /// Creates an adapter with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, PortError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PortError::Internal {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client, config })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

impl DomainPort for HttpSubmissionAdapter {}

#[async_trait]
impl SubmissionPort for HttpSubmissionAdapter {
    async fn create_request(
        &self,
        payload: &RequestPayload,
        attempt: SubmissionAttemptId,
        _metadata: Option<OperationMetadata>,
    ) -> Result<SubmissionOutcome, PortError> {
        let url = self.config.create_request_url();
        tracing::debug!(%url, %attempt, "Delivering create request");

        let response = self
            .client
            .post(&url)
            .header("Idempotency-Key", attempt.to_string())
            .json(payload)
            .send()
            .await
            .map_err(|e| transport_error(e, &self.config))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, &self.config))?;

        outcome_from_response(status, &body)
    }
}

fn transport_error(error: reqwest::Error, config: &ClientConfig) -> PortError {
    if error.is_timeout() {
        PortError::Timeout {
            operation: "create_request".to_string(),
            duration_ms: config.timeout_secs * 1000,
        }
    } else {
        PortError::Connection {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

/// Maps an HTTP response onto a submission outcome
///
/// Status >= 400 is a rejection carrying the echoed body (kept verbatim as a
/// JSON string when it does not parse). A success body must be JSON and must
/// contain the assigned `id`.
pub fn outcome_from_response(status: u16, body: &str) -> Result<SubmissionOutcome, PortError> {
    if status >= 400 {
        let details =
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        return Ok(SubmissionOutcome::Rejected { status, details });
    }

    let body: Value = serde_json::from_str(body)
        .map_err(|e| PortError::transformation(format!("create response is not JSON: {e}")))?;

    let id = match body.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            return Err(PortError::transformation(
                "create response has no id field",
            ))
        }
    };
    let id = ClientRequestId::new(id).map_err(|e| PortError::transformation(e.to_string()))?;

    Ok(SubmissionOutcome::Accepted(RequestReceipt { id, body }))
}
