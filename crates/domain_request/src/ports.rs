//! Ports for the request domain
//!
//! Two seams connect the intake flow to the outside world:
//!
//! - [`SubmissionPort`] carries the create payload to the loan backend. An
//!   HTTP >= 400 answer is a DEFINED outcome ([`SubmissionOutcome::Rejected`]),
//!   not a port error; port errors mean the backend could not be reached or
//!   its answer could not be read.
//! - [`CarryoverStore`] holds the calculator carryover between the
//!   calculator step and the form, keyed by
//!   [`CARRYOVER_KEY`](crate::carryover::CARRYOVER_KEY). A missing key is
//!   `PortError::NotFound`.
//!
//! Mock adapters for both live in [`mock`] behind the `mock` feature.

use async_trait::async_trait;

use core_kernel::{DomainPort, OperationMetadata, PortError, SubmissionAttemptId};

use crate::carryover::Carryover;
use crate::payload::RequestPayload;
use crate::status::RequestReceipt;

/// What the backend said to a delivered create request
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The request was created; the receipt carries the assigned id
    Accepted(RequestReceipt),
    /// The backend refused the request (HTTP >= 400) with the echoed body
    Rejected {
        status: u16,
        details: serde_json::Value,
    },
}

/// Port for delivering create requests to the loan backend
#[async_trait]
pub trait SubmissionPort: DomainPort {
    /// Delivers the payload, tagging the attempt for idempotency
    async fn create_request(
        &self,
        payload: &RequestPayload,
        attempt: SubmissionAttemptId,
        metadata: Option<OperationMetadata>,
    ) -> Result<SubmissionOutcome, PortError>;
}

/// Port for the session-scoped calculator carryover
#[async_trait]
pub trait CarryoverStore: DomainPort {
    /// Persists the carryover under the session key
    async fn save(&self, carryover: Carryover) -> Result<(), PortError>;

    /// Loads the carryover; absent key is `PortError::NotFound`
    async fn load(&self) -> Result<Carryover, PortError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::carryover::CARRYOVER_KEY;

    /// Scripted in-memory implementation of SubmissionPort
    ///
    /// Outcomes are queued ahead of time and popped per call; every payload
    /// delivered is recorded for assertions.
    #[derive(Debug, Default)]
    pub struct MockSubmissionPort {
        outcomes: Arc<RwLock<VecDeque<Result<SubmissionOutcome, PortError>>>>,
        deliveries: Arc<RwLock<Vec<(SubmissionAttemptId, RequestPayload)>>>,
    }

    impl MockSubmissionPort {
        /// Creates a mock with no scripted outcomes
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a mock pre-loaded with outcomes, served in order
        pub async fn with_outcomes(
            outcomes: Vec<Result<SubmissionOutcome, PortError>>,
        ) -> Self {
            let port = Self::new();
            port.outcomes.write().await.extend(outcomes);
            port
        }

        /// Queues one more outcome
        pub async fn push_outcome(&self, outcome: Result<SubmissionOutcome, PortError>) {
            self.outcomes.write().await.push_back(outcome);
        }

        /// Returns every payload delivered so far, in order
        pub async fn deliveries(&self) -> Vec<(SubmissionAttemptId, RequestPayload)> {
            self.deliveries.read().await.clone()
        }

        /// Returns how many create calls reached the port
        pub async fn call_count(&self) -> usize {
            self.deliveries.read().await.len()
        }
    }

    impl DomainPort for MockSubmissionPort {}

    #[async_trait]
    impl SubmissionPort for MockSubmissionPort {
        async fn create_request(
            &self,
            payload: &RequestPayload,
            attempt: SubmissionAttemptId,
            _metadata: Option<OperationMetadata>,
        ) -> Result<SubmissionOutcome, PortError> {
            self.deliveries
                .write()
                .await
                .push((attempt, payload.clone()));

            self.outcomes
                .write()
                .await
                .pop_front()
                .unwrap_or_else(|| Err(PortError::internal("no scripted outcome left")))
        }
    }

    /// In-memory session store for the calculator carryover
    #[derive(Debug, Default)]
    pub struct InMemoryCarryoverStore {
        entries: Arc<RwLock<HashMap<String, serde_json::Value>>>,
    }

    impl InMemoryCarryoverStore {
        /// Creates an empty store (no carryover present)
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a store already holding the given carryover
        pub async fn with_carryover(carryover: Carryover) -> Self {
            let store = Self::new();
            store.save(carryover).await.expect("in-memory save");
            store
        }
    }

    impl DomainPort for InMemoryCarryoverStore {}

    #[async_trait]
    impl CarryoverStore for InMemoryCarryoverStore {
        async fn save(&self, carryover: Carryover) -> Result<(), PortError> {
            let value = serde_json::to_value(carryover)
                .map_err(|e| PortError::transformation(e.to_string()))?;
            self.entries
                .write()
                .await
                .insert(CARRYOVER_KEY.to_string(), value);
            Ok(())
        }

        async fn load(&self) -> Result<Carryover, PortError> {
            let entries = self.entries.read().await;
            let value = entries
                .get(CARRYOVER_KEY)
                .ok_or_else(|| PortError::not_found("Carryover", CARRYOVER_KEY))?;
            serde_json::from_value(value.clone())
                .map_err(|e| PortError::transformation(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;
    use core_kernel::{ClientRequestId, Currency, Money};
    use rust_decimal_macros::dec;

    use crate::draft::RequestDraft;

    fn carryover() -> Carryover {
        Carryover::new(Money::new(dec!(150000), Currency::CZK), 24)
    }

    #[tokio::test]
    async fn test_mock_serves_outcomes_in_order() {
        let receipt = RequestReceipt {
            id: ClientRequestId::new("abc123").unwrap(),
            body: serde_json::json!({ "id": "abc123" }),
        };
        let port = MockSubmissionPort::with_outcomes(vec![
            Ok(SubmissionOutcome::Accepted(receipt.clone())),
            Ok(SubmissionOutcome::Rejected {
                status: 400,
                details: serde_json::Value::Null,
            }),
        ])
        .await;

        let payload = RequestDraft::new(carryover()).payload();

        let first = port
            .create_request(&payload, SubmissionAttemptId::new(), None)
            .await
            .unwrap();
        assert_eq!(first, SubmissionOutcome::Accepted(receipt));

        let second = port
            .create_request(&payload, SubmissionAttemptId::new(), None)
            .await
            .unwrap();
        assert!(matches!(second, SubmissionOutcome::Rejected { status: 400, .. }));

        assert_eq!(port.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_without_script_errors() {
        let port = MockSubmissionPort::new();
        let payload = RequestDraft::new(carryover()).payload();

        let result = port
            .create_request(&payload, SubmissionAttemptId::new(), None)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_carryover_store_roundtrip() {
        let store = InMemoryCarryoverStore::with_carryover(carryover()).await;
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, carryover());
    }

    #[tokio::test]
    async fn test_carryover_store_missing_key() {
        let store = InMemoryCarryoverStore::new();
        let err = store.load().await.unwrap_err();
        assert!(err.is_not_found());
    }
}
