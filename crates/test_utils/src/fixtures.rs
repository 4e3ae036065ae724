//! Test Fixtures
//!
//! Pre-built data for the common shapes the intake tests need: a calculator
//! carryover, create receipts, and backend rejection bodies.

use core_kernel::{ClientRequestId, Currency, Money};
use rust_decimal_macros::dec;

use domain_request::{Carryover, RequestReceipt, SubmissionOutcome};

/// Money fixtures for the loan domain
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical requested loan amount
    pub fn loan_amount() -> Money {
        Money::new(dec!(150000), Currency::CZK)
    }

    /// A small loan amount
    pub fn small_loan_amount() -> Money {
        Money::new(dec!(20000), Currency::CZK)
    }
}

/// Carryover fixtures
pub struct CarryoverFixtures;

impl CarryoverFixtures {
    /// The standard calculator output used across tests
    pub fn standard() -> Carryover {
        Carryover::new(MoneyFixtures::loan_amount(), 24)
    }

    /// A short-term carryover
    pub fn short_term() -> Carryover {
        Carryover::new(MoneyFixtures::small_loan_amount(), 6)
    }
}

/// Submission outcome fixtures
pub struct OutcomeFixtures;

impl OutcomeFixtures {
    /// A receipt for a created request with the given backend id
    pub fn receipt(id: &str) -> RequestReceipt {
        RequestReceipt {
            id: ClientRequestId::new(id).expect("fixture id"),
            body: serde_json::json!({ "id": id }),
        }
    }

    /// An accepted outcome with the given backend id
    pub fn accepted(id: &str) -> SubmissionOutcome {
        SubmissionOutcome::Accepted(Self::receipt(id))
    }

    /// A generic bad-request rejection
    pub fn bad_request() -> SubmissionOutcome {
        SubmissionOutcome::Rejected {
            status: 400,
            details: serde_json::json!({ "error": "Chybně vyplněné číslo popisné" }),
        }
    }

    /// A validation rejection naming a field
    pub fn unprocessable(field: &str) -> SubmissionOutcome {
        SubmissionOutcome::Rejected {
            status: 422,
            details: serde_json::json!({ "error": "validation failed", "field": field }),
        }
    }
}
