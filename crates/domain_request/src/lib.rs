//! Loan Request Domain
//!
//! This crate owns the life of one loan application: the draft the applicant
//! fills in, the applicant-type-driven field schema, submit-time validation,
//! and the submission lifecycle against the loan backend.
//!
//! # Applicant Types
//!
//! The form collects a different extra field set per applicant:
//!
//! - **Individual**: birth number
//! - **Osvc** (self-employed): company number (IČO)
//! - **LegalEntity**: company name, IČO, and a statutory role title
//!
//! Switching the type is a deliberate, named data-loss transition
//! ([`RequestDraft::change_applicant_type`]): everything except the new type
//! and the calculator carryover is reset.
//!
//! # Submission
//!
//! [`RequestIntake`] drives the pipeline: validate (non-blocking), guard
//! against double submits, deliver through [`SubmissionPort`], and settle
//! [`SubmissionStatus`]. A successful create yields the client-page
//! navigation path exactly once.
//!
//! # Examples
//!
//! ```rust
//! use domain_request::{ApplicantType, Carryover, RequestDraft, RequestValidator};
//! use core_kernel::{Currency, Money};
//! use rust_decimal_macros::dec;
//!
//! let carryover = Carryover::new(Money::new(dec!(150000), Currency::CZK), 24);
//! let mut draft = RequestDraft::new(carryover);
//! draft.change_applicant_type(ApplicantType::Osvc);
//! draft.ic = "12345678".to_string();
//!
//! let report = RequestValidator::validate(&draft);
//! // Contact and address fields are still missing.
//! assert!(!report.is_valid);
//! assert!(!report.has_issue("IC"));
//! ```

pub mod applicant;
pub mod address;
pub mod carryover;
pub mod draft;
pub mod payload;
pub mod validation;
pub mod status;
pub mod ports;
pub mod service;
pub mod error;

pub use applicant::{ApplicantType, FieldRule, RequiredField, POSITION_TITLES};
pub use address::{AddressDraft, AddressPayload};
pub use carryover::{Carryover, CARRYOVER_KEY};
pub use draft::RequestDraft;
pub use payload::RequestPayload;
pub use validation::{FieldIssue, RequestValidator, ValidationReport};
pub use status::{client_page_path, RequestReceipt, SubmissionStatus, CLIENT_PAGE_PATH};
pub use ports::{CarryoverStore, SubmissionOutcome, SubmissionPort};
pub use service::RequestIntake;
pub use error::RequestError;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{InMemoryCarryoverStore, MockSubmissionPort};
