//! Outbound HTTP layer for the loan intake system
//!
//! Connects the request domain to the loan backend: configuration from the
//! environment, a reqwest-backed [`SubmissionPort`](domain_request::SubmissionPort)
//! adapter, and a one-shot CLI binary that submits a draft from a JSON file.

pub mod client;
pub mod config;

pub use client::{outcome_from_response, HttpSubmissionAdapter, REQUEST_CREATE_PATH};
pub use config::ClientConfig;
