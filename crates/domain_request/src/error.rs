//! Request domain errors

use thiserror::Error;

use core_kernel::{CoreError, PortError};

/// Errors that can occur in the request domain
#[derive(Debug, Error)]
pub enum RequestError {
    /// A submission is already pending; the duplicate was refused
    #[error("Submission already in flight")]
    SubmissionInFlight,

    /// The status machine refused a transition
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// The calculator carryover was not found where expected
    #[error("Calculator carryover missing: {0}")]
    CarryoverMissing(String),

    /// Invalid draft data provided
    #[error("Invalid request data: {0}")]
    InvalidData(String),

    /// A port operation failed
    #[error("Port error: {0}")]
    Port(#[from] PortError),

    /// A kernel-level error occurred
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl RequestError {
    /// Creates an InvalidData error with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        RequestError::InvalidData(message.into())
    }

    /// Creates an InvalidStatusTransition error from state labels
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        RequestError::InvalidStatusTransition {
            from: from.into(),
            to: to.into(),
        }
    }
}
