//! Core Kernel - Foundational types and utilities for the loan intake system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Ports-and-adapters infrastructure shared by the domain crates

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{SubmissionAttemptId, ClientRequestId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort, OperationMetadata};
