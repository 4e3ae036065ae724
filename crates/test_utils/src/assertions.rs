//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_request::{SubmissionStatus, ValidationReport};

/// Asserts that a validation report passed
///
/// # Panics
///
/// Panics with the full issue list if the report failed
pub fn assert_valid(report: &ValidationReport) {
    assert!(
        report.is_valid,
        "Expected valid draft, got issues: {:?}",
        report.issues
    );
}

/// Asserts that a validation report flags the given field
///
/// # Panics
///
/// Panics with the full issue list if the field is not flagged
pub fn assert_has_issue(report: &ValidationReport, field: &str) {
    assert!(
        report.has_issue(field),
        "Expected issue on field {field:?}, got: {:?}",
        report.issues
    );
}

/// Asserts that a submission status is a rejection with the given HTTP status
///
/// # Panics
///
/// Panics if the status is not Rejected or carries a different code
pub fn assert_rejected_with(status: &SubmissionStatus, expected: u16) {
    match status {
        SubmissionStatus::Rejected { status, .. } => assert_eq!(
            *status, expected,
            "Expected rejection with HTTP {expected}, got HTTP {status}"
        ),
        other => panic!("Expected rejected status, got {}", other.label()),
    }
}
