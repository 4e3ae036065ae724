//! Draft validation rules
//!
//! Validation runs at submit time against the raw draft. It NEVER blocks
//! submission: the intake pipeline records the report so the caller can
//! light up inline feedback, then sends the payload regardless. The backend
//! remains the authority on acceptance.
//!
//! # Validation Rules
//!
//! ## All applicants
//! - name, surname, nationality must be non-empty
//! - email must be a syntactically valid address
//! - phone must be exactly 9 digits (the +420 prefix is implied)
//! - address street and city must be non-empty
//! - address descNumber, indicativeNumber, postalCode must parse as
//!   unsigned integers
//!
//! ## Per applicant type
//! - Individual: birthNum is 9-11 characters of digits and slashes
//! - OSVČ: IC is exactly 8 digits
//! - Legal entity: companyName non-empty, IC as above, position from the
//!   closed title list

use validator::ValidateEmail;

use crate::applicant::{ApplicantType, FieldRule};
use crate::draft::RequestDraft;

/// A single validation finding, tied to the wire name of the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire name of the offending field; nested fields use dotted paths
    pub field: String,
    /// Human-readable description of the problem
    pub message: String,
}

/// Result of draft validation
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Whether the draft passed every rule
    pub is_valid: bool,
    /// List of validation issues
    pub issues: Vec<FieldIssue>,
    /// List of validation warnings (non-fatal findings)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Creates a passing report
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an issue and marks the report failed
    pub fn add_issue(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.into(),
            message: message.into(),
        });
        self.is_valid = false;
    }

    /// Adds a warning without failing the report
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.issues.extend(other.issues);
        self.warnings.extend(other.warnings);
    }

    /// Returns true if some issue concerns the given field
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|i| i.field == field)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for request drafts
///
/// # Examples
///
/// ```rust
/// use domain_request::{Carryover, RequestDraft, RequestValidator};
/// use core_kernel::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let draft = RequestDraft::new(Carryover::new(
///     Money::new(dec!(150000), Currency::CZK),
///     24,
/// ));
/// let report = RequestValidator::validate(&draft);
///
/// assert!(!report.is_valid);
/// assert!(report.has_issue("applicantType"));
/// ```
pub struct RequestValidator;

impl RequestValidator {
    /// Validates a draft according to its applicant type
    pub fn validate(draft: &RequestDraft) -> ValidationReport {
        let mut report = ValidationReport::ok();

        Self::validate_common(draft, &mut report);

        match draft.applicant_type {
            Some(applicant_type) => Self::validate_type_fields(draft, applicant_type, &mut report),
            None => report.add_issue("applicantType", "Applicant type must be selected"),
        }

        report
    }

    /// Validates the fields every applicant fills in
    fn validate_common(draft: &RequestDraft, report: &mut ValidationReport) {
        if draft.name.trim().is_empty() {
            report.add_issue("name", "First name is required");
        }
        if draft.surname.trim().is_empty() {
            report.add_issue("surname", "Surname is required");
        }
        if draft.nationality.trim().is_empty() {
            report.add_issue("nationality", "Nationality is required");
        }

        if !draft.email.validate_email() {
            report.add_issue("email", format!("Invalid email address: {}", draft.email));
        }

        if draft.phone.len() != 9 || !draft.phone.chars().all(|c| c.is_ascii_digit()) {
            report.add_issue("phone", "Phone number must be exactly 9 digits");
        }

        Self::validate_address(draft, report);
    }

    /// Validates the address block
    fn validate_address(draft: &RequestDraft, report: &mut ValidationReport) {
        let address = &draft.address;

        if address.street.trim().is_empty() {
            report.add_issue("address.street", "Street is required");
        }
        if address.city.trim().is_empty() {
            report.add_issue("address.city", "City is required");
        }

        for (field, value) in [
            ("address.descNumber", &address.desc_number),
            ("address.indicativeNumber", &address.indicative_number),
            ("address.postalCode", &address.postal_code),
        ] {
            if crate::address::parse_house_number(value).is_none() {
                report.add_issue(field, format!("Not a valid number: {value:?}"));
            }
        }
    }

    /// Applies the schema switch for the selected applicant type
    fn validate_type_fields(
        draft: &RequestDraft,
        applicant_type: ApplicantType,
        report: &mut ValidationReport,
    ) {
        for required in applicant_type.required_fields() {
            let value = match required.field {
                "birthNum" => &draft.birth_num,
                "IC" => &draft.ic,
                "companyName" => &draft.company_name,
                "position" => &draft.position,
                other => {
                    report.add_warning(format!("Unknown required field {other:?} in schema"));
                    continue;
                }
            };

            if !required.rule.matches(value) {
                report.add_issue(required.field, rule_message(required.rule));
            }
        }
    }
}

fn rule_message(rule: FieldRule) -> &'static str {
    match rule {
        FieldRule::BirthNumber => "Birth number must be 9-11 characters of digits and slashes",
        FieldRule::CompanyNumber => "Company number (IČO) must be exactly 8 digits",
        FieldRule::NonEmpty => "Value is required",
        FieldRule::PositionTitle => "Position must be one of the accepted statutory titles",
    }
}
