//! Applicant types and the type-driven field schema
//!
//! The loan form collects a different set of extra fields depending on who
//! is applying:
//!
//! - **Individual**: a natural person, identified by a birth number
//! - **Osvc**: a self-employed natural person, identified by a company number (IČO)
//! - **LegalEntity**: a company, identified by name, IČO, and the statutory
//!   role of the person filling the form
//!
//! `required_fields` is the single source of truth for which extra fields a
//! type demands and which rule each must satisfy; the validator applies it.

use serde::{Deserialize, Serialize};

/// The kind of applicant submitting the loan request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicantType {
    /// A natural person
    Individual,
    /// A self-employed natural person (OSVČ)
    Osvc,
    /// A company or other legal entity
    LegalEntity,
}

impl ApplicantType {
    /// Returns the wire label used in the create payload
    pub const fn label(self) -> &'static str {
        match self {
            ApplicantType::Individual => "INDIVIDUAL",
            ApplicantType::Osvc => "OSVC",
            ApplicantType::LegalEntity => "LEGAL_ENTITY",
        }
    }

    /// Returns the ordered set of extra fields this applicant type requires
    pub const fn required_fields(self) -> &'static [RequiredField] {
        match self {
            ApplicantType::Individual => &[RequiredField {
                field: "birthNum",
                rule: FieldRule::BirthNumber,
            }],
            ApplicantType::Osvc => &[RequiredField {
                field: "IC",
                rule: FieldRule::CompanyNumber,
            }],
            ApplicantType::LegalEntity => &[
                RequiredField {
                    field: "companyName",
                    rule: FieldRule::NonEmpty,
                },
                RequiredField {
                    field: "IC",
                    rule: FieldRule::CompanyNumber,
                },
                RequiredField {
                    field: "position",
                    rule: FieldRule::PositionTitle,
                },
            ],
        }
    }
}

/// An extra field demanded by an applicant type, with its validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    /// Wire name of the field
    pub field: &'static str,
    /// Rule the value must satisfy
    pub rule: FieldRule,
}

/// Validation rule for a type-specific field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Czech birth number: 9 to 11 characters, digits and slashes only
    BirthNumber,
    /// Company number (IČO): exactly 8 digits
    CompanyNumber,
    /// Any non-empty value
    NonEmpty,
    /// One of the statutory role titles in [`POSITION_TITLES`]
    PositionTitle,
}

impl FieldRule {
    /// Checks a raw field value against this rule
    pub fn matches(self, value: &str) -> bool {
        match self {
            FieldRule::BirthNumber => {
                (9..=11).contains(&value.len())
                    && value.chars().all(|c| c.is_ascii_digit() || c == '/')
            }
            FieldRule::CompanyNumber => {
                value.len() == 8 && value.chars().all(|c| c.is_ascii_digit())
            }
            FieldRule::NonEmpty => !value.trim().is_empty(),
            FieldRule::PositionTitle => is_position_title(value),
        }
    }
}

/// Statutory role titles accepted by the backend for legal-entity applicants
///
/// The list is closed; the position field of a legal-entity request must be
/// one of these values verbatim.
pub const POSITION_TITLES: &[&str] = &[
    "členka představenstva",
    "členka správní rady",
    "členka výboru",
    "člen představenstva",
    "člen správní rady",
    "člen výboru",
    "ekonom",
    "ekonomka",
    "generální ředitel",
    "generální ředitelka",
    "jednatel",
    "jednatelka",
    "místopředseda",
    "místopředsedkyně",
    "místostarosta",
    "místostarostka",
    "předseda",
    "předseda představenstva",
    "předseda správní rady",
    "předsedkyně",
    "předsedkyně představenstva",
    "předsedkyně správní rady",
    "primátor",
    "primátorka",
    "prokurista",
    "prokuristka",
    "ředitel",
    "ředitelka",
    "společník",
    "starosta",
    "starostka",
    "statutární ředitel",
    "statutární ředitelka",
    "účetní",
    "zástupce",
    "zástupkyně",
    "zplnomocněný",
    "zplnomocněná",
];

/// Returns true if the value is one of the accepted statutory role titles
pub fn is_position_title(value: &str) -> bool {
    POSITION_TITLES.contains(&value)
}
