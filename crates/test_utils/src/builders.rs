//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_request::{ApplicantType, Carryover, RequestDraft};

use crate::fixtures::CarryoverFixtures;

/// Builder for request drafts
///
/// Starts from a complete, valid draft for the chosen applicant type so a
/// test only overrides what it is actually about.
pub struct DraftBuilder {
    applicant_type: ApplicantType,
    carryover: Carryover,
    overrides: Vec<Box<dyn FnOnce(&mut RequestDraft)>>,
}

impl DraftBuilder {
    /// Creates a builder for an individual applicant
    pub fn individual() -> Self {
        Self::new(ApplicantType::Individual)
    }

    /// Creates a builder for a self-employed applicant
    pub fn osvc() -> Self {
        Self::new(ApplicantType::Osvc)
    }

    /// Creates a builder for a legal-entity applicant
    pub fn legal_entity() -> Self {
        Self::new(ApplicantType::LegalEntity)
    }

    fn new(applicant_type: ApplicantType) -> Self {
        Self {
            applicant_type,
            carryover: CarryoverFixtures::standard(),
            overrides: Vec::new(),
        }
    }

    /// Uses a specific carryover instead of the standard fixture
    pub fn with_carryover(mut self, carryover: Carryover) -> Self {
        self.carryover = carryover;
        self
    }

    /// Applies an arbitrary mutation after the defaults
    pub fn mutate(mut self, f: impl FnOnce(&mut RequestDraft) + 'static) -> Self {
        self.overrides.push(Box::new(f));
        self
    }

    /// Builds the draft
    pub fn build(self) -> RequestDraft {
        let mut draft = RequestDraft::new(self.carryover);
        draft.change_applicant_type(self.applicant_type);

        draft.name = "Jan".to_string();
        draft.surname = "Novák".to_string();
        draft.nationality = "CZ".to_string();
        draft.email = "jan.novak@example.com".to_string();
        draft.phone = "777123456".to_string();
        draft.address.street = "Dlouhá".to_string();
        draft.address.desc_number = "153".to_string();
        draft.address.indicative_number = "4".to_string();
        draft.address.city = "Praha".to_string();
        draft.address.postal_code = "12000".to_string();

        match self.applicant_type {
            ApplicantType::Individual => {
                draft.birth_num = "855120/1234".to_string();
            }
            ApplicantType::Osvc => {
                draft.ic = "12345678".to_string();
            }
            ApplicantType::LegalEntity => {
                draft.company_name = "Půjčky a.s.".to_string();
                draft.ic = "12345678".to_string();
                draft.position = "jednatel".to_string();
            }
        }

        for f in self.overrides {
            f(&mut draft);
        }
        draft
    }
}
