//! The request draft
//!
//! `RequestDraft` is the single owner of everything the applicant has typed.
//! All user-entered fields are kept as raw strings; parsing and validation
//! happen at submit time so that bad input is reported, not silently mangled.
//!
//! Changing the applicant type is a deliberate data-loss transition: the
//! whole draft is reset to defaults and only the newly chosen type plus the
//! calculator carryover survive. The behavior is intentional (each type
//! collects a different field set) and lives in one named method so it is
//! visible and testable rather than an accident of UI wiring.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::address::AddressDraft;
use crate::applicant::ApplicantType;
use crate::carryover::{serde_amount, Carryover};
use crate::payload::RequestPayload;

/// Everything the applicant has entered, plus the calculator carryover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDraft {
    /// Selected applicant type; unset until the applicant picks one
    pub applicant_type: Option<ApplicantType>,
    pub name: String,
    pub surname: String,
    /// Birth number; collected for individuals only
    pub birth_num: String,
    pub nationality: String,
    pub email: String,
    /// Phone number without the +420 prefix, 9 digits
    pub phone: String,
    /// Company number (IČO); collected for OSVČ and legal entities
    #[serde(rename = "IC")]
    pub ic: String,
    /// Statutory role title; collected for legal entities
    pub position: String,
    pub company_name: String,
    /// Loan amount from the calculator step, not edited here
    #[serde(with = "serde_amount")]
    pub amount: Money,
    /// Repayment term from the calculator step, not edited here
    pub num_of_months: u32,
    pub address: AddressDraft,
}

impl RequestDraft {
    /// Creates a fresh draft seeded with the calculator carryover
    pub fn new(carryover: Carryover) -> Self {
        Self {
            applicant_type: None,
            name: String::new(),
            surname: String::new(),
            birth_num: String::new(),
            nationality: String::new(),
            email: String::new(),
            phone: String::new(),
            ic: String::new(),
            position: String::new(),
            company_name: String::new(),
            amount: carryover.amount,
            num_of_months: carryover.num_of_months,
            address: AddressDraft::default(),
        }
    }

    /// Returns the carryover values embedded in this draft
    pub fn carryover(&self) -> Carryover {
        Carryover::new(self.amount, self.num_of_months)
    }

    /// Switches the applicant type, discarding everything else
    ///
    /// Every field except the new type and the carryover is reset to its
    /// default. Callers should warn the applicant before invoking this on a
    /// partially filled draft.
    pub fn change_applicant_type(&mut self, applicant_type: ApplicantType) {
        let carryover = self.carryover();
        *self = RequestDraft::new(carryover);
        self.applicant_type = Some(applicant_type);
    }

    /// Projects the draft onto the wire payload sent to the backend
    ///
    /// This never fails: numeric address fields that do not parse are sent
    /// as null and flagged by validation instead.
    pub fn payload(&self) -> RequestPayload {
        RequestPayload {
            applicant_type: self.applicant_type,
            name: self.name.clone(),
            surname: self.surname.clone(),
            birth_num: self.birth_num.clone(),
            nationality: self.nationality.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            ic: self.ic.clone(),
            position: self.position.clone(),
            company_name: self.company_name.clone(),
            amount: self.amount,
            num_of_months: self.num_of_months,
            address: self.address.payload(),
        }
    }
}
