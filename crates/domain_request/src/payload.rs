//! The create-request wire payload
//!
//! Field names follow the backend contract exactly (`birthNum`, `IC`,
//! `companyName`, `numOfMonths`, nested `address` with `descNumber`,
//! `indicativeNumber`, `postalCode`). The full draft is always sent; the
//! backend decides what to do with fields that are empty for the selected
//! applicant type.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::address::AddressPayload;
use crate::applicant::ApplicantType;
use crate::carryover::serde_amount;

/// JSON body POSTed to the create endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// Null when the applicant never picked a type
    pub applicant_type: Option<ApplicantType>,
    pub name: String,
    pub surname: String,
    pub birth_num: String,
    pub nationality: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "IC")]
    pub ic: String,
    pub position: String,
    pub company_name: String,
    #[serde(with = "serde_amount")]
    pub amount: Money,
    pub num_of_months: u32,
    pub address: AddressPayload,
}

#[cfg(test)]
mod tests {
    use crate::applicant::ApplicantType;
    use crate::carryover::Carryover;
    use crate::draft::RequestDraft;
    use core_kernel::{Currency, Money};
    use rust_decimal_macros::dec;

    #[test]
    fn test_payload_serializes_full_draft() {
        let mut draft = RequestDraft::new(Carryover::new(
            Money::new(dec!(150000), Currency::CZK),
            24,
        ));
        draft.change_applicant_type(ApplicantType::Individual);
        draft.name = "Jan".to_string();
        draft.surname = "Novák".to_string();
        draft.birth_num = "855120/1234".to_string();
        draft.nationality = "CZ".to_string();
        draft.email = "jan.novak@example.com".to_string();
        draft.phone = "777123456".to_string();
        draft.address.street = "Dlouhá".to_string();
        draft.address.desc_number = "153".to_string();
        draft.address.indicative_number = "4".to_string();
        draft.address.city = "Praha".to_string();
        draft.address.postal_code = "12000".to_string();

        let json = serde_json::to_value(draft.payload()).unwrap();

        assert_eq!(json["applicantType"], "INDIVIDUAL");
        assert_eq!(json["birthNum"], "855120/1234");
        assert_eq!(json["address"]["descNumber"], 153);
        assert_eq!(json["address"]["postalCode"], 12000);
        // Fields not used by this type still travel, empty.
        assert_eq!(json["IC"], "");
        assert_eq!(json["companyName"], "");
    }

    #[test]
    fn test_unset_type_serializes_as_null() {
        let draft = RequestDraft::new(Carryover::new(
            Money::new(dec!(50000), Currency::CZK),
            12,
        ));

        let json = serde_json::to_value(draft.payload()).unwrap();
        assert!(json["applicantType"].is_null());
    }
}
