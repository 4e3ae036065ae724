//! Address types
//!
//! The draft keeps every address field exactly as the applicant typed it;
//! the numeric house and postal fields are only parsed when the wire payload
//! is built, so a stray character never destroys the stored input.

use serde::{Deserialize, Serialize};

/// Address fields as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub street: String,
    pub desc_number: String,
    pub indicative_number: String,
    pub city: String,
    pub postal_code: String,
}

/// Address as serialized into the create payload
///
/// Numeric fields that do not parse are sent as null; validation reports
/// them separately so the caller can surface inline feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub street: String,
    pub desc_number: Option<u32>,
    pub indicative_number: Option<u32>,
    pub city: String,
    pub postal_code: Option<u32>,
}

impl AddressDraft {
    /// Projects the draft onto the wire representation
    pub fn payload(&self) -> AddressPayload {
        AddressPayload {
            street: self.street.clone(),
            desc_number: parse_house_number(&self.desc_number),
            indicative_number: parse_house_number(&self.indicative_number),
            city: self.city.clone(),
            postal_code: parse_house_number(&self.postal_code),
        }
    }
}

/// Strict unsigned parse of a user-entered number field
///
/// Unlike a prefix parse, `"12a"` is not a number here.
pub(crate) fn parse_house_number(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}
