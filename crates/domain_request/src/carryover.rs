//! Calculator carryover
//!
//! The loan calculator step produces an amount and a term before the
//! applicant ever reaches the request form. Those two values are threaded
//! into the form at construction time and travel with the draft unchanged;
//! the applicant cannot edit them here.
//!
//! The carryover is stored under the session key [`CARRYOVER_KEY`] as
//! `{"amount": …, "numOfMonths": …}`. A missing key is an explicit error,
//! never a crash.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Session key the carryover payload is stored under
pub const CARRYOVER_KEY: &str = "calcData";

/// Amount and term produced by the calculator step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carryover {
    /// Requested loan amount, CZK-denominated
    #[serde(with = "serde_amount")]
    pub amount: Money,
    /// Requested repayment term in months
    pub num_of_months: u32,
}

impl Carryover {
    /// Creates a carryover with a CZK amount
    pub fn new(amount: Money, num_of_months: u32) -> Self {
        Self {
            amount,
            num_of_months,
        }
    }
}

/// Serde helper for CZK-denominated amounts on the wire
///
/// The session payload and the create payload both carry the bare decimal
/// value; the currency is fixed by the loan product.
pub(crate) mod serde_amount {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use core_kernel::{Currency, Money};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        Serialize::serialize(&money.amount(), serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Ok(Money::new(amount, Currency::CZK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_session_payload_shape() {
        let carryover = Carryover::new(Money::new(dec!(150000), Currency::CZK), 24);
        let json = serde_json::to_value(carryover).unwrap();

        assert!(json.get("amount").is_some());
        assert_eq!(json["numOfMonths"], 24);
    }

    #[test]
    fn test_reads_calculator_numbers() {
        // The calculator step writes plain JSON numbers.
        let carryover: Carryover =
            serde_json::from_value(serde_json::json!({ "amount": 150000, "numOfMonths": 24 }))
                .unwrap();

        assert_eq!(carryover.amount.amount(), dec!(150000));
        assert_eq!(carryover.amount.currency(), Currency::CZK);
        assert_eq!(carryover.num_of_months, 24);
    }

    #[test]
    fn test_roundtrip() {
        let carryover = Carryover::new(Money::new(dec!(99999.50), Currency::CZK), 60);
        let json = serde_json::to_string(&carryover).unwrap();
        let back: Carryover = serde_json::from_str(&json).unwrap();
        assert_eq!(carryover, back);
    }
}
