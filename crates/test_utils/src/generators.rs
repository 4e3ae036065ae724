//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use proptest::prelude::*;

use domain_request::{ApplicantType, Carryover, POSITION_TITLES};

/// Strategy for generating applicant types
pub fn applicant_type_strategy() -> impl Strategy<Value = ApplicantType> {
    prop_oneof![
        Just(ApplicantType::Individual),
        Just(ApplicantType::Osvc),
        Just(ApplicantType::LegalEntity),
    ]
}

/// Strategy for generating CZK loan amounts in haléře
pub fn loan_amount_strategy() -> impl Strategy<Value = Money> {
    (100_000i64..100_000_000i64).prop_map(|minor| Money::from_minor(minor, Currency::CZK))
}

/// Strategy for generating calculator carryovers
pub fn carryover_strategy() -> impl Strategy<Value = Carryover> {
    (loan_amount_strategy(), 1u32..=120u32)
        .prop_map(|(amount, months)| Carryover::new(amount, months))
}

/// Strategy for generating digit strings of the given length
pub fn digits_strategy(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..=9u8, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Strategy for generating valid birth numbers (with or without slash)
pub fn birth_number_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        digits_strategy(9),
        digits_strategy(10),
        (digits_strategy(6), digits_strategy(4)).prop_map(|(a, b)| format!("{a}/{b}")),
    ]
}

/// Strategy for generating accepted statutory position titles
pub fn position_title_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(POSITION_TITLES).prop_map(|title| title.to_string())
}
