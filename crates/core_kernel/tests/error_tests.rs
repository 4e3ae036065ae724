//! Integration tests for kernel error types

use core_kernel::{CoreError, Currency, Money, PortError};
use rust_decimal_macros::dec;

#[test]
fn core_error_wraps_money_error() {
    let czk = Money::new(dec!(100), Currency::CZK);
    let eur = Money::new(dec!(100), Currency::EUR);

    let err: CoreError = czk.checked_add(&eur).unwrap_err().into();
    assert!(err.to_string().contains("Currency mismatch"));
}

#[test]
fn core_error_constructors() {
    let v = CoreError::validation("phone must be 9 digits");
    assert!(v.to_string().contains("phone"));

    let s = CoreError::invalid_state("Succeeded -> Pending");
    assert!(s.to_string().contains("Succeeded"));

    let c = CoreError::configuration("missing base_url");
    assert!(c.to_string().contains("base_url"));
}

#[test]
fn port_error_classification() {
    assert!(PortError::connection("refused").is_transient());
    assert!(PortError::not_found("Carryover", "calcData").is_not_found());
    assert!(!PortError::transformation("no id in body").is_transient());
}
