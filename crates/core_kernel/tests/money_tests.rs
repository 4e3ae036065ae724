//! Integration tests for Money and Currency

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal_macros::dec;

#[test]
fn money_new_rounds_to_four_places() {
    let m = Money::new(dec!(100.123456), Currency::CZK);
    assert_eq!(m.amount(), dec!(100.1235));
}

#[test]
fn money_zero_is_zero() {
    let m = Money::zero(Currency::CZK);
    assert!(m.is_zero());
    assert!(!m.is_positive());
}

#[test]
fn money_checked_add_same_currency() {
    let a = Money::new(dec!(150000), Currency::CZK);
    let b = Money::new(dec!(50000), Currency::CZK);

    let sum = a.checked_add(&b).unwrap();
    assert_eq!(sum.amount(), dec!(200000));
    assert_eq!(sum.currency(), Currency::CZK);
}

#[test]
fn money_checked_sub_same_currency() {
    let a = Money::new(dec!(150000), Currency::CZK);
    let b = Money::new(dec!(50000), Currency::CZK);

    let diff = a.checked_sub(&b).unwrap();
    assert_eq!(diff.amount(), dec!(100000));
}

#[test]
fn money_mixing_currencies_fails() {
    let czk = Money::new(dec!(1000), Currency::CZK);
    let usd = Money::new(dec!(1000), Currency::USD);

    assert!(matches!(
        czk.checked_add(&usd),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
    assert!(matches!(
        czk.checked_sub(&usd),
        Err(MoneyError::CurrencyMismatch(_, _))
    ));
}

#[test]
fn money_round_to_currency_places() {
    let m = Money::new(dec!(99.999), Currency::CZK);
    assert_eq!(m.round_to_currency().amount(), dec!(100.00));
}

#[test]
fn currency_metadata() {
    assert_eq!(Currency::CZK.decimal_places(), 2);
    assert_eq!(Currency::CZK.code(), "CZK");
    assert_eq!(Currency::CZK.symbol(), "Kč");
    assert_eq!(Currency::EUR.symbol(), "€");
}

#[test]
fn money_serde_roundtrip() {
    let m = Money::new(dec!(150000), Currency::CZK);
    let json = serde_json::to_string(&m).unwrap();
    let back: Money = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}
