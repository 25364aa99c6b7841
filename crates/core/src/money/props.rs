//! Property-based tests for monetary values.

use std::cmp::Ordering;

use moneta_shared::Currency;
use proptest::prelude::*;

use super::error::MoneyError;
use super::value::Money;

/// Strategy for any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy for any field combination with units below 10,000, including
/// negative zero.
fn any_money() -> impl Strategy<Value = Money> {
    (any::<bool>(), 0u32..10_000, 0u8..=99, currency()).prop_map(
        |(positive, units, subunits, currency)| {
            Money::new(positive, units, subunits, currency).unwrap()
        },
    )
}

/// Strategy for a pair of normalised values sharing one currency.
fn same_currency_pair() -> impl Strategy<Value = (Money, Money)> {
    (
        -1_000_000_000i64..1_000_000_000,
        -1_000_000_000i64..1_000_000_000,
        currency(),
    )
        .prop_map(|(a, b, currency)| (signed(a, currency), signed(b, currency)))
}

fn signed(total: i64, currency: Currency) -> Money {
    Money::from_total(total >= 0, total.unsigned_abs(), currency).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Formatting then parsing reproduces the value exactly.
    #[test]
    fn prop_text_round_trip(money in any_money()) {
        let text = money.to_string();
        prop_assert_eq!(text.parse::<Money>(), Ok(money), "round trip of {}", text);
    }

    /// Formatted subunits always have exactly two digits.
    #[test]
    fn prop_format_has_two_subunit_digits(money in any_money()) {
        let text = money.to_string();
        let fraction = text.rsplit('.').next().unwrap();
        prop_assert_eq!(fraction.len(), 2);
    }

    #[test]
    fn prop_add_is_commutative((a, b) in same_currency_pair()) {
        prop_assert_eq!(a.checked_add(&b), b.checked_add(&a));
    }

    #[test]
    fn prop_add_then_sub_restores((a, b) in same_currency_pair()) {
        let sum = a.checked_add(&b).unwrap();
        prop_assert_eq!(sum.checked_sub(&b), Ok(a));
    }

    /// Both operations agree with plain signed integer arithmetic.
    #[test]
    fn prop_matches_signed_arithmetic((a, b) in same_currency_pair()) {
        let sum = a.checked_add(&b).unwrap();
        let difference = a.checked_sub(&b).unwrap();
        prop_assert_eq!(sum.signed_total(), a.signed_total() + b.signed_total());
        prop_assert_eq!(difference.signed_total(), a.signed_total() - b.signed_total());
    }

    /// Zero results always carry the non-negative sign.
    #[test]
    fn prop_zero_result_is_non_negative(money in any_money()) {
        let zero = money.checked_sub(&money).unwrap();
        prop_assert!(zero.is_zero());
        prop_assert!(zero.is_positive());
    }

    /// Exactly one of less, equal, greater holds, and it follows the
    /// sign/units/subunits key.
    #[test]
    fn prop_ordering_is_total(
        a in any_money(),
        b in any_money(),
    ) {
        let b = {
            let mut b = b;
            b.set_currency(a.currency());
            b
        };
        let ordering = a.compare(&b).unwrap();
        let expected = (a.is_positive(), a.units(), a.subunits())
            .cmp(&(b.is_positive(), b.units(), b.subunits()));
        prop_assert_eq!(ordering, expected);
        prop_assert_eq!(ordering == Ordering::Equal, a == b);
        prop_assert_eq!(b.compare(&a).unwrap(), ordering.reverse());
    }

    /// Mixed currencies are rejected by every operation except equality.
    #[test]
    fn prop_mixed_currencies_rejected(a in any_money(), b in any_money()) {
        prop_assume!(a.currency() != b.currency());
        let mismatch = MoneyError::CurrencyMismatch {
            expected: a.currency(),
            got: b.currency(),
        };
        prop_assert_eq!(a.checked_add(&b), Err(mismatch.clone()));
        prop_assert_eq!(a.checked_sub(&b), Err(mismatch.clone()));
        prop_assert_eq!(a.compare(&b), Err(mismatch));
        prop_assert_ne!(a, b);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_scenario_parse() {
        let money: Money = "USD 500.50".parse().unwrap();
        assert_eq!(money, Money::new(true, 500, 50, Currency::Usd).unwrap());
    }

    #[test]
    fn test_scenario_mixed_sign_add() {
        let a = Money::new(true, 500, 50, Currency::Usd).unwrap();
        let b = Money::new(false, 100, 75, Currency::Usd).unwrap();
        assert_eq!(
            a.checked_add(&b),
            Ok(Money::new(true, 399, 75, Currency::Usd).unwrap())
        );
    }

    #[test]
    fn test_signed_helper_normalises_zero() {
        assert!(signed(0, Currency::Usd).is_positive());
        assert_eq!(signed(-150, Currency::Usd).to_string(), "USD -1.50");
    }
}
