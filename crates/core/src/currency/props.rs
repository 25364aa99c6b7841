//! Property-based tests for currency conversion.
//!
//! Conversion truncates, so A -> B -> A is checked against a bound rather
//! than for equality: with exact product `t * r1 * r2`, the result lies in
//! `[t * r1 * r2 - r2 - 1, t * r1 * r2]`.

use moneta_shared::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_amount;
use super::rates::RateTable;
use crate::money::Money;

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy for values up to 1,000,000.00 in any currency and sign.
fn money() -> impl Strategy<Value = Money> {
    (any::<bool>(), 0u32..1_000_000, 0u8..=99, currency()).prop_map(
        |(positive, units, subunits, currency)| {
            Money::new(positive, units, subunits, currency).unwrap()
        },
    )
}

/// Strategy for positive rates from 0.0001 to 1000.0000.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_convert_to_own_currency_is_identity(money in money()) {
        let rates = RateTable::default();
        prop_assert_eq!(money.convert_to(money.currency(), &rates), Ok(money));
    }

    #[test]
    fn prop_convert_preserves_sign_and_sets_currency(
        money in money(),
        target in currency(),
    ) {
        let rates = RateTable::default();
        let converted = money.convert_to(target, &rates).unwrap();
        prop_assert_eq!(converted.is_positive(), money.is_positive());
        prop_assert_eq!(converted.currency(), target);
    }

    #[test]
    fn prop_round_trip_within_truncation_bound(
        money in money(),
        target in currency(),
    ) {
        let rates = RateTable::default();
        let there = rates.rate(money.currency(), target).unwrap();
        let back = rates.rate(target, money.currency()).unwrap();

        let result = money
            .convert_to(target, &rates)
            .and_then(|converted| converted.convert_to(money.currency(), &rates))
            .unwrap();

        let exact = Decimal::from(money.total_subunits()) * there * back;
        let actual = Decimal::from(result.total_subunits());
        prop_assert!(actual <= exact, "{} > {}", actual, exact);
        prop_assert!(actual >= exact - back - Decimal::ONE, "{} too far below {}", actual, exact);
    }

    #[test]
    fn prop_convert_amount_never_exceeds_exact_product(
        total in 0u64..100_000_000_000,
        rate in positive_rate(),
    ) {
        let converted = Decimal::from(convert_amount(total, rate).unwrap());
        let exact = Decimal::from(total) * rate;
        prop_assert!(converted <= exact);
        prop_assert!(exact - converted < Decimal::ONE);
    }

    #[test]
    fn prop_convert_amount_is_monotonic(
        a in 0u64..100_000_000_000,
        b in 0u64..100_000_000_000,
        rate in positive_rate(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(convert_amount(low, rate).unwrap() <= convert_amount(high, rate).unwrap());
    }
}
