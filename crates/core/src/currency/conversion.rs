//! Currency conversion logic.
//!
//! CRITICAL: conversion truncates toward zero. The converted magnitude in
//! subunits is `floor(total_subunits * rate)`, computed in exact decimal
//! arithmetic. Converting A -> B -> A therefore never gains value and can
//! lose up to `rate(B, A) + 1` subunits to truncation.

use moneta_shared::Currency;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use super::rates::RateTable;
use crate::money::{Money, MoneyError, MoneyResult};

/// Converts a magnitude in subunits using the given rate, truncating.
///
/// # Errors
///
/// Returns `MoneyError::Overflow` if the product does not fit in `u64`.
pub fn convert_amount(total_subunits: u64, rate: Decimal) -> MoneyResult<u64> {
    Decimal::from(total_subunits)
        .checked_mul(rate)
        .map(|converted| converted.round_dp_with_strategy(0, RoundingStrategy::ToZero))
        .and_then(|converted| converted.to_u64())
        .ok_or(MoneyError::Overflow)
}

impl Money {
    /// Returns the equivalent amount in `target`, keeping the sign.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::RateNotFound` if the table has no rate for the
    /// pair, or `MoneyError::Overflow` if the result does not fit.
    pub fn convert_to(&self, target: Currency, rates: &RateTable) -> MoneyResult<Self> {
        let rate = rates.rate(self.currency(), target)?;
        let converted = convert_amount(self.total_subunits(), rate)?;
        let result = Self::from_total(self.is_positive(), converted, target)?;

        debug!(
            from = %self,
            to = %result,
            %rate,
            "Converted monetary value"
        );
        Ok(result)
    }
}
