//! Ordering of monetary values.
//!
//! Values of the same currency are ordered by sign (negative first), then
//! units, then subunits. Values of different currencies are unordered:
//! [`Money::compare`] rejects them and `partial_cmp` returns `None`, while
//! equality simply reports them as different.

use std::cmp::Ordering;

use super::error::{MoneyError, MoneyResult};
use super::value::Money;

impl Money {
    /// Compares two values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.order_key().cmp(&other.order_key()))
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency() != other.currency() {
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency(),
                got: other.currency(),
            });
        }
        Ok(())
    }

    // Lexicographic sign/units/subunits; `false < true` puts negatives first.
    fn order_key(&self) -> (bool, u32, u8) {
        (self.is_positive(), self.units(), self.subunits())
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}
