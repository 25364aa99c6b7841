//! Addition and subtraction with sign-magnitude semantics.
//!
//! Both operations require matching currencies and never wrap: a result
//! whose units do not fit returns `MoneyError::Overflow`. A result of
//! exactly zero is always non-negative.

use std::cmp::Ordering;

use super::error::{MoneyError, MoneyResult};
use super::value::Money;

impl Money {
    /// Returns `self + other`.
    ///
    /// Same-sign operands add their magnitudes. Mixed-sign operands subtract
    /// the smaller magnitude from the larger and take the sign of the larger.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ, or
    /// `MoneyError::Overflow` if the sum does not fit.
    pub fn checked_add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;

        if self.is_positive() == other.is_positive() {
            let total = self
                .total_subunits()
                .checked_add(other.total_subunits())
                .ok_or(MoneyError::Overflow)?;
            return Self::from_total(self.is_positive() || total == 0, total, self.currency());
        }

        let (a, b) = (self.abs(), other.abs());
        let (difference, sign) = if a.compare(&b)? == Ordering::Less {
            (b.checked_sub(&a)?, other.is_positive())
        } else {
            (a.checked_sub(&b)?, self.is_positive())
        };

        Self::from_total(
            sign || difference.is_zero(),
            difference.total_subunits(),
            self.currency(),
        )
    }

    /// Returns `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` if the currencies differ, or
    /// `MoneyError::Overflow` if the difference does not fit.
    pub fn checked_sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;

        let difference = self
            .signed_total()
            .checked_sub(other.signed_total())
            .ok_or(MoneyError::Overflow)?;

        Self::from_total(difference >= 0, difference.unsigned_abs(), self.currency())
    }

    /// Adds an amount given as parts, in this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::OutOfRange` for invalid subunits, otherwise the
    /// same errors as [`Money::checked_add`].
    pub fn checked_add_parts(&self, positive: bool, units: u32, subunits: u8) -> MoneyResult<Self> {
        self.checked_add(&Self::new(positive, units, subunits, self.currency())?)
    }

    /// Subtracts an amount given as parts, in this value's currency.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::OutOfRange` for invalid subunits, otherwise the
    /// same errors as [`Money::checked_sub`].
    pub fn checked_sub_parts(&self, positive: bool, units: u32, subunits: u8) -> MoneyResult<Self> {
        self.checked_sub(&Self::new(positive, units, subunits, self.currency())?)
    }
}
