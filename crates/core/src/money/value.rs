//! The sign-magnitude monetary value type.

use moneta_shared::Currency;
use rand::Rng;

use super::error::{MoneyError, MoneyResult};

/// Number of subunits in one unit.
pub const SUBUNITS_PER_UNIT: u64 = 100;

/// Largest valid subunits value.
pub const MAX_SUBUNITS: u8 = 99;

/// Upper bound (exclusive) for units produced by [`Money::random`].
const RANDOM_UNITS_LIMIT: u32 = 1000;

/// A monetary amount stored as sign, whole units, hundredths and currency.
///
/// Two values are equal only when all four fields match, so `USD -0.00` and
/// `USD 0.00` are distinct values even though both have zero magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    positive: bool,
    units: u32,
    subunits: u8,
    currency: Currency,
}

impl Money {
    /// Creates a new value, validating the subunits.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::OutOfRange` if `subunits > 99`.
    pub fn new(positive: bool, units: u32, subunits: u8, currency: Currency) -> MoneyResult<Self> {
        validate_subunits(subunits)?;
        Ok(Self {
            positive,
            units,
            subunits,
            currency,
        })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            positive: true,
            units: 0,
            subunits: 0,
            currency,
        }
    }

    /// Creates a non-negative value with a uniformly chosen currency,
    /// units in `[0, 1000)` and subunits in `[0, 100)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let currency = Currency::ALL[rng.random_range(0..Currency::ALL.len())];
        Self {
            positive: true,
            units: rng.random_range(0..RANDOM_UNITS_LIMIT),
            subunits: rng.random_range(0..=MAX_SUBUNITS),
            currency,
        }
    }

    /// Builds a value from a magnitude expressed in subunits.
    pub(crate) fn from_total(positive: bool, total: u64, currency: Currency) -> MoneyResult<Self> {
        let units = u32::try_from(total / SUBUNITS_PER_UNIT).map_err(|_| MoneyError::Overflow)?;
        let subunits = u8::try_from(total % SUBUNITS_PER_UNIT).map_err(|_| MoneyError::Overflow)?;
        Ok(Self {
            positive,
            units,
            subunits,
            currency,
        })
    }

    /// Returns true if the value is non-negative.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns the whole-unit magnitude.
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.units
    }

    /// Returns the hundredths, always in `0..=99`.
    #[must_use]
    pub const fn subunits(&self) -> u8 {
        self.subunits
    }

    /// Returns the currency tag.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the magnitude is zero, whatever the sign.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.units == 0 && self.subunits == 0
    }

    /// Returns the same magnitude with a non-negative sign.
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            positive: true,
            ..*self
        }
    }

    /// Magnitude expressed in subunits.
    #[must_use]
    pub fn total_subunits(&self) -> u64 {
        u64::from(self.units) * SUBUNITS_PER_UNIT + u64::from(self.subunits)
    }

    /// Magnitude in subunits, negated for negative values.
    #[must_use]
    pub fn signed_total(&self) -> i64 {
        // At most (u32::MAX * 100 + 99), which always fits in i64.
        let magnitude = i64::from(self.units) * 100 + i64::from(self.subunits);
        if self.positive { magnitude } else { -magnitude }
    }

    /// Sets the sign.
    pub fn set_positive(&mut self, positive: bool) {
        self.positive = positive;
    }

    /// Sets the whole-unit magnitude.
    pub fn set_units(&mut self, units: u32) {
        self.units = units;
    }

    /// Sets the hundredths.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::OutOfRange` if `subunits > 99`; the value is left
    /// unchanged.
    pub fn set_subunits(&mut self, subunits: u8) -> MoneyResult<()> {
        validate_subunits(subunits)?;
        self.subunits = subunits;
        Ok(())
    }

    /// Relabels the currency without rescaling the magnitude.
    ///
    /// Use [`Money::convert_to`] to change currency at an exchange rate.
    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }
}

fn validate_subunits(subunits: u8) -> MoneyResult<()> {
    if subunits > MAX_SUBUNITS {
        return Err(MoneyError::OutOfRange { subunits });
    }
    Ok(())
}
