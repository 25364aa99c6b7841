//! Text form of a monetary value: `"<CURRENCY> [-]<units>.<subunits>"`.
//!
//! Subunits are always written and read as exactly two digits, so every
//! value survives a format/parse round trip, including `-0.00`.

use std::fmt;
use std::str::FromStr;

use moneta_shared::Currency;

use super::error::{MoneyError, MoneyResult, ParseMoneyError};
use super::value::Money;

const SUBUNIT_DIGITS: usize = 2;

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_positive() { "" } else { "-" };
        write!(
            f,
            "{} {sign}{}.{:02}",
            self.currency(),
            self.units(),
            self.subunits()
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split(' ').collect();
        let [currency, amount] = tokens.as_slice() else {
            return Err(ParseMoneyError::TokenCount(tokens.len()).into());
        };
        let currency: Currency = currency.parse().map_err(ParseMoneyError::from)?;

        let parts: Vec<&str> = amount.split('.').collect();
        let [whole, fraction] = parts.as_slice() else {
            return Err(ParseMoneyError::MissingDecimalPoint.into());
        };

        let positive = !whole.starts_with('-');
        let digits = whole.strip_prefix(['+', '-']).unwrap_or(*whole);
        let units = parse_digits::<u32>(digits)
            .ok_or_else(|| ParseMoneyError::InvalidUnits((*whole).to_string()))?;

        let subunits = if fraction.len() == SUBUNIT_DIGITS {
            parse_digits::<u8>(fraction)
        } else {
            None
        }
        .ok_or_else(|| ParseMoneyError::InvalidSubunits((*fraction).to_string()))?;

        Self::new(positive, units, subunits, currency)
    }
}

impl Money {
    /// Replaces every field with the parsed value of `s`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Parse` if `s` is malformed; the value is left
    /// unchanged.
    pub fn set_from_str(&mut self, s: &str) -> MoneyResult<()> {
        *self = s.parse()?;
        Ok(())
    }
}

/// Parses a non-empty run of ASCII digits; signs and whitespace are rejected.
fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
