//! Money error types.
//!
//! Every failure is returned to the caller immediately; nothing here is
//! clamped, defaulted or retried.

use moneta_shared::{Currency, UnknownCurrency};
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building or combining monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Subunits must be a hundredths value.
    #[error("Subunits must be between 0 and 99, got {subunits}")]
    OutOfRange {
        /// The rejected value.
        subunits: u8,
    },

    /// Operands are in different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: Currency,
        /// Currency of the argument.
        got: Currency,
    },

    /// No conversion rate for the currency pair.
    #[error("No conversion rate from {from} to {to}")]
    RateNotFound {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// Conversion rate is zero, negative, or a non-unit identity rate.
    #[error("Invalid conversion rate {rate} from {from} to {to}")]
    InvalidRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// The rejected rate.
        rate: Decimal,
    },

    /// A rate table is missing an ordered pair.
    #[error("Rate table has no entry from {from} to {to}")]
    IncompleteRateTable {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },

    /// The result does not fit in the units range.
    #[error("Monetary amount overflow")]
    Overflow,

    /// Text could not be parsed as a monetary value.
    #[error(transparent)]
    Parse(#[from] ParseMoneyError),
}

/// Why a textual monetary value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Input is not exactly `<CURRENCY> <amount>`.
    #[error("Expected 2 space-separated tokens, got {0}")]
    TokenCount(usize),

    /// Amount is not `<units>.<subunits>`.
    #[error("Amount must contain exactly one decimal point")]
    MissingDecimalPoint,

    /// Whole part is not an unsigned integer in range.
    #[error("Invalid units: {0:?}")]
    InvalidUnits(String),

    /// Fractional part is not exactly two digits.
    #[error("Invalid subunits: {0:?}")]
    InvalidSubunits(String),

    /// Currency code is not in the supported set.
    #[error(transparent)]
    UnknownCurrency(#[from] UnknownCurrency),
}
