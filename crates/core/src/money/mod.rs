//! The monetary value type and its operations.

pub mod arithmetic;
pub mod codec;
pub mod compare;
pub mod error;
pub mod value;

#[cfg(test)]
mod props;

pub use error::{MoneyError, MoneyResult, ParseMoneyError};
pub use value::{MAX_SUBUNITS, Money, SUBUNITS_PER_UNIT};
