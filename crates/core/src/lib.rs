//! Core monetary logic for Moneta.
//!
//! This crate contains the value type and its calculations with no I/O.
//!
//! # Modules
//!
//! - `money` - Sign-magnitude monetary values: arithmetic, ordering, text form
//! - `currency` - Rate table and cross-currency conversion

pub mod currency;
pub mod money;

pub use currency::RateTable;
pub use moneta_shared::Currency;
pub use money::{Money, MoneyError, MoneyResult, ParseMoneyError};
