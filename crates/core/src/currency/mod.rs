//! Currency conversion over a fixed rate table.

pub mod conversion;
pub mod rates;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use rates::RateTable;
