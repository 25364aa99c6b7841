//! The fixed conversion rate table.
//!
//! A table is built once, from configuration or the built-in defaults, and
//! is read-only afterwards. It is always total: every ordered pair of
//! [`Currency::ALL`] has a strictly positive rate and every identity pair
//! has rate 1.

use std::collections::HashMap;

use moneta_shared::config::default_rates;
use moneta_shared::{AppConfig, Currency, RateEntry};
use rust_decimal::Decimal;
use tracing::debug;

use crate::money::{MoneyError, MoneyResult};

/// Mapping from ordered currency pair to a multiplier (1 `from` = rate `to`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl RateTable {
    /// Builds a table from rate entries, validating that it is total.
    ///
    /// A later entry for the same pair replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidRate` for a non-positive rate or an
    /// identity rate other than 1, and `MoneyError::IncompleteRateTable` for
    /// the first missing ordered pair.
    pub fn from_entries<I>(entries: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = RateEntry>,
    {
        let mut rates = HashMap::new();
        for RateEntry { from, to, rate } in entries {
            if rate <= Decimal::ZERO || (from == to && rate != Decimal::ONE) {
                return Err(MoneyError::InvalidRate { from, to, rate });
            }
            rates.insert((from, to), rate);
        }

        for from in Currency::ALL {
            for to in Currency::ALL {
                if !rates.contains_key(&(from, to)) {
                    return Err(MoneyError::IncompleteRateTable { from, to });
                }
            }
        }

        debug!(pairs = rates.len(), "Rate table built");
        Ok(Self { rates })
    }

    /// Builds the table described by the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`RateTable::from_entries`].
    pub fn from_config(config: &AppConfig) -> MoneyResult<Self> {
        Self::from_entries(config.rates.iter().cloned())
    }

    /// Looks up the rate for converting `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::RateNotFound` if the pair is absent.
    pub fn rate(&self, from: Currency, to: Currency) -> MoneyResult<Decimal> {
        self.rates
            .get(&(from, to))
            .copied()
            .ok_or(MoneyError::RateNotFound { from, to })
    }

    /// Number of ordered pairs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_pairs_unchecked(
        pairs: impl IntoIterator<Item = ((Currency, Currency), Decimal)>,
    ) -> Self {
        Self {
            rates: pairs.into_iter().collect(),
        }
    }
}

impl Default for RateTable {
    /// The built-in table for every supported currency.
    fn default() -> Self {
        Self {
            rates: default_rates()
                .into_iter()
                .map(|entry| ((entry.from, entry.to), entry.rate))
                .collect(),
        }
    }
}
