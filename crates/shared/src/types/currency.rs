//! The closed set of currencies a monetary value can be tagged with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ISO 4217 currency codes supported by the system.
///
/// Adding a variant means adding it to [`Currency::ALL`] and extending the
/// rate table with every ordered pair it takes part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Russian Ruble
    Rub,
    /// Egyptian Pound
    Egp,
}

/// Returned when a currency code is not part of [`Currency::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    /// Every supported currency, in declaration order.
    pub const ALL: [Self; 4] = [Self::Usd, Self::Eur, Self::Rub, Self::Egp];

    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Rub => "RUB",
            Self::Egp => "EGP",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = UnknownCurrency;

    /// Codes are matched exactly; `"usd"` is not a currency.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
