//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Conversion rates, one entry per ordered currency pair.
    #[serde(default = "default_rates")]
    pub rates: Vec<RateEntry>,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// A single conversion rate: 1 `from` = `rate` `to`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateEntry {
    /// Source currency.
    pub from: Currency,
    /// Target currency.
    pub to: Currency,
    /// Multiplier applied to the source magnitude.
    pub rate: Decimal,
}

impl RateEntry {
    /// Creates a new rate entry.
    #[must_use]
    pub const fn new(from: Currency, to: Currency, rate: Decimal) -> Self {
        Self { from, to, rate }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "moneta=info".to_string()
}

/// The built-in rate table covering every ordered pair of [`Currency::ALL`].
#[must_use]
pub fn default_rates() -> Vec<RateEntry> {
    use Currency::{Egp, Eur, Rub, Usd};

    [
        (Usd, Usd, Decimal::ONE),
        (Usd, Eur, Decimal::new(98, 2)),
        (Usd, Rub, Decimal::new(9526, 2)),
        (Usd, Egp, Decimal::new(1569, 2)),
        (Eur, Usd, Decimal::new(112, 2)),
        (Eur, Eur, Decimal::ONE),
        (Eur, Rub, Decimal::new(9834, 2)),
        (Eur, Egp, Decimal::new(1748, 2)),
        (Rub, Usd, Decimal::new(12, 3)),
        (Rub, Eur, Decimal::new(11, 3)),
        (Rub, Rub, Decimal::ONE),
        (Rub, Egp, Decimal::new(21, 2)),
        (Egp, Usd, Decimal::new(63, 3)),
        (Egp, Eur, Decimal::new(57, 3)),
        (Egp, Rub, Decimal::new(477, 2)),
        (Egp, Egp, Decimal::ONE),
    ]
    .into_iter()
    .map(|(from, to, rate)| RateEntry::new(from, to, rate))
    .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
            log: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or does not match
    /// the configuration shape.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
