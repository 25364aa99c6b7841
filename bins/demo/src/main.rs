//! Moneta console demo
//!
//! Builds a few monetary values, combines and converts them, and prints the
//! results.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{Currency, Money, RateTable};
use moneta_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rates = RateTable::from_config(&config).context("Invalid rate table")?;
    info!(pairs = rates.len(), "Rate table loaded");

    let money1 = Money::new(true, 100, 0, Currency::Usd)?;
    let money2 = Money::new(true, 1000, 0, Currency::Egp)?;

    println!("Money1: {money1}");
    println!("Money2: {money2}");
    println!();

    let money1 = money1.checked_add_parts(true, 200, 20)?;
    let money2 = money2.checked_sub_parts(true, 100, 50)?;

    println!("Money1 after addition: {money1}");
    println!("Money2 after subtraction: {money2}");
    println!();

    let money3 = money1.convert_to(Currency::Egp, &rates)?;
    println!("Money1 after conversion to EGP: {money3}");

    let money4 = money2.convert_to(Currency::Usd, &rates)?;
    println!("Money2 after conversion to USD: {money4}");
    println!();

    let parsed: Money = "USD -123.45".parse()?;
    let ordering = money1.compare(&parsed)?;
    println!("{money1} compared to {parsed}: {ordering:?}");

    let random = Money::random(&mut rand::rng());
    println!("Random value: {random}");

    info!("Demo complete");
    Ok(())
}
