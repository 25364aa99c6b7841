//! Shared types and configuration for Moneta.
//!
//! This crate provides what every other crate agrees on:
//! - The closed currency enumeration
//! - Rate-table configuration and its built-in defaults
//! - Configuration loading from files and the environment

pub mod config;
pub mod types;

pub use config::{AppConfig, LogConfig, RateEntry};
pub use types::{Currency, UnknownCurrency};
