use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Runtime configuration, environment-driven.
#[derive(Clone)]
pub struct Config {
    pub bind_address: String,
    pub database_url: String,
    /// Origin of the kiosk frontend, allowed through CORS.
    pub frontend_origin: String,
    /// BCM number of the GPIO line wired to the reader's reset pin.
    pub reset_pin: u8,
    /// Set CARDTILL_READER=0 to run the ledger without a reader attached.
    pub reader_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_address: var_or("CARDTILL_BIND", "0.0.0.0:8000"),
            database_url: var_or("CARDTILL_DB", "sqlite://cardtill.db?mode=rwc"),
            frontend_origin: var_or("CARDTILL_ORIGIN", "http://localhost:3000"),
            reset_pin: parse_or("CARDTILL_RESET_PIN", 4),
            reader_enabled: parse_or::<u8>("CARDTILL_READER", 1) != 0,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr + Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("invalid {key} value {raw:?}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}
