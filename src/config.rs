use std::{env, fmt::Display, str::FromStr};

use chrono::{Duration, NaiveTime};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where the "back" link and a missing checkout send the customer.
    pub shop_url: String,
    /// Latest order time that still gets same-day delivery.
    pub cutoff: NaiveTime,
    /// Recipient of the new-order notifications.
    pub shop_email: String,
    /// How long an untouched checkout stays open.
    pub checkout_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shop_url: "/sklep/".to_string(),
            cutoff: NaiveTime::from_hms_opt(15, 30, 0).unwrap_or_default(),
            shop_email: "sklep@localhost".to_string(),
            checkout_ttl: Duration::minutes(120),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "CHECKOUT_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "CHECKOUT_PORT", "8000")?,
            shop_url: try_load(&lookup, "CHECKOUT_SHOP_URL", "/sklep/")?,
            cutoff: parse_cutoff(&var_or_default(&lookup, "CHECKOUT_CUTOFF", "15:30"))?,
            shop_email: try_load(&lookup, "CHECKOUT_SHOP_EMAIL", "sklep@localhost")?,
            checkout_ttl: Duration::minutes(try_load::<u32>(&lookup, "CHECKOUT_TTL_MINUTES", "120")?.into()),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = var_or_default(lookup, key, default);
    value.parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}

fn parse_cutoff(value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| ConfigError {
        key: "CHECKOUT_CUTOFF",
        value: value.to_string(),
        reason: e.to_string(),
    })
}
