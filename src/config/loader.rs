//! Load settings from environment variables (after `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl AppConfig {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to honour `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let max_connections: u32 = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            &DEFAULT_MAX_CONNECTIONS.to_string(),
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }
        let retry_secs: u64 = parse_or(
            "DB_RETRY_DELAY_SECS",
            get("DB_RETRY_DELAY_SECS"),
            &DEFAULT_RETRY_DELAY_SECS.to_string(),
        )?;

        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
            retry_delay: Duration::from_secs(retry_secs),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: &str) -> Result<T, ConfigError> {
    let value = raw.unwrap_or_else(|| default.to_string());
    value.parse().map_err(|_| ConfigError::Invalid { key, value })
}
