// src/config.rs
use std::net::IpAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Process configuration, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Postgres URL. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub host: IpAddr,
    /// First port tried; the next 20 are fallbacks.
    pub port: u16,
    pub max_connections: u32,
}

impl AppConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let host = parse_or(&lookup, "HOST", Self::DEFAULT_HOST.parse().ok())?;
        let port = parse_or(&lookup, "PORT", Some(Self::DEFAULT_PORT))?;
        let max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            Some(Self::DEFAULT_MAX_CONNECTIONS),
        )?;

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Option<T>,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        }),
        None => default.ok_or_else(|| ConfigError::ParseError {
            key: key.to_string(),
            details: "no default available".to_string(),
        }),
    }
}
