//! Solar API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default request body cap (16 KiB). Calculator and lead bodies are tiny.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Default number of leads kept in memory before the oldest is evicted.
pub const DEFAULT_MAX_LEADS: usize = 10_000;

/// Default log filter when neither `SOLAR_API_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,solar=debug";

/// Solar API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,

    /// Leads kept in the in-memory inbox
    pub max_leads: usize,

    /// Log filter override (EnvFilter syntax)
    pub log_filter: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_leads: DEFAULT_MAX_LEADS,
            log_filter: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            host: parse_or("SOLAR_API_HOST", &lookup, defaults.host)?,
            port: parse_or("SOLAR_API_PORT", &lookup, defaults.port)?,
            max_body_bytes: parse_or("SOLAR_API_MAX_BODY_BYTES", &lookup, defaults.max_body_bytes)?,
            max_leads: parse_or("SOLAR_API_MAX_LEADS", &lookup, defaults.max_leads)?,
            log_filter: lookup("SOLAR_API_LOG").filter(|v| !v.trim().is_empty()),
        };

        if config.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue("SOLAR_API_MAX_BODY_BYTES".to_string()));
        }

        if config.max_leads == 0 {
            return Err(ConfigError::InvalidValue("SOLAR_API_MAX_LEADS".to_string()));
        }

        Ok(config)
    }

    /// Socket address the server binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_bytes, 16 * 1024);
        assert_eq!(config.max_leads, 10_000);
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:3000");
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("SOLAR_API_HOST", "127.0.0.1"),
            ("SOLAR_API_PORT", "8080"),
            ("SOLAR_API_MAX_BODY_BYTES", "1024"),
            ("SOLAR_API_MAX_LEADS", "50"),
            ("SOLAR_API_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address().to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.max_leads, 50);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values() {
        let err = ApiConfig::from_lookup(lookup(&[("SOLAR_API_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SOLAR_API_PORT");

        assert!(ApiConfig::from_lookup(lookup(&[("SOLAR_API_HOST", "localhost")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("SOLAR_API_MAX_BODY_BYTES", "0")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("SOLAR_API_MAX_LEADS", "0")])).is_err());
        assert!(ApiConfig::from_lookup(lookup(&[("SOLAR_API_MAX_LEADS", "-5")])).is_err());
    }
}
