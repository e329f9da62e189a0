//! Application configuration, built once at process startup.
//!
//! Every secret and connection string the service uses lives here; no other
//! module reads the environment for these settings.

pub const DEFAULT_CACHE_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Bearer tokens expire after one hour unless TOKEN_EXPIRY_SECS overrides it.
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection URL (DATABASE_URL, required)
    pub database_url: String,
    /// Redis connection URL for the cache pass-through (CACHE_URL)
    pub cache_url: String,
    /// Shared secret for signing bearer tokens (TOKEN_SECRET, required)
    pub token_secret: String,
    /// Token lifetime in seconds (TOKEN_EXPIRY_SECS)
    pub token_expiry_secs: u64,
    /// Listen address (BIND_ADDR)
    pub bind_addr: String,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
    #[error("{0} must be a positive integer, got {1:?}")]
    Invalid(&'static str, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    // Separated from the environment so tests don't have to mutate
    // process-global state.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let token_secret = lookup("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;

        let token_expiry_secs = match lookup("TOKEN_EXPIRY_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("TOKEN_EXPIRY_SECS", raw))?,
            None => DEFAULT_TOKEN_EXPIRY_SECS,
        };

        Ok(Config {
            database_url,
            cache_url: lookup("CACHE_URL").unwrap_or_else(|| DEFAULT_CACHE_URL.to_string()),
            token_secret,
            token_expiry_secs,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_required_and_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/skillet"),
            ("TOKEN_SECRET", "sekrit"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/skillet");
        assert_eq!(config.token_secret, "sekrit");
        assert_eq!(config.cache_url, DEFAULT_CACHE_URL);
        assert_eq!(config.token_expiry_secs, DEFAULT_TOKEN_EXPIRY_SECS);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_missing_database_url() {
        let err = Config::from_lookup(lookup_from(&[("TOKEN_SECRET", "sekrit")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn test_missing_token_secret() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("TOKEN_SECRET"));
    }

    #[test]
    fn test_all_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/skillet"),
            ("TOKEN_SECRET", "sekrit"),
            ("CACHE_URL", "redis://cache:6380"),
            ("TOKEN_EXPIRY_SECS", "120"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.cache_url, "redis://cache:6380");
        assert_eq!(config.token_expiry_secs, 120);
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_expiry() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("TOKEN_SECRET", "sekrit"),
            ("TOKEN_EXPIRY_SECS", "an hour"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid("TOKEN_EXPIRY_SECS", "an hour".to_string())
        );
    }
}
