use larder_core::api::DEFAULT_TIMEOUT;
use larder_core::cache::DEFAULT_TTL;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub database_url: String,
    pub spoonacular_api_key: String,
    pub spoonacular_base_url: Option<String>,
    pub recipe_cache_ttl: Duration,
    pub recipe_api_timeout: Duration,
    pub bind_addr: String,
}

impl Config {
    /// Environment variables:
    /// - `SECRET_KEY` (required)
    /// - `SPOONACULAR_API_KEY` (required)
    /// - `DATABASE_URL`: SQLite path, default `larder.db`
    /// - `SPOONACULAR_BASE_URL`: override the API origin
    /// - `RECIPE_CACHE_TTL_SECS`: default 3600
    /// - `RECIPE_API_TIMEOUT_SECS`: default 10
    /// - `BIND_ADDR`: default `0.0.0.0:3000`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let seconds = |key: &'static str, default: Duration| match lookup(key) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid { key, value }),
            None => Ok(default),
        };

        Ok(Self {
            secret_key: required("SECRET_KEY")?,
            spoonacular_api_key: required("SPOONACULAR_API_KEY")?,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "larder.db".to_string()),
            spoonacular_base_url: lookup("SPOONACULAR_BASE_URL"),
            recipe_cache_ttl: seconds("RECIPE_CACHE_TTL_SECS", DEFAULT_TTL)?,
            recipe_api_timeout: seconds("RECIPE_API_TIMEOUT_SECS", DEFAULT_TIMEOUT)?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
        })
    }
}
