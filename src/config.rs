use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::{spoonacular_service::SPOONACULAR_API_BASE, unwrangle_service::UNWRANGLE_API_BASE};

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

/// Settings read from the environment (and `.env`) at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub spoonacular_api_key: String,
    pub spoonacular_base_url: String,
    pub unwrangle_api_key: String,
    pub unwrangle_base_url: String,
    pub upstream_timeout: Duration,
    /// Built frontend to serve next to the API; unset means API only
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid(key, value) => write!(f, "{} has an invalid value: '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid("PORT", raw))?,
            None => 3000,
        };

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("UPSTREAM_TIMEOUT_SECS", raw))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            host: or_default("HOST", "0.0.0.0"),
            port,
            database_url: required("DATABASE_URL")?,
            spoonacular_api_key: required("SPOONACULAR_API_KEY")?,
            spoonacular_base_url: or_default("SPOONACULAR_BASE_URL", SPOONACULAR_API_BASE),
            unwrangle_api_key: required("UNWRANGLE_API_KEY")?,
            unwrangle_base_url: or_default("UNWRANGLE_BASE_URL", UNWRANGLE_API_BASE),
            upstream_timeout: Duration::from_secs(timeout_secs),
            static_dir: lookup("STATIC_DIR").filter(|v| !v.is_empty()).map(PathBuf::from),
        })
    }
}
