//! Server configuration

use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;
use news_services::DEFAULT_TIMEZONE;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    /// Plain HTTP requests are redirected to HTTPS
    Production,
}

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the daily JSON shards
    pub data_dir: PathBuf,
    /// Directory served as static files (the browser client)
    pub public_dir: PathBuf,
    /// Timezone in which "today" is determined
    pub timezone: Tz,
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_dir: PathBuf::from("data"),
            public_dir: PathBuf::from("public"),
            timezone: DEFAULT_TIMEZONE,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads:
    /// - PORT: listen port (default 3000)
    /// - DATA_DIR: shard directory (default "data")
    /// - PUBLIC_DIR: static file directory (default "public")
    /// - NEWS_TIMEZONE: IANA timezone name (default "Europe/Vienna")
    /// - APP_ENV: "production" enables the HTTPS redirect
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                value: raw,
            })?,
            None => defaults.port,
        };

        let timezone = match lookup("NEWS_TIMEZONE") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "NEWS_TIMEZONE".to_string(),
                value: raw,
            })?,
            None => defaults.timezone,
        };

        let environment = match lookup("APP_ENV").as_deref().map(str::trim) {
            Some(env) if env.eq_ignore_ascii_case("production") => Environment::Production,
            _ => Environment::Development,
        };

        Ok(Self {
            port,
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            timezone,
            environment,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
