//! Server configuration
//!
//! Read from the process environment (after `.env` is loaded by `main`).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FMCSA_BASE_URL: &str = "https://mobile.fmcsa.dot.gov/qc/services";
pub const DEFAULT_FMCSA_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Static access tokens, one per route. `None` leaves the route open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiTokens {
    pub verify_carrier: Option<String>,
    pub search_loads: Option<String>,
    pub load_details: Option<String>,
    pub loads: Option<String>,
    pub negotiate: Option<String>,
    pub book_load: Option<String>,
    pub store_call_data: Option<String>,
    pub health: Option<String>,
    pub stats: Option<String>,
}

impl ApiTokens {
    /// Same token on every route
    pub fn shared(token: impl Into<String>) -> Self {
        let token = Some(token.into());
        Self {
            verify_carrier: token.clone(),
            search_loads: token.clone(),
            load_details: token.clone(),
            loads: token.clone(),
            negotiate: token.clone(),
            book_load: token.clone(),
            store_call_data: token.clone(),
            health: token.clone(),
            stats: token,
        }
    }

    /// Routes that will run without authentication
    pub fn open_routes(&self) -> Vec<&'static str> {
        [
            ("verify-carrier", &self.verify_carrier),
            ("search-loads", &self.search_loads),
            ("load-details", &self.load_details),
            ("loads", &self.loads),
            ("negotiate", &self.negotiate),
            ("book-load", &self.book_load),
            ("store-call-data", &self.store_call_data),
            ("health", &self.health),
            ("stats", &self.stats),
        ]
        .into_iter()
        .filter(|(_, token)| token.is_none())
        .map(|(route, _)| route)
        .collect()
    }
}

/// FMCSA QCMobile registry settings
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    pub base_url: String,
    pub web_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub tokens: ApiTokens,
    /// Registry is disabled when no web key is configured
    pub registry: Option<RegistryConfig>,
    /// Replaces the built-in demo loads
    pub loads_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let fallback = get("API_KEY");
        let token = |key: &str| get(key).or_else(|| fallback.clone());
        let tokens = ApiTokens {
            verify_carrier: token("API_KEY_VERIFY_CARRIER"),
            search_loads: token("API_KEY_SEARCH_LOADS"),
            load_details: token("API_KEY_LOAD_DETAILS"),
            loads: token("API_KEY_LOADS"),
            negotiate: token("API_KEY_NEGOTIATE"),
            book_load: token("API_KEY_BOOK_LOAD"),
            store_call_data: token("API_KEY_STORE_CALL_DATA"),
            health: token("API_KEY_HEALTH"),
            stats: token("API_KEY_STATS"),
        };

        let registry = match get("FMCSA_WEB_KEY") {
            Some(web_key) => {
                let timeout_ms = match get("FMCSA_TIMEOUT_MS") {
                    Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                        key: "FMCSA_TIMEOUT_MS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_FMCSA_TIMEOUT_MS,
                };
                Some(RegistryConfig {
                    base_url: get("FMCSA_BASE_URL")
                        .unwrap_or_else(|| DEFAULT_FMCSA_BASE_URL.to_string()),
                    web_key,
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
            None => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            tokens,
            registry,
            loads_file: get("LOADS_FILE").map(PathBuf::from),
        })
    }
}
