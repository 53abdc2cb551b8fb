//! Runtime configuration read from the environment.

use std::time::Duration;

use rickandmorty_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "RICKANDMORTY_API_URL";
/// Environment variable overriding the per-request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "RICKANDMORTY_TIMEOUT_SECS";

/// Connection settings for [`crate::DataService`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    /// Reads [`API_URL_VAR`] and [`TIMEOUT_VAR`], falling back to the
    /// defaults for anything unset, empty or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base_url = lookup(API_URL_VAR)
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout = lookup(TIMEOUT_VAR)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);
        Self { base_url, timeout }
    }
}
