//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use blognest_core::services::Latency;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Where the session is saved between runs. Unset keeps it in memory.
    pub storage_path: Option<PathBuf>,
    pub latency: Latency,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Latency::default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            storage_path: env::var("STORAGE_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            latency: Latency {
                credentials: Self::millis("AUTH_DELAY_MS").unwrap_or(defaults.credentials),
                oauth: Self::millis("OAUTH_DELAY_MS").unwrap_or(defaults.oauth),
            },
        }
    }

    fn millis(key: &str) -> Option<Duration> {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
    }
}
