//! Application configuration management.

use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Remote ledger service configuration.
    pub remote: RemoteConfig,
}

/// Remote ledger service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the hosted backend (e.g., `https://xyz.example.co`).
    pub base_url: String,
    /// Public API key sent with every request.
    pub api_key: String,
    /// Request timeout in seconds.
    ///
    /// The hosted service defines no timeout of its own; expiry is
    /// treated as "upstream unavailable".
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Whether idempotent reads are retried once on transport failure.
    #[serde(default = "default_retry_reads")]
    pub retry_reads: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_retry_reads() -> bool {
    true
}

impl RemoteConfig {
    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MAMMON").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let cfg: RemoteConfig = serde_json::from_str(
            r#"{"base_url": "https://ledger.test", "api_key": "anon"}"#,
        )
        .expect("config should parse");

        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert!(cfg.retry_reads);
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg: RemoteConfig = serde_json::from_str(
            r#"{"base_url": "https://ledger.test", "api_key": "anon", "timeout_secs": 3, "retry_reads": false}"#,
        )
        .expect("config should parse");

        assert_eq!(cfg.timeout(), Duration::from_secs(3));
        assert!(!cfg.retry_reads);
    }
}
