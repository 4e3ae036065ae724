//! Client configuration

use serde::Deserialize;

use crate::client::REQUEST_CREATE_PATH;

/// Configuration for the outbound submission client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the loan backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INTAKE"))
            .build()?
            .try_deserialize()
    }

    /// Returns the full URL of the create endpoint
    pub fn create_request_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            REQUEST_CREATE_PATH
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_create_request_url_joins_cleanly() {
        let config = ClientConfig {
            base_url: "https://loans.example.com/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.create_request_url(),
            "https://loans.example.com/request/create"
        );
    }
}
