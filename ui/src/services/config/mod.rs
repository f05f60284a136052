//! Application configuration.
//!
//! The only recognised option is the REST API base URL. It is fixed at build
//! time through `ITRIBE_API_BASE_URL` and injected into the app at startup.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::errors::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: trimmed.to_string(),
            });
        }
        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL baked in at build time, falling back to the default
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("ITRIBE_API_BASE_URL") {
            Some(url) => Self::new(url),
            None => {
                warn!(
                    "ITRIBE_API_BASE_URL not set at build time, using {}",
                    DEFAULT_API_BASE_URL
                );
                Ok(Self::default())
            }
        }
    }

    /// Full URL for an API path, joined with exactly one slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = AppConfig::new("https://api.itribe.example/").unwrap();
        assert_eq!(config.api_base_url, "https://api.itribe.example");
        assert_eq!(
            config.endpoint("/register"),
            "https://api.itribe.example/register"
        );
        assert_eq!(config.endpoint("login"), "https://api.itribe.example/login");
    }

    #[test]
    fn test_rejects_empty_and_schemeless_urls() {
        assert_eq!(AppConfig::new("  "), Err(ConfigError::MissingBaseUrl));
        assert_eq!(
            AppConfig::new("api.itribe.example"),
            Err(ConfigError::InvalidBaseUrl {
                value: "api.itribe.example".to_string()
            })
        );
    }

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(
            AppConfig::default().endpoint("register"),
            "http://localhost:8080/register"
        );
    }
}
