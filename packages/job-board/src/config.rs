use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the jobs API, without a trailing slash
    pub api_url: String,
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let api_url = env::var("API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            _ => None,
        };

        Ok(Self::new(api_url).with_timeout(request_timeout))
    }

    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_base_url(&api_url.into()),
            request_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = Config::new("http://api.example.org/ ");
        assert_eq!(config.api_url, "http://api.example.org");

        let config = Config::new("http://api.example.org//");
        assert_eq!(config.api_url, "http://api.example.org");
    }

    #[test]
    fn timeout_is_unset_by_default() {
        let config = Config::new(DEFAULT_API_URL);
        assert!(config.request_timeout.is_none());

        let config = config.with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }
}
