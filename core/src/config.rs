//! Client configuration loaded from the environment.

use std::time::Duration;

/// Backend used when `PORTFOLIO_BACKEND_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// Per-request timeout applied by the adapter.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Environment variable selecting the backend base URL.
pub const BASE_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";

/// Connection settings for [`HttpClient`](crate::adapter::HttpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `PORTFOLIO_BACKEND_URL` | `http://localhost:8001` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::default().with_base_url(&base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn env_overrides_base_url() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://api.example.dev/".to_string())
        });
        assert_eq!(config.base_url, "https://api.example.dev");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
