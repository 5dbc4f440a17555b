//! Storefront configuration.

use crate::model::DEFAULT_LIMIT;
use std::time::Duration;

/// Environment variable naming the backend origin.
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";

/// Configuration for connecting the storefront to its backend.
///
/// Both services sit behind one origin; the gateways append their own
/// resource paths (`/products`, `/inventories`) to [`Self::api_url`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend base URL (e.g., "http://localhost:8080").
    pub api_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Page size the product list starts with.
    pub page_size: u32,
}

impl StoreConfig {
    /// Create a new configuration against the given origin.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: 30,
            page_size: DEFAULT_LIMIT,
        }
    }

    /// Read the configuration from the environment, falling back to the
    /// development default for anything unset.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| {
            tracing::debug!("{API_URL_VAR} not set, using development default");
            "http://localhost:8080".to_string()
        });
        Self::new(api_url)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Set the initial page size of the product list.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_the_defaults() {
        let config = StoreConfig::new("http://example.test")
            .with_timeout(5)
            .with_page_size(25);

        assert_eq!(config.api_url, "http://example.test");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn page_size_stays_positive() {
        let config = StoreConfig::default().with_page_size(0);
        assert_eq!(config.page_size, 1);
    }
}
