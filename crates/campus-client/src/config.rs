//! Client configuration.

use std::time::Duration;

/// Default backend URL for local development.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Request timeout applied to every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Outbound request configuration for [`crate::http::HttpClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the campus backend, without a trailing slash.
    pub base_url: String,
    /// Timeout for each request; elapsed timeouts surface as network errors.
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the base URL from `CAMPUS_SERVER_URL`, falling back to the
    /// development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CAMPUS_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
