//! Client configuration

use crate::{ClientResult, HttpClient};

/// Environment variable overriding the service base URL
pub const SERVICE_URL_ENV: &str = "FAUSSE_SERVICE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration for connecting to the reservation service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g. "http://localhost:5000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the base URL from `FAUSSE_SERVICE_URL`, falling back to the
    /// default local service address.
    pub fn from_env() -> Self {
        match std::env::var(SERVICE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_client(&self) -> ClientResult<HttpClient> {
        HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
