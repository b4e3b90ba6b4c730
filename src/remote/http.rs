//! HTTP archive fetching.
//!
//! Provides a blocking HTTP client that downloads the template archive
//! into memory.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{JoeError, Result};

/// Fetches archives over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("joe/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the full response body at `url`.
    ///
    /// Transport failures and non-success statuses are both reported as
    /// [`JoeError::Network`].
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let network_error = |message: String| JoeError::Network {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(network_error(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .map_err(|e| network_error(e.to_string()))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
