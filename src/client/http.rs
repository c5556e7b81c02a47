//! HTTP client construction for row-store requests.

use reqwest::Client;
use std::time::Duration;

use crate::domain::PlotError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept per host
const POOL_MAX_IDLE_PER_HOST: usize = 2;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout, `None` for no transport timeout
    pub timeout: Option<Duration>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl HttpConfig {
    /// Config from a timeout in seconds, where `0` disables the timeout
    #[must_use]
    pub fn from_timeout_secs(secs: u64) -> Self {
        Self {
            timeout: (secs > 0).then(|| Duration::from_secs(secs)),
        }
    }

    /// Build the pooled reqwest client for this configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlotError::ClientInit` if the TLS backend cannot be set up.
    pub fn build_client(&self) -> Result<Client, PlotError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent(concat!("plotview/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| PlotError::client_init(e.to_string()))
    }
}
