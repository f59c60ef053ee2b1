//! Shared HTTP client configuration.
//!
//! Both upstream clients (the Suwayomi GraphQL endpoint and the takedown
//! sheet export) build their reqwest client through this module.

use std::time::Duration;

use reqwest::Client;

use crate::{Result, StrikedownError};

/// HTTP client configuration for upstream fetches.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (compatible; Strikedown/0.1)".to_string(),
        }
    }
}

/// Builds a reqwest client honoring the configured timeout and user agent.
pub(crate) fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(StrikedownError::HttpError)
}

/// Maps a reqwest error to [`StrikedownError`], distinguishing timeouts.
pub(crate) fn map_request_error(err: reqwest::Error, config: &FetchConfig) -> StrikedownError {
    if err.is_timeout() {
        StrikedownError::Timeout { timeout: config.timeout }
    } else {
        StrikedownError::HttpError(err)
    }
}
