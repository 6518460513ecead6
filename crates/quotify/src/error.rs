//! Error types for Quotify
//!
//! Centralized error handling using thiserror.
//!
//! Remote-retrieval failures get their own [`FetchError`] taxonomy because
//! the fallback logic branches on *why* a fetch failed: connectivity
//! problems (timeout, network) flip the offline flag, server-side problems
//! (bad status, bad payload) do not.

use thiserror::Error;

/// Why a remote quote fetch failed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("server returned HTTP {0}")]
    BadStatus(u16),

    #[error("malformed quote payload: {0}")]
    BadPayload(String),
}

impl FetchError {
    /// Whether this failure indicates a connectivity problem (as opposed to
    /// a server-side one). Only connectivity failures set the offline flag.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::Timeout | FetchError::Network(_))
    }
}

// Status classification is not handled here: `HttpClient::get_json` checks
// the response status itself and produces `BadStatus` directly, so reqwest
// errors reaching this conversion are transport-level ones.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return FetchError::Timeout;
        }
        if e.is_decode() {
            return FetchError::BadPayload(e.to_string());
        }
        FetchError::Network(friendly_network_error(&e))
    }
}

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("invalid URL: {url}");
        }
        return "invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "could not connect to server".to_string();
    }
    e.to_string()
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Fetch(e.into())
    }
}

/// Result type alias for Quotify
pub type Result<T> = std::result::Result<T, AppError>;
