//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration. The timeout is the total budget
//! for one request; reqwest aborts the attempt when it expires, so callers
//! never block past it.

use crate::config::network::{FETCH_TIMEOUT_MS, USER_AGENT};
use crate::error::{FetchError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a new client with default Quotify settings
    pub fn new() -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL and deserialize the JSON response
    ///
    /// Failures are classified for the fallback logic: timeouts and
    /// connection problems come back as connectivity errors, non-2xx
    /// statuses as [`FetchError::BadStatus`], and undecodable bodies as
    /// [`FetchError::BadPayload`].
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, FetchError> {
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }
        resp.json::<T>()
            .map_err(|e| FetchError::BadPayload(e.to_string()))
    }
}
