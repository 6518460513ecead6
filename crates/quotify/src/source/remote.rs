//! DummyJSON quote provider
//!
//! Implementation of [`QuoteProvider`] for the DummyJSON API
//! (<https://dummyjson.com/>).

use crate::config::providers::DUMMYJSON_RANDOM_URL;
use crate::data::types::Quote;
use crate::error::{FetchError, Result};
use crate::net::HttpClient;

use super::provider::QuoteProvider;

use serde::Deserialize;

/// Wire shape of `GET /quotes/random`; extra fields (id, tags, ...) ignored
#[derive(Debug, Deserialize)]
struct ApiQuote {
    quote: String,
    author: String,
}

impl TryFrom<ApiQuote> for Quote {
    type Error = FetchError;

    fn try_from(api: ApiQuote) -> std::result::Result<Self, Self::Error> {
        if api.quote.trim().is_empty() {
            return Err(FetchError::BadPayload("empty quote field".into()));
        }
        if api.author.trim().is_empty() {
            return Err(FetchError::BadPayload("empty author field".into()));
        }
        Ok(Quote::new(api.quote, api.author))
    }
}

/// Quote provider backed by the DummyJSON API
pub struct DummyJsonProvider {
    client: HttpClient,
    url: String,
}

impl DummyJsonProvider {
    /// Provider against the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(DUMMYJSON_RANDOM_URL)
    }

    /// Provider against a custom endpoint (tests, mirrors)
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            url: url.into(),
        })
    }
}

impl QuoteProvider for DummyJsonProvider {
    fn name(&self) -> &'static str {
        "dummyjson"
    }

    fn fetch(&self) -> std::result::Result<Quote, FetchError> {
        let api: ApiQuote = self.client.get_json(&self.url)?;
        api.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_conversion() {
        let api: ApiQuote =
            serde_json::from_str(r#"{"quote":"Q1","author":"Au1"}"#).unwrap();
        let quote = Quote::try_from(api).unwrap();
        assert_eq!(quote, Quote::new("Q1", "Au1"));
        assert!(!quote.is_favorite);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let raw = r#"{"id":42,"quote":"Q","author":"A","tags":["x"],"length":1}"#;
        let api: ApiQuote = serde_json::from_str(raw).unwrap();
        assert_eq!(api.quote, "Q");
        assert_eq!(api.author, "A");
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let result: std::result::Result<ApiQuote, _> =
            serde_json::from_str(r#"{"content":"wrong shape"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_fields_rejected() {
        let api: ApiQuote = serde_json::from_str(r#"{"quote":"  ","author":"A"}"#).unwrap();
        let err = Quote::try_from(api).unwrap_err();
        assert!(matches!(err, FetchError::BadPayload(_)));
        assert!(!err.is_connectivity());
    }

    #[test]
    fn test_fetch_unreachable_host_is_connectivity() {
        let provider = DummyJsonProvider::with_url("http://invalid.invalid.invalid").unwrap();
        let err = provider.fetch().unwrap_err();
        assert!(err.is_connectivity(), "unexpected classification: {err}");
    }
}
