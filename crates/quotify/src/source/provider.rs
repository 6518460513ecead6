//! Quote provider trait
//!
//! The seam between retrieval logic and any remote quote service, so the
//! fallback state machine can be exercised against fakes.

use crate::data::types::Quote;
use crate::error::FetchError;

/// A remote source of quotes
pub trait QuoteProvider {
    /// Machine-readable identifier (e.g., "dummyjson")
    fn name(&self) -> &'static str;

    /// Fetch one quote
    ///
    /// Errors carry the classification the fallback logic branches on:
    /// connectivity failures versus server-side ones.
    fn fetch(&self) -> Result<Quote, FetchError>;
}
