//! Sharing helpers
//!
//! Clipboard and the actual posting are the host's business; the core only
//! composes the citation string and the share intent URL.

use crate::config::share::TWEET_INTENT_URL;
use crate::data::types::Quote;
use crate::error::{AppError, Result};

/// X/Twitter intent URL for sharing a quote
///
/// The citation is carried in the `text` query parameter, percent-encoded.
pub fn tweet_url(quote: &Quote) -> Result<String> {
    let url =
        reqwest::Url::parse_with_params(TWEET_INTENT_URL, &[("text", quote.citation().as_str())])
            .map_err(|e| AppError::Config(format!("Failed to build share URL: {e}")))?;
    Ok(url.into())
}
