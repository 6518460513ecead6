//! Quote retrieval with offline/local fallback
//!
//! [`QuoteSource`] produces one [`Retrieval`] per call and never fails:
//! every remote problem resolves to a local quote plus a human-readable
//! notice. The offline flag lives here (not in process-global state) and is
//! mutated only by fetch outcomes and [`QuoteSource::set_offline_mode`].

pub mod local;
pub mod provider;
pub mod remote;

pub use local::{LocalQuotes, LOCAL_QUOTES};
pub use provider::QuoteProvider;
pub use remote::DummyJsonProvider;

use crate::data::types::Quote;
use crate::error::FetchError;

/// Notice shown when the offline flag short-circuits the fetch
pub const MSG_OFFLINE: &str = "You are offline. Using local quotes.";
/// Notice shown when the remote fetch timed out
pub const MSG_TIMEOUT: &str = "Request timed out. Using local quotes.";
/// Notice shown on a network-level failure
pub const MSG_NETWORK: &str = "Network error. Using local quotes.";

/// Where a retrieved quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The network-backed provider
    Remote,
    /// The embedded fallback list
    Local,
}

/// Outcome of one retrieval; constructed fresh per call
#[derive(Debug, Clone)]
pub struct Retrieval {
    /// The retrieved quote, favorite flag always false (callers re-derive
    /// it against the favorites list)
    pub quote: Quote,
    /// Where the quote came from
    pub source: Source,
    /// Human-readable notice when the remote source was not used
    pub error: Option<String>,
}

/// Quote retrieval with fallback to the embedded list
pub struct QuoteSource<P> {
    provider: P,
    local: LocalQuotes,
    offline: bool,
}

impl<P: QuoteProvider> QuoteSource<P> {
    /// Source with an entropy-seeded local picker
    pub fn new(provider: P) -> Self {
        Self::with_local(provider, LocalQuotes::new())
    }

    /// Source with a caller-supplied local picker (seeded in tests)
    pub fn with_local(provider: P, local: LocalQuotes) -> Self {
        Self {
            provider,
            local,
            offline: false,
        }
    }

    /// Produce one quote; never fails
    ///
    /// With the offline flag set, the provider is not consulted at all.
    /// Otherwise connectivity failures (timeout, network) set the flag and
    /// fall back; server-side failures (bad status, bad payload) fall back
    /// without touching it. A successful remote fetch clears the flag.
    pub fn get_quote(&mut self) -> Retrieval {
        if self.offline {
            return Retrieval {
                quote: self.local.pick(),
                source: Source::Local,
                error: Some(MSG_OFFLINE.to_string()),
            };
        }

        match self.provider.fetch() {
            Ok(quote) => {
                self.offline = false;
                tracing::debug!(provider = self.provider.name(), "remote fetch succeeded");
                Retrieval {
                    quote,
                    source: Source::Remote,
                    error: None,
                }
            }
            Err(e) => {
                if e.is_connectivity() {
                    self.offline = true;
                }
                tracing::warn!(
                    provider = self.provider.name(),
                    error = %e,
                    "remote fetch failed, falling back to local quotes"
                );
                let notice = match e {
                    FetchError::Timeout => MSG_TIMEOUT.to_string(),
                    FetchError::Network(_) => MSG_NETWORK.to_string(),
                    FetchError::BadStatus(code) => {
                        format!("Quote service returned HTTP {code}. Using local quotes.")
                    }
                    FetchError::BadPayload(_) => {
                        "Quote service sent a malformed response. Using local quotes.".to_string()
                    }
                };
                Retrieval {
                    quote: self.local.pick(),
                    source: Source::Local,
                    error: Some(notice),
                }
            }
        }
    }

    /// Pick a local quote directly, without consulting the provider
    pub fn pick_local_quote(&mut self) -> Quote {
        self.local.pick()
    }

    /// Explicit connectivity override
    ///
    /// Takes precedence over probe-derived state until the next fetch
    /// outcome or the next explicit call.
    pub fn set_offline_mode(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Current offline flag
    pub fn is_offline(&self) -> bool {
        self.offline
    }
}
