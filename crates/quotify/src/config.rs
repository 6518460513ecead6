//! Configuration constants for Quotify

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "quotify";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Quotify/", env!("CARGO_PKG_VERSION"));

    /// Total time budget for one remote fetch, in milliseconds.
    /// Covers connect, request, and body read; on expiry the attempt is
    /// aborted and the caller falls back to local quotes.
    pub const FETCH_TIMEOUT_MS: u64 = 1500;
}

/// Provider-related configuration
pub mod providers {
    /// DummyJSON random quote endpoint
    pub const DUMMYJSON_RANDOM_URL: &str = "https://dummyjson.com/quotes/random";
}

/// Storage keys
///
/// Keys are fixed constants; the favorites value format (a flat JSON array
/// of quote records) must stay stable across versions. A key change counts
/// as a format migration and needs explicit handling.
pub mod storage {
    /// Key under which the favorites array is persisted
    pub const FAVORITES_KEY: &str = "quotify-favorites";

    /// Key under which the last-displayed quote is persisted
    pub const SESSION_KEY: &str = "quotify-session";

    /// Throwaway key used by the storage self-test
    pub const PROBE_KEY: &str = "quotify-probe";
}

/// Sharing configuration
pub mod share {
    /// Base URL for the X/Twitter share intent
    pub const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";
}
