//! Data persistence
//!
//! Handles the quote record type, key/value storage, favorites, and the
//! session (last displayed quote).

pub mod favorites;
pub mod session;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::FavoritesStore;
pub use session::Session;
pub use storage::{FileStore, KeyValueStore};
pub use types::Quote;
