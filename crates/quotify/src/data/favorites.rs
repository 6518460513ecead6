//! Favorites persistence
//!
//! A deduplicated-by-text, insertion-ordered list of favorited quotes,
//! persisted as a flat JSON array under a fixed key. Nothing here is fatal:
//! read corruption resets the key and yields an empty list, write failure
//! comes back as `false` so the caller can show a transient warning without
//! losing the in-memory list.
//!
//! The list operations (`add`, `remove`, `is_favorite`) are pure functions
//! over the caller's list; the store does not own a mutable singleton.

use crate::config::storage::{FAVORITES_KEY, PROBE_KEY};
use crate::data::storage::KeyValueStore;
use crate::data::types::Quote;

/// Durable favorites collection backed by a [`KeyValueStore`]
pub struct FavoritesStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Wrap a storage backend
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the favorites list
    ///
    /// Missing key yields an empty list. Malformed content (non-JSON, not
    /// an array, wrong-shaped records) clears the corrupted key and yields
    /// an empty list. Never returns an error.
    pub fn load(&self) -> Vec<Quote> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "stored favorites are corrupt, resetting");
                if let Err(e) = self.store.delete(FAVORITES_KEY) {
                    tracing::warn!(error = %e, "failed to clear corrupt favorites key");
                }
                Vec::new()
            }
        }
    }

    /// Persist the favorites list
    ///
    /// Returns `false` on any storage failure.
    pub fn save(&self, list: &[Quote]) -> bool {
        let raw = match serde_json::to_string(list) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize favorites");
                return false;
            }
        };

        match self.store.set(FAVORITES_KEY, &raw) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to save favorites");
                false
            }
        }
    }

    /// Probe the storage backend with a throwaway key
    ///
    /// Writes a value, reads it back, deletes it, and confirms round-trip
    /// equality. Run once at startup to surface a non-functional backend as
    /// a warning instead of silently losing favorites later.
    pub fn self_test(&self) -> bool {
        let probe = "probe";
        if self.store.set(PROBE_KEY, probe).is_err() {
            return false;
        }
        let ok = matches!(self.store.get(PROBE_KEY), Ok(Some(ref v)) if v.as_str() == probe);
        if self.store.delete(PROBE_KEY).is_err() {
            return false;
        }
        ok
    }
}

/// List with `quote` appended (favorite flag forced on), unless an entry
/// with the same text already exists, in which case the list is returned
/// unchanged. Dedup identity is the quote text only; identical text from
/// different authors counts as the same quote.
pub fn add(list: &[Quote], quote: &Quote) -> Vec<Quote> {
    let mut out = list.to_vec();
    if !is_favorite(list, &quote.text) {
        out.push(quote.clone().favorited());
    }
    out
}

/// List with every entry matching `text` removed; no-op when absent
pub fn remove(list: &[Quote], text: &str) -> Vec<Quote> {
    list.iter().filter(|q| q.text != text).cloned().collect()
}

/// Whether any entry in the list has this text
pub fn is_favorite(list: &[Quote], text: &str) -> bool {
    list.iter().any(|q| q.text == text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::FileStore;
    use crate::error::{AppError, Result};
    use tempfile::{tempdir, TempDir};

    fn temp_store() -> (TempDir, FavoritesStore<FileStore>) {
        let dir = tempdir().unwrap();
        let store = FavoritesStore::new(FileStore::at(dir.path()));
        (dir, store)
    }

    /// A backend where every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Storage("backend unavailable".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage("backend unavailable".into()))
        }

        fn delete(&self, _key: &str) -> Result<()> {
            Err(AppError::Storage("backend unavailable".into()))
        }
    }

    // --- Pure list operations ---

    #[test]
    fn test_add_forces_favorite_flag() {
        let list = add(&[], &Quote::new("A", "B"));
        assert_eq!(list.len(), 1);
        assert!(list[0].is_favorite);
    }

    #[test]
    fn test_add_is_idempotent_by_text() {
        let list = add(&[], &Quote::new("A", "B"));
        let list = add(&list, &Quote::new("A", "B"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_dedupes_across_authors() {
        // Same text, different author: treated as the same quote
        let list = add(&[], &Quote::new("A", "First"));
        let list = add(&list, &Quote::new("A", "Second"));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].author, "First");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut list = Vec::new();
        for text in ["one", "two", "three"] {
            list = add(&list, &Quote::new(text, "X"));
        }
        let texts: Vec<_> = list.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_remove_absent_text_is_noop() {
        let list = add(&[], &Quote::new("A", "B"));
        let after = remove(&list, "nonexistent");
        assert_eq!(after, list);
    }

    #[test]
    fn test_remove_drops_matching_entries() {
        let list = add(&[], &Quote::new("keep", "X"));
        let list = add(&list, &Quote::new("drop", "Y"));
        let after = remove(&list, "drop");
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "keep");
    }

    #[test]
    fn test_is_favorite() {
        let list = add(&[], &Quote::new("A", "B"));
        assert!(is_favorite(&list, "A"));
        assert!(!is_favorite(&list, "C"));
    }

    // --- Persistence ---

    #[test]
    fn test_fresh_store_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_load_scenario() {
        let (_dir, store) = temp_store();

        assert!(store.load().is_empty());
        let list = vec![Quote::new("A", "B").favorited()];
        assert!(store.save(&list));
        assert_eq!(store.load(), list);
    }

    #[test]
    fn test_add_then_load_roundtrip_has_exactly_one_entry() {
        let (_dir, store) = temp_store();

        let quote = Quote::new("The obstacle is the way.", "Marcus Aurelius");
        let list = add(&store.load(), &quote);
        assert!(store.save(&list));

        let loaded = store.load();
        let matching: Vec<_> = loaded.iter().filter(|q| q.text == quote.text).collect();
        assert_eq!(matching.len(), 1);
    }

    #[test]
    fn test_wire_format_is_flat_array() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        let store = FavoritesStore::new(&file_store);

        store.save(&[Quote::new("A", "B").favorited()]);

        let raw = file_store.get(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"text":"A","author":"B","isFavorite":true}]"#
        );
    }

    #[test]
    fn test_load_corrupt_non_json_resets() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        file_store.set(FAVORITES_KEY, "not valid json").unwrap();

        let store = FavoritesStore::new(&file_store);
        assert!(store.load().is_empty());
        // Corrupted key was cleared
        assert_eq!(file_store.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_non_array_resets() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        file_store
            .set(FAVORITES_KEY, r#"{"text":"A","author":"B"}"#)
            .unwrap();

        let store = FavoritesStore::new(&file_store);
        assert!(store.load().is_empty());
        assert_eq!(file_store.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_corrupt_wrong_shape_resets() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        file_store
            .set(FAVORITES_KEY, r#"[{"title":"not a quote"}]"#)
            .unwrap();

        let store = FavoritesStore::new(&file_store);
        assert!(store.load().is_empty());
        assert_eq!(file_store.get(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_load_after_reset_stays_empty() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        file_store.set(FAVORITES_KEY, "garbage").unwrap();

        let store = FavoritesStore::new(&file_store);
        assert!(store.load().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_reports_failure_without_raising() {
        let store = FavoritesStore::new(BrokenStore);
        assert!(!store.save(&[Quote::new("A", "B")]));
    }

    #[test]
    fn test_load_on_broken_backend_is_empty() {
        let store = FavoritesStore::new(BrokenStore);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_self_test_roundtrip() {
        let (_dir, store) = temp_store();
        assert!(store.self_test());
    }

    #[test]
    fn test_self_test_cleans_up_probe_key() {
        let dir = tempdir().unwrap();
        let file_store = FileStore::at(dir.path());
        let store = FavoritesStore::new(&file_store);

        assert!(store.self_test());
        assert_eq!(file_store.get(PROBE_KEY).unwrap(), None);
    }

    #[test]
    fn test_self_test_detects_broken_backend() {
        let store = FavoritesStore::new(BrokenStore);
        assert!(!store.self_test());
    }

    #[test]
    fn test_self_test_does_not_touch_favorites() {
        let (_dir, store) = temp_store();

        let list = add(&[], &Quote::new("A", "B"));
        assert!(store.save(&list));
        assert!(store.self_test());
        assert_eq!(store.load(), list);
    }
}
