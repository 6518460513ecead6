//! Common data types for persistence

use serde::{Deserialize, Serialize};

/// A quote with its attribution and favorite flag
///
/// Identity for favoriting purposes is the `text` value: two quotes with
/// identical text are treated as the same quote, even from different
/// authors. This mirrors the established favorites format and is a
/// documented simplification, not an accident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// Quote body
    pub text: String,
    /// Attributed author
    pub author: String,
    /// Whether the quote is currently favorited
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
}

impl Quote {
    /// Create a new, unfavorited quote
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            is_favorite: false,
        }
    }

    /// This quote with the favorite flag set
    pub fn favorited(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Formatted citation string: `"<text>" - <author>`
    pub fn citation(&self) -> String {
        format!("\"{}\" - {}", self.text, self.author)
    }
}
