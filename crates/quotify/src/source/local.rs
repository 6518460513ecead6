//! Embedded local quotes
//!
//! The fixed fallback collection and its uniform-random picker. The picker
//! owns its RNG and can be seeded for deterministic tests.

use crate::data::types::Quote;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Curated fallback quotes as (text, author) pairs
pub const LOCAL_QUOTES: &[(&str, &str)] = &[
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "In the end, we will remember not the words of our enemies, but the silence of our friends.",
        "Martin Luther King Jr.",
    ),
    (
        "Success is not final, failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The greatest glory in living lies not in never falling, but in rising every time we fall.",
        "Nelson Mandela",
    ),
    (
        "The way to get started is to quit talking and begin doing.",
        "Walt Disney",
    ),
    (
        "If life were predictable it would cease to be life, and be without flavor.",
        "Eleanor Roosevelt",
    ),
    (
        "Spread love everywhere you go. Let no one ever come to you without leaving happier.",
        "Mother Teresa",
    ),
    (
        "When you reach the end of your rope, tie a knot in it and hang on.",
        "Franklin D. Roosevelt",
    ),
];

/// Uniform-random picker over [`LOCAL_QUOTES`]
pub struct LocalQuotes {
    rng: StdRng,
}

impl LocalQuotes {
    /// Picker seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Picker with a fixed seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick one quote uniformly at random
    ///
    /// The favorite flag is always false; callers re-derive it against the
    /// favorites list.
    pub fn pick(&mut self) -> Quote {
        let (text, author) = LOCAL_QUOTES[self.rng.random_range(0..LOCAL_QUOTES.len())];
        Quote::new(text, author)
    }
}

impl Default for LocalQuotes {
    fn default() -> Self {
        Self::new()
    }
}
