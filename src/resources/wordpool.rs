//! Word pool resource.
//!
//! The fixed list of secret words a round can draw from. The built-in pool
//! can be replaced from `config.ini` (`[game] words = ...`); entries that are
//! not plain ASCII letters are dropped with a warning.

use bevy_ecs::prelude::Resource;
use log::warn;

/// Built-in secret words.
pub const DEFAULT_WORDS: [&str; 9] = [
    "EGER",
    "BUDAPEST",
    "SZEGED",
    "KECSKEMET",
    "SOPRON",
    "BALATON",
    "TISZA",
    "DUNA",
    "BAKONY",
];

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordPool {
    /// Build a pool from arbitrary entries. Entries are trimmed and
    /// uppercased; invalid ones are skipped. Falls back to the built-in pool
    /// if nothing valid remains.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        for entry in entries {
            let word = entry.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                warn!("Ignoring word pool entry '{}': only letters A-Z are allowed", word);
                continue;
            }
            words.push(word);
        }
        if words.is_empty() {
            warn!("Word pool is empty, using the built-in words");
            return Self::default();
        }
        Self { words }
    }

    /// Parse a comma separated list, as found in the config file.
    pub fn from_csv(csv: &str) -> Self {
        Self::from_entries(csv.split(','))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw a word uniformly at random.
    pub fn pick(&self, rng: &mut fastrand::Rng) -> &str {
        // never empty: both constructors guarantee at least one word
        &self.words[rng.usize(..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_entries_are_normalized() {
        let pool = WordPool::from_csv(" eger, Duna ,,tisza");
        assert_eq!(pool.words(), &["EGER", "DUNA", "TISZA"]);
    }

    #[test]
    fn invalid_entries_fall_back_to_defaults() {
        let pool = WordPool::from_csv("n0pe, two words,");
        assert_eq!(pool, WordPool::default());
    }

    #[test]
    fn pick_is_always_from_pool() {
        let pool = WordPool::default();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..100 {
            assert!(pool.contains(pool.pick(&mut rng)));
        }
    }
}
