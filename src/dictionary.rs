//! Word list index
//!
//! Words are bucketed by their first letter; a membership check looks the
//! word up in the bucket for its first letter only. The crate ships a
//! compact default list embedded at build time, but any caller-supplied
//! list of lowercase words works through [`DictionaryIndex::from_words`].

use crate::board::BOARD_SIZE;
use crate::tiles::{letter_index, ALPHABET_SIZE};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Embedded default word list (lowercase, one word per line)
static WORDS_DATA: &str = include_str!("../data/words.txt");

static EMBEDDED: Lazy<DictionaryIndex> =
    Lazy::new(|| DictionaryIndex::from_words(WORDS_DATA.lines()));

/// Longest word that fits on the board
pub const MAX_WORD_LEN: usize = BOARD_SIZE;

/// Letter-bucketed membership index over a fixed word list
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: Vec<HashSet<String>>,
}

impl DictionaryIndex {
    /// Build the index from a word list. Entries that are empty, longer
    /// than [`MAX_WORD_LEN`] or not entirely lowercase ascii letters are
    /// dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets = vec![HashSet::new(); ALPHABET_SIZE];
        for word in words {
            let word = word.as_ref();
            if word.is_empty() || word.len() > MAX_WORD_LEN {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_lowercase()) {
                continue;
            }
            let first = word.chars().next().unwrap_or('a');
            buckets[letter_index(first)].insert(word.to_string());
        }
        Self { buckets }
    }

    /// The index over the embedded default word list
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// True iff the word appears verbatim in the source list
    pub fn contains(&self, word: &str) -> bool {
        match word.chars().next() {
            Some(first) if first.is_ascii_lowercase() => {
                self.buckets[letter_index(first)].contains(word)
            }
            _ => false,
        }
    }

    /// Number of indexed words
    pub fn len(&self) -> usize {
        self.buckets.iter().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(HashSet::is_empty)
    }
}
