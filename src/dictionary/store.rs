//! The dictionary store
//!
//! An immutable, sorted, duplicate-free set of five-letter words. Loading is
//! the only place integrity is checked; once built the store never changes.

use super::DICTIONARY;
use crate::core::{Word, WordError};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised when a word list fails its integrity check
#[derive(Debug)]
pub enum DictionaryError {
    /// An entry is not five ASCII letters
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntry {
                line,
                entry,
                source,
            } => write!(f, "Invalid dictionary entry {entry:?} on line {line}: {source}"),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEntry { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Immutable set of valid five-letter words, sorted alphabetically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Load the dictionary embedded at build time
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidEntry` if the embedded asset contains a
    /// malformed entry. The binary treats this as fatal.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::load().unwrap();
    /// assert!(dictionary.contains("money"));
    /// ```
    pub fn load() -> Result<Self, DictionaryError> {
        let dictionary = Self::from_entries(DICTIONARY.iter().copied())?;
        log::info!("Loaded embedded dictionary: {} words", dictionary.len());
        Ok(dictionary)
    }

    /// Build a dictionary from raw entries, one word per entry
    ///
    /// Entries are trimmed and case-folded. Blank entries are skipped and
    /// duplicates are dropped. Errors report the 1-based position of the entry.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidEntry` for the first entry that is not
    /// exactly five ASCII letters.
    pub fn from_entries<'s, I>(entries: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut words = Vec::new();
        for (index, raw) in entries.into_iter().enumerate() {
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }
            let word = Word::new(entry).map_err(|source| DictionaryError::InvalidEntry {
                line: index + 1,
                entry: entry.to_string(),
                source,
            })?;
            words.push(word);
        }

        let entries = words.len();
        words.sort_unstable();
        words.dedup();
        if words.len() < entries {
            log::info!("Dropped {} duplicate entries", entries - words.len());
        }

        Ok(Self { words })
    }

    /// Build a dictionary from newline-delimited text
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::from_entries`], with line numbers counted in the text.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        Self::from_entries(text.lines())
    }

    /// A dictionary with no words; every query against it is empty
    #[must_use]
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Words in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership (case-insensitive)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let needle = text.to_ascii_lowercase();
        self.words
            .binary_search_by(|word| word.text().cmp(&needle))
            .is_ok()
    }
}
