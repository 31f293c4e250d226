//! Word list integrity check
//!
//! Validates a word list file with the same rules used to load a dictionary.

use crate::dictionary::Dictionary;
use crate::dictionary::loader::count_entries;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of checking a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    /// Non-blank lines in the file
    pub entries: usize,
    /// Distinct words after case-folding
    pub unique: usize,
}

impl CheckReport {
    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.entries - self.unique
    }
}

/// Check that every line of a word list is a five-letter word
///
/// # Errors
///
/// Returns an error if the file cannot be read or any entry is malformed.
pub fn check_wordlist<P: AsRef<Path>>(path: P) -> Result<CheckReport> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let dictionary = Dictionary::from_text(&text)
        .with_context(|| format!("Word list {} failed integrity check", path.display()))?;

    Ok(CheckReport {
        path: path.to_path_buf(),
        entries: count_entries(&text),
        unique: dictionary.len(),
    })
}
