//! Word list loading utilities
//!
//! Loads caller-provided word lists with the same integrity rules as the
//! embedded dictionary.

use super::{Dictionary, DictionaryError};
use std::fs;
use std::path::Path;

/// Load a dictionary from a newline-delimited file
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, or
/// `DictionaryError::InvalidEntry` if any line is not a five-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_helper::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = Dictionary::from_text(&content)?;
    log::info!(
        "Loaded word list {}: {} words",
        path.display(),
        dictionary.len()
    );
    Ok(dictionary)
}

/// Count the non-blank entries of a word list
#[must_use]
pub fn count_entries(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
