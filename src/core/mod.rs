//! Core domain types for the helper
//!
//! Words, position patterns and letter constraints. Everything here is pure
//! data with no I/O.

mod letter;
mod pattern;
mod word;

pub use letter::{LetterSet, LetterState, LetterStates, letter_byte};
pub use pattern::{Pattern, WILDCARD, normalize_pattern};
pub use word::{WORD_LENGTH, Word, WordError};
