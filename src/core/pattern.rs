//! Position pattern for the hidden word
//!
//! A pattern holds up to five slots. Each slot is either a pinned letter or the
//! wildcard `?`. Slots past the end of the pattern behave as wildcards, so
//! `"?o"` and `"?o???"` constrain the same positions.

use super::letter::letter_byte;
use super::{LetterSet, WORD_LENGTH, Word};
use std::fmt;

/// Marker for a slot with no letter evidence
pub const WILDCARD: char = '?';

/// Normalize raw pattern input
///
/// Case-folds, strips every character other than `a-z` and `?`, and keeps at
/// most five characters. Short input is not padded.
///
/// # Examples
/// ```
/// use wordle_helper::core::normalize_pattern;
///
/// assert_eq!(normalize_pattern("?O??Y"), "?o??y");
/// assert_eq!(normalize_pattern("m-o n.e!y"), "money");
/// assert_eq!(normalize_pattern("abcdefg"), "abcde");
/// ```
#[must_use]
pub fn normalize_pattern(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|&c| c.is_ascii_lowercase() || c == WILDCARD)
        .take(WORD_LENGTH)
        .collect()
}

/// A normalized pattern of 0-5 slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    slots: [Option<u8>; WORD_LENGTH],
    len: usize,
}

impl Pattern {
    /// Parse raw input into a pattern, normalizing it first
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut pattern = Self::default();
        for c in normalize_pattern(raw).chars() {
            pattern.slots[pattern.len] = letter_byte(c);
            pattern.len += 1;
        }
        pattern
    }

    /// Number of slots entered (0-5)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been entered
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The letter pinned at `position`, or `None` for a wildcard or missing slot
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// Every letter pinned somewhere in the pattern
    #[must_use]
    pub fn pinned(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn is_pinned(&self, letter: u8) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// Return a copy with one slot replaced
    ///
    /// `Some(letter)` pins the letter (case-folded; anything that is not a
    /// letter clears the slot instead). Gaps before `position` are padded with
    /// wildcards. Clearing a slot drops trailing wildcards, so clearing every
    /// pinned slot yields the empty pattern. Positions outside 0-4 leave the
    /// pattern unchanged.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Pattern;
    ///
    /// let pattern = Pattern::default().with_slot(1, Some('O'));
    /// assert_eq!(pattern.to_string(), "?o");
    ///
    /// let pattern = pattern.with_slot(4, Some('y'));
    /// assert_eq!(pattern.to_string(), "?o??y");
    ///
    /// let pattern = pattern.with_slot(4, None);
    /// assert_eq!(pattern.to_string(), "?o");
    /// ```
    #[must_use]
    pub fn with_slot(&self, position: usize, letter: Option<char>) -> Self {
        let mut next = *self;
        if position >= WORD_LENGTH {
            return next;
        }

        match letter.and_then(letter_byte) {
            Some(byte) => {
                next.slots[position] = Some(byte);
                next.len = next.len.max(position + 1);
            }
            None => {
                next.slots[position] = None;
                while next.len > 0 && next.slots[next.len - 1].is_none() {
                    next.len -= 1;
                }
            }
        }
        next
    }

    /// Check the positional part of a match: every pinned slot agrees with `word`
    #[inline]
    #[must_use]
    pub fn fits(&self, word: &Word) -> bool {
        self.slots
            .iter()
            .zip(word.chars())
            .all(|(slot, &c)| slot.is_none_or(|pinned| pinned == c))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots[..self.len] {
            let c = slot.map_or(WILDCARD, char::from);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
