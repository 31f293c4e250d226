//! Letter states and letter sets
//!
//! A [`LetterSet`] packs the 26 lowercase Latin letters into a `u32` bitmask so
//! membership, union and subset checks are single bitwise operations.
//! [`LetterStates`] is the caller-owned map of letters to their toggled
//! [`LetterState`].

use rustc_hash::FxHashMap;
use std::fmt;

/// Evidence about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// No evidence
    #[default]
    Neutral,
    /// Confirmed absent from the word
    Excluded,
    /// Confirmed present, position unknown
    Included,
}

impl LetterState {
    /// Next state in the keyboard tap cycle: Neutral → Excluded → Included → Neutral
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Neutral => Self::Excluded,
            Self::Excluded => Self::Included,
            Self::Included => Self::Neutral,
        }
    }

    /// Short label used in terminal output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Excluded => "excluded",
            Self::Included => "included",
        }
    }
}

/// Normalize a character to a lowercase letter byte, if it is one
#[inline]
#[must_use]
pub fn letter_byte(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    lower.is_ascii_lowercase().then_some(lower as u8)
}

/// A set of lowercase Latin letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Build a set from free-form text
    ///
    /// Letters are case-folded; every other character is ignored and
    /// repeats collapse.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::LetterSet;
    ///
    /// let set = LetterSet::from_letters("D-i-U, ston!");
    /// assert_eq!(set.to_string(), "dinostu");
    /// ```
    #[must_use]
    pub fn from_letters(text: &str) -> Self {
        text.chars().filter_map(letter_byte).collect()
    }

    /// Insert a letter. Non-letters are ignored.
    ///
    /// Returns `true` if the letter was newly added.
    pub fn insert(&mut self, letter: u8) -> bool {
        if !letter.is_ascii_lowercase() {
            return false;
        }
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

/// Letters toggled by hand, independent of the pattern
///
/// A letter without an entry is [`LetterState::Neutral`]; setting a letter back
/// to neutral removes its entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStates(FxHashMap<u8, LetterState>);

impl LetterStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build states from explicit excluded and included sets
    ///
    /// A letter present in both sets ends up included.
    #[must_use]
    pub fn from_sets(excluded: LetterSet, included: LetterSet) -> Self {
        let mut states = Self::new();
        for letter in excluded.iter() {
            states.set(letter, LetterState::Excluded);
        }
        for letter in included.iter() {
            states.set(letter, LetterState::Included);
        }
        states
    }

    #[must_use]
    pub fn get(&self, letter: u8) -> LetterState {
        self.0.get(&letter).copied().unwrap_or_default()
    }

    /// Set a letter's state. Non-letters are ignored.
    pub fn set(&mut self, letter: u8, state: LetterState) {
        if !letter.is_ascii_lowercase() {
            return;
        }
        if state == LetterState::Neutral {
            self.0.remove(&letter);
        } else {
            self.0.insert(letter, state);
        }
    }

    /// All letters currently in `state`
    ///
    /// Asking for [`LetterState::Neutral`] returns the letters with no entry.
    #[must_use]
    pub fn with_state(&self, state: LetterState) -> LetterSet {
        (b'a'..=b'z')
            .filter(|&letter| self.get(letter) == state)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
