//! Puzzle input state shared by the front ends
//!
//! The board keeps the pattern and the hand-toggled letter states as two
//! separate inputs. It never writes pattern evidence into the toggles: the
//! effective state of a letter is resolved on every read. Pinning a letter
//! therefore overrides its toggle only while the pin lasts, and unpinning it
//! brings the toggle back.

use super::resolver::{Constraints, resolve_constraints};
use crate::core::{LetterState, LetterStates, Pattern, WORD_LENGTH, letter_byte};

/// Result of trying to change a letter's toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle changed to this state
    Changed(LetterState),
    /// The letter is pinned by the pattern; toggles are locked
    Pinned,
    /// Not a Latin letter
    Ignored,
}

/// Pattern plus hand-toggled letter states
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBoard {
    pattern: Pattern,
    toggles: LetterStates,
}

impl LetterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The hand-toggled states, before reconciliation with the pattern
    #[must_use]
    pub const fn toggles(&self) -> &LetterStates {
        &self.toggles
    }

    /// Replace the whole pattern from raw text
    pub fn set_pattern(&mut self, raw: &str) {
        self.pattern = Pattern::parse(raw);
    }

    /// Pin a letter at `position` (0-4)
    ///
    /// Returns `false` if the position or character is invalid.
    pub fn set_slot(&mut self, position: usize, letter: char) -> bool {
        if position >= WORD_LENGTH || letter_byte(letter).is_none() {
            return false;
        }
        self.pattern = self.pattern.with_slot(position, Some(letter));
        true
    }

    /// Revert `position` to a wildcard
    pub fn clear_slot(&mut self, position: usize) {
        self.pattern = self.pattern.with_slot(position, None);
    }

    /// Advance a letter through the Neutral → Excluded → Included cycle
    pub fn toggle(&mut self, letter: char) -> ToggleOutcome {
        self.update(letter, LetterState::next)
    }

    /// Set a letter's toggle directly
    pub fn set_state(&mut self, letter: char, state: LetterState) -> ToggleOutcome {
        self.update(letter, |_| state)
    }

    fn update(&mut self, letter: char, f: impl FnOnce(LetterState) -> LetterState) -> ToggleOutcome {
        let Some(byte) = letter_byte(letter) else {
            return ToggleOutcome::Ignored;
        };
        if self.pattern.is_pinned(byte) {
            return ToggleOutcome::Pinned;
        }
        let next = f(self.toggles.get(byte));
        self.toggles.set(byte, next);
        ToggleOutcome::Changed(next)
    }

    /// Effective constraints for the current pattern and toggles
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        resolve_constraints(&self.pattern, &self.toggles)
    }

    /// Effective state of a letter, with pattern pinning applied
    #[must_use]
    pub fn state(&self, letter: u8) -> LetterState {
        self.constraints().effective_state(letter)
    }

    #[must_use]
    pub fn is_pinned(&self, letter: u8) -> bool {
        self.pattern.is_pinned(letter)
    }

    /// True when neither a pattern nor any toggle has been entered
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pattern.is_empty() && self.toggles.is_empty()
    }

    /// Forget the pattern and every toggle
    pub fn clear(&mut self) {
        self.pattern = Pattern::default();
        self.toggles.clear();
    }
}
