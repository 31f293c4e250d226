//! Constraint resolution
//!
//! Merges the pattern with the hand-toggled letter states into one consistent
//! pair of excluded/included sets. Pattern pinning wins over any toggle for the
//! letters it pins, so resolution is total: it never fails and the two sets it
//! returns never overlap.

use crate::core::{LetterSet, LetterState, LetterStates, Pattern};

/// Effective letter constraints after reconciling with the pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    /// Letters that must not appear anywhere
    pub excluded: LetterSet,
    /// Letters that must appear at least once
    pub included: LetterSet,
}

impl Constraints {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.included.is_empty()
    }

    /// Effective state of a single letter
    #[must_use]
    pub const fn effective_state(&self, letter: u8) -> LetterState {
        if self.included.contains(letter) {
            LetterState::Included
        } else if self.excluded.contains(letter) {
            LetterState::Excluded
        } else {
            LetterState::Neutral
        }
    }
}

/// Resolve the effective constraints for a pattern and toggled states
///
/// - `excluded` = letters toggled excluded that the pattern does not pin
/// - `included` = letters toggled included, plus every pinned letter
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterState, LetterStates, Pattern};
/// use wordle_helper::filter::resolve_constraints;
///
/// let mut states = LetterStates::new();
/// states.set(b'o', LetterState::Excluded);
/// states.set(b'a', LetterState::Included);
///
/// let constraints = resolve_constraints(&Pattern::parse("?o??y"), &states);
/// assert_eq!(constraints.included.to_string(), "aoy");
/// assert!(constraints.excluded.is_empty());
/// ```
#[must_use]
pub fn resolve_constraints(pattern: &Pattern, states: &LetterStates) -> Constraints {
    let pinned = pattern.pinned();

    Constraints {
        excluded: states.with_state(LetterState::Excluded).difference(pinned),
        included: states.with_state(LetterState::Included).union(pinned),
    }
}
