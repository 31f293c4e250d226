//! Query front door
//!
//! Binds a dictionary and a result cap so callers can go straight from their
//! input snapshot (pattern + toggled states) to a match result.

use super::board::LetterBoard;
use super::matcher::{DEFAULT_CAP, MatchResult, match_words};
use super::resolver::resolve_constraints;
use crate::core::{LetterStates, Pattern};
use crate::dictionary::Dictionary;

/// Resolves constraints and runs the matcher against one dictionary
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    dictionary: &'a Dictionary,
    cap: usize,
}

impl<'a> Engine<'a> {
    /// Create an engine over `dictionary` returning at most `cap` words per query
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, cap: usize) -> Self {
        Self { dictionary, cap }
    }

    /// Create an engine with [`DEFAULT_CAP`]
    #[must_use]
    pub const fn with_default_cap(dictionary: &'a Dictionary) -> Self {
        Self::new(dictionary, DEFAULT_CAP)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Resolve the toggles against the pattern, then match
    #[must_use]
    pub fn query(&self, pattern: &Pattern, states: &LetterStates) -> MatchResult<'a> {
        let constraints = resolve_constraints(pattern, states);
        match_words(
            pattern,
            constraints.excluded,
            constraints.included,
            self.dictionary,
            self.cap,
        )
    }

    /// Query with the board's current pattern and toggles
    #[must_use]
    pub fn query_board(&self, board: &LetterBoard) -> MatchResult<'a> {
        self.query(board.pattern(), board.toggles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterSet, LetterState};

    fn dictionary() -> Dictionary {
        Dictionary::from_text("robot\nabout\nmoney\ntower\nhouse\nhoney").unwrap()
    }

    #[test]
    fn query_applies_pinning_over_exclusion() {
        let dictionary = dictionary();
        let engine = Engine::with_default_cap(&dictionary);

        let states = LetterStates::from_sets(LetterSet::from_letters("o"), LetterSet::EMPTY);
        let result = engine.query(&Pattern::parse("?o"), &states);

        assert_eq!(
            result.texts().collect::<Vec<_>>(),
            ["honey", "house", "money", "robot", "tower"]
        );
    }

    #[test]
    fn query_board_tracks_edits() {
        let dictionary = dictionary();
        let engine = Engine::new(&dictionary, 2);
        let mut board = LetterBoard::new();

        assert_eq!(engine.query_board(&board).total, 0);

        board.set_state('e', LetterState::Included);
        let result = engine.query_board(&board);
        assert_eq!(result.total, 4);
        assert_eq!(result.texts().collect::<Vec<_>>(), ["honey", "house"]);
        assert!(result.is_truncated());

        board.set_slot(0, 'm');
        assert_eq!(engine.query_board(&board).total, 1);
    }

    #[test]
    fn cap_accessors() {
        let dictionary = dictionary();
        assert_eq!(Engine::with_default_cap(&dictionary).cap(), DEFAULT_CAP);
        assert_eq!(Engine::new(&dictionary, 7).dictionary().len(), 6);
    }
}
