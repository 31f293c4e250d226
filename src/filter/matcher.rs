//! Dictionary matching
//!
//! A word matches when every pinned slot agrees, no excluded letter appears,
//! and every included letter appears at least once. Results are sorted
//! alphabetically and capped; the true total is always reported.

use crate::core::{LetterSet, Pattern, Word};
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// Default maximum number of words returned by a query
pub const DEFAULT_CAP: usize = 100;

/// Outcome of a query
///
/// Invariant: `words.len() == min(total, cap)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// Matching words in alphabetical order, truncated to the cap
    pub words: Vec<&'a Word>,
    /// Number of matching words before truncation
    pub total: usize,
}

impl MatchResult<'_> {
    /// True when more words matched than were returned
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.words.len()
    }

    /// Returned words as string slices
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.text())
    }
}

/// The per-word predicate
#[inline]
#[must_use]
pub fn matches(word: &Word, pattern: &Pattern, excluded: LetterSet, included: LetterSet) -> bool {
    pattern.fits(word)
        && !word.letters().intersects(excluded)
        && included.is_subset(word.letters())
}

/// Filter the dictionary against a pattern and letter sets
///
/// An empty pattern with no letter constraints means nothing has been entered
/// yet and returns an empty result. An empty pattern with constraints pins no
/// positions, so it behaves exactly like `?????`.
///
/// # Examples
/// ```
/// use wordle_helper::core::{LetterSet, Pattern};
/// use wordle_helper::dictionary::Dictionary;
/// use wordle_helper::filter::match_words;
///
/// let dictionary = Dictionary::from_text("money\nhoney\nrobot").unwrap();
/// let result = match_words(
///     &Pattern::parse("?o??y"),
///     LetterSet::from_letters("h"),
///     LetterSet::EMPTY,
///     &dictionary,
///     100,
/// );
/// assert_eq!(result.texts().collect::<Vec<_>>(), ["money"]);
/// assert_eq!(result.total, 1);
/// ```
#[must_use]
pub fn match_words<'a>(
    pattern: &Pattern,
    excluded: LetterSet,
    included: LetterSet,
    dictionary: &'a Dictionary,
    cap: usize,
) -> MatchResult<'a> {
    if pattern.is_empty() && excluded.is_empty() && included.is_empty() {
        return MatchResult::default();
    }

    let mut words: Vec<&Word> = dictionary
        .words()
        .par_iter()
        .filter(|word| matches(word, pattern, excluded, included))
        .collect();
    words.par_sort_unstable();

    let total = words.len();
    words.truncate(cap);

    log::debug!(
        "query pattern=\"{pattern}\" excluded=\"{excluded}\" included=\"{included}\": {total} matches, {} returned",
        words.len()
    );

    MatchResult { words, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_text("robot\nabout\nmoney\ntower\nhouse\nhoney\nsorry\nagree").unwrap()
    }

    fn query<'a>(
        dictionary: &'a Dictionary,
        pattern: &str,
        excluded: &str,
        included: &str,
    ) -> MatchResult<'a> {
        match_words(
            &Pattern::parse(pattern),
            LetterSet::from_letters(excluded),
            LetterSet::from_letters(included),
            dictionary,
            DEFAULT_CAP,
        )
    }

    #[test]
    fn positional_pattern() {
        let dictionary = dictionary();
        let result = query(&dictionary, "?o??y", "", "");
        assert_eq!(result.texts().collect::<Vec<_>>(), ["honey", "money", "sorry"]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn excluded_letters_reject_words() {
        let dictionary = dictionary();
        let result = query(&dictionary, "", "diuston", "a");
        assert!(!result.texts().any(|w| w == "about"));
        assert_eq!(result.texts().collect::<Vec<_>>(), ["agree"]);
    }

    #[test]
    fn included_letters_must_all_appear() {
        let dictionary = dictionary();
        let result = query(&dictionary, "", "", "oe");
        assert_eq!(
            result.texts().collect::<Vec<_>>(),
            ["honey", "house", "money", "tower"]
        );
    }

    #[test]
    fn nothing_entered_returns_empty() {
        let dictionary = dictionary();
        let result = query(&dictionary, "", "", "");
        assert!(result.words.is_empty());
        assert_eq!(result.total, 0);
        assert!(!result.is_truncated());
    }

    #[test]
    fn all_wildcards_return_everything() {
        let dictionary = dictionary();
        let result = query(&dictionary, "?????", "", "");
        assert_eq!(result.total, dictionary.len());
        assert_eq!(result.words.len(), dictionary.len());
    }

    #[test]
    fn empty_pattern_with_constraints_acts_as_wildcards() {
        let dictionary = dictionary();
        assert_eq!(
            query(&dictionary, "", "z", ""),
            query(&dictionary, "?????", "z", "")
        );
    }

    #[test]
    fn results_are_alphabetical() {
        let dictionary = dictionary();
        let result = query(&dictionary, "?????", "", "");
        assert!(result.words.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn cap_truncates_but_total_is_true() {
        let text: String = (0..250)
            .map(|i| {
                let a = (b'a' + (i / 26) as u8) as char;
                let b = (b'a' + (i % 26) as u8) as char;
                format!("{a}{b}xyz\n")
            })
            .collect();
        let dictionary = Dictionary::from_text(&text).unwrap();
        assert_eq!(dictionary.len(), 250);

        let result = match_words(
            &Pattern::parse("?????"),
            LetterSet::EMPTY,
            LetterSet::EMPTY,
            &dictionary,
            DEFAULT_CAP,
        );
        assert_eq!(result.total, 250);
        assert_eq!(result.words.len(), 100);
        assert!(result.is_truncated());
        assert_eq!(result.words[0].text(), "aaxyz");
        assert_eq!(result.words[99].text(), "dvxyz");
    }

    #[test]
    fn zero_cap_reports_total_only() {
        let dictionary = dictionary();
        let result = match_words(
            &Pattern::parse("?????"),
            LetterSet::EMPTY,
            LetterSet::EMPTY,
            &dictionary,
            0,
        );
        assert!(result.words.is_empty());
        assert_eq!(result.total, dictionary.len());
    }

    #[test]
    fn empty_dictionary_never_matches() {
        let dictionary = Dictionary::empty();
        let result = query(&dictionary, "?????", "", "");
        assert_eq!(result, MatchResult::default());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let dictionary = dictionary();
        assert_eq!(
            query(&dictionary, "?o", "x", "e"),
            query(&dictionary, "?o", "x", "e")
        );
    }

    #[test]
    fn matches_predicate_cases() {
        let word = Word::new("robot").unwrap();
        let open = Pattern::default();
        assert!(matches(&word, &open, LetterSet::EMPTY, LetterSet::EMPTY));
        assert!(matches(&word, &open, LetterSet::EMPTY, LetterSet::from_letters("bo")));
        assert!(!matches(&word, &open, LetterSet::from_letters("t"), LetterSet::EMPTY));
        assert!(!matches(&word, &open, LetterSet::EMPTY, LetterSet::from_letters("z")));
        assert!(!matches(&word, &Pattern::parse("b"), LetterSet::EMPTY, LetterSet::EMPTY));
    }
}
