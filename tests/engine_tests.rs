//! End-to-end behavior of the query engine against real dictionaries

use wordle_helper::core::{LetterSet, LetterState, LetterStates, Pattern};
use wordle_helper::dictionary::Dictionary;
use wordle_helper::filter::{
    DEFAULT_CAP, Engine, LetterBoard, match_words, matcher::matches, resolve_constraints,
};

fn embedded() -> Dictionary {
    Dictionary::load().unwrap()
}

/// Brute-force reference for the match set, in dictionary order
fn expected<'a>(
    dictionary: &'a Dictionary,
    pattern: &Pattern,
    excluded: LetterSet,
    included: LetterSet,
) -> Vec<&'a str> {
    dictionary
        .words()
        .iter()
        .filter(|word| matches(word, pattern, excluded, included))
        .map(|word| word.text())
        .collect()
}

#[test]
fn second_o_last_y_finds_money() {
    let dictionary = embedded();
    let result = match_words(
        &Pattern::parse("?o??y"),
        LetterSet::EMPTY,
        LetterSet::EMPTY,
        &dictionary,
        DEFAULT_CAP,
    );

    assert!(result.texts().any(|word| word == "money"));
    for word in result.texts() {
        assert_eq!(word.as_bytes()[1], b'o');
        assert_eq!(word.as_bytes()[4], b'y');
    }
}

#[test]
fn letters_only_query_rejects_about() {
    let dictionary = embedded();
    let excluded = LetterSet::from_letters("diuston");
    let included = LetterSet::from_letters("a");
    let result = match_words(&Pattern::parse(""), excluded, included, &dictionary, DEFAULT_CAP);

    assert!(result.total > 0);
    assert!(!result.texts().any(|word| word == "about"));
    for word in result.texts() {
        assert!(word.contains('a'));
        assert!(!word.chars().any(|c| "diuston".contains(c)));
    }
}

#[test]
fn all_wildcards_returns_whole_dictionary() {
    let dictionary = embedded();
    let result = match_words(
        &Pattern::parse("?????"),
        LetterSet::EMPTY,
        LetterSet::EMPTY,
        &dictionary,
        DEFAULT_CAP,
    );

    assert_eq!(result.total, dictionary.len());
    assert_eq!(result.words.len(), DEFAULT_CAP);
    assert!(result.is_truncated());
    let first: Vec<&str> = dictionary.words()[..DEFAULT_CAP]
        .iter()
        .map(|word| word.text())
        .collect();
    assert_eq!(result.texts().collect::<Vec<_>>(), first);
}

#[test]
fn nothing_entered_returns_nothing() {
    let dictionary = embedded();
    let engine = Engine::with_default_cap(&dictionary);
    let result = engine.query(&Pattern::parse(""), &LetterStates::new());

    assert_eq!(result.total, 0);
    assert!(result.words.is_empty());
}

#[test]
fn cap_truncates_but_reports_total() {
    let letters = b"abcdefghijklmnopqrstuvwxyz";
    let entries: Vec<String> = (0..250)
        .map(|i| {
            let tail: String = [i / 26 % 26, i % 26]
                .iter()
                .map(|&n| char::from(letters[n]))
                .collect();
            format!("zzz{tail}")
        })
        .collect();
    let dictionary = Dictionary::from_entries(entries.iter().map(String::as_str)).unwrap();
    assert_eq!(dictionary.len(), 250);

    let engine = Engine::new(&dictionary, 100);
    let mut board = LetterBoard::new();
    board.set_pattern("zzz");
    let result = engine.query_board(&board);

    assert_eq!(result.total, 250);
    assert_eq!(result.words.len(), 100);
    assert!(result.is_truncated());
    assert_eq!(result.words[0].text(), "zzzaa");
}

#[test]
fn results_are_exactly_the_sorted_prefix() {
    let dictionary = embedded();
    let cases = [
        ("?o??y", "", ""),
        ("", "aeiou", ""),
        ("s", "", "e"),
        ("??a", "rt", "l"),
        ("", "", "xyz"),
        ("q", "", ""),
    ];

    for (raw, excluded, included) in cases {
        let pattern = Pattern::parse(raw);
        let excluded = LetterSet::from_letters(excluded);
        let included = LetterSet::from_letters(included);

        for cap in [1, 7, DEFAULT_CAP] {
            let result = match_words(&pattern, excluded, included, &dictionary, cap);
            let all = expected(&dictionary, &pattern, excluded, included);

            assert_eq!(result.total, all.len(), "total for {raw:?}");
            let prefix = &all[..all.len().min(cap)];
            assert_eq!(result.texts().collect::<Vec<_>>(), prefix, "words for {raw:?}");
        }
    }
}

#[test]
fn no_false_positives() {
    let dictionary = embedded();
    let pattern = Pattern::parse("?r");
    let excluded = LetterSet::from_letters("sn");
    let included = LetterSet::from_letters("e");
    let result = match_words(&pattern, excluded, included, &dictionary, usize::MAX);

    assert!(result.total > 0);
    for word in &result.words {
        assert_eq!(word.chars()[1], b'r');
        assert!(!word.letters().contains(b's') && !word.letters().contains(b'n'));
        assert!(word.letters().contains(b'e'));
    }
}

#[test]
fn repeated_queries_agree() {
    let dictionary = embedded();
    let engine = Engine::with_default_cap(&dictionary);
    let states = LetterStates::from_sets(LetterSet::from_letters("st"), LetterSet::from_letters("o"));
    let pattern = Pattern::parse("??o");

    let first = engine.query(&pattern, &states);
    let second = engine.query(&pattern, &states);
    assert_eq!(first, second);
}

#[test]
fn pinned_letter_beats_exclusion() {
    let pattern = Pattern::parse("?o??y");
    let states = LetterStates::from_sets(LetterSet::from_letters("oh"), LetterSet::EMPTY);
    let constraints = resolve_constraints(&pattern, &states);

    assert!(constraints.included.contains(b'o'));
    assert!(constraints.included.contains(b'y'));
    assert!(!constraints.excluded.contains(b'o'));
    assert!(constraints.excluded.contains(b'h'));

    let dictionary = embedded();
    let engine = Engine::with_default_cap(&dictionary);
    let result = engine.query(&pattern, &states);
    assert!(result.texts().any(|word| word == "money"));
}

#[test]
fn unpinning_restores_toggle() {
    let mut board = LetterBoard::new();
    board.set_state('o', LetterState::Excluded);
    assert_eq!(board.state(b'o'), LetterState::Excluded);

    board.set_slot(1, 'o');
    assert_eq!(board.state(b'o'), LetterState::Included);

    board.clear_slot(1);
    assert_eq!(board.state(b'o'), LetterState::Excluded);
}

#[test]
fn board_drives_engine_like_a_session() {
    let dictionary = embedded();
    let engine = Engine::with_default_cap(&dictionary);
    let mut board = LetterBoard::new();

    board.set_slot(1, 'o');
    board.set_slot(4, 'y');
    let before = engine.query_board(&board).total;

    board.toggle('h');
    let after = engine.query_board(&board);
    assert!(after.total < before);
    assert!(after.texts().any(|word| word == "money"));
    assert!(!after.texts().any(|word| word == "honey"));

    board.clear();
    assert_eq!(engine.query_board(&board).total, 0);
}
