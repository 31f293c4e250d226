//! Formatting utilities for terminal output

use crate::core::{LetterSet, Pattern, WORD_LENGTH};
use crate::filter::MatchResult;

/// Render a pattern as five boxes, e.g. `[?][O][?][?][Y]`
#[must_use]
pub fn pattern_boxes(pattern: &Pattern) -> String {
    (0..WORD_LENGTH)
        .map(|i| {
            let c = pattern
                .slot(i)
                .map_or('?', |letter| letter.to_ascii_uppercase() as char);
            format!("[{c}]")
        })
        .collect()
}

/// Uppercase letters of a set, or `-` when empty
#[must_use]
pub fn letters_or_dash(set: LetterSet) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.to_string().to_uppercase()
    }
}

/// Lay words out in rows of `columns`, uppercased and space-separated
#[must_use]
pub fn word_grid<'w>(words: impl IntoIterator<Item = &'w str>, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let words: Vec<String> = words.into_iter().map(str::to_uppercase).collect();
    words.chunks(columns).map(|row| row.join("  ")).collect()
}

/// Results heading, e.g. `Possible words (100 of 2297)`
#[must_use]
pub fn results_heading(result: &MatchResult<'_>) -> String {
    if result.is_truncated() {
        format!("Possible words ({} of {})", result.words.len(), result.total)
    } else {
        format!("Possible words ({})", result.words.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn pattern_boxes_pad_to_five() {
        assert_eq!(pattern_boxes(&Pattern::parse("?o??y")), "[?][O][?][?][Y]");
        assert_eq!(pattern_boxes(&Pattern::parse("ro")), "[R][O][?][?][?]");
        assert_eq!(pattern_boxes(&Pattern::default()), "[?][?][?][?][?]");
    }

    #[test]
    fn letters_or_dash_formats() {
        assert_eq!(letters_or_dash(LetterSet::EMPTY), "-");
        assert_eq!(letters_or_dash(LetterSet::from_letters("ts")), "ST");
    }

    #[test]
    fn word_grid_rows() {
        let rows = word_grid(["about", "money", "robot"], 2);
        assert_eq!(rows, ["ABOUT  MONEY", "ROBOT"]);
    }

    #[test]
    fn word_grid_empty_and_zero_columns() {
        assert!(word_grid(Vec::<&str>::new(), 4).is_empty());
        assert_eq!(word_grid(["house"], 0), ["HOUSE"]);
    }

    #[test]
    fn results_heading_shows_truncation() {
        let money = Word::new("money").unwrap();
        let full = MatchResult {
            words: vec![&money],
            total: 1,
        };
        assert_eq!(results_heading(&full), "Possible words (1)");

        let truncated = MatchResult {
            words: vec![&money],
            total: 250,
        };
        assert_eq!(results_heading(&truncated), "Possible words (1 of 250)");
    }
}
