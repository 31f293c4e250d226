//! One-shot query command
//!
//! Runs a single pattern + letter-set query and returns everything needed to
//! print it.

use crate::core::{LetterSet, LetterStates, Pattern};
use crate::filter::{Constraints, Engine, MatchResult, resolve_constraints};

/// Raw query input as typed on the command line
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    pub pattern: String,
    pub excluded: String,
    pub included: String,
}

/// Normalized inputs and the match result of a query
#[derive(Debug, Clone)]
pub struct QueryReport<'a> {
    pub pattern: Pattern,
    pub constraints: Constraints,
    /// Letters given as both excluded and included (treated as included)
    pub conflicts: LetterSet,
    pub result: MatchResult<'a>,
}

/// Normalize the request, resolve it against the pattern, and match
#[must_use]
pub fn run_query<'a>(engine: &Engine<'a>, request: &QueryRequest) -> QueryReport<'a> {
    let pattern = Pattern::parse(&request.pattern);
    let excluded = LetterSet::from_letters(&request.excluded);
    let included = LetterSet::from_letters(&request.included);

    let conflicts = excluded.intersection(included);
    if !conflicts.is_empty() {
        log::warn!("Letters both excluded and included, keeping them included: {conflicts}");
    }

    let states = LetterStates::from_sets(excluded, included);
    let constraints = resolve_constraints(&pattern, &states);
    let result = engine.query(&pattern, &states);

    QueryReport {
        pattern,
        constraints,
        conflicts,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn request(pattern: &str, excluded: &str, included: &str) -> QueryRequest {
        QueryRequest {
            pattern: pattern.to_string(),
            excluded: excluded.to_string(),
            included: included.to_string(),
        }
    }

    #[test]
    fn query_normalizes_inputs() {
        let dictionary = Dictionary::from_text("money\nhoney\nrobot").unwrap();
        let engine = Engine::with_default_cap(&dictionary);

        let report = run_query(&engine, &request(" ?O??Y! ", "H,h", ""));
        assert_eq!(report.pattern.to_string(), "?o??y");
        assert_eq!(report.constraints.excluded.to_string(), "h");
        assert_eq!(report.constraints.included.to_string(), "oy");
        assert_eq!(report.result.texts().collect::<Vec<_>>(), ["money"]);
    }

    #[test]
    fn query_reports_conflicts() {
        let dictionary = Dictionary::from_text("about\nrobot").unwrap();
        let engine = Engine::with_default_cap(&dictionary);

        let report = run_query(&engine, &request("", "ab", "a"));
        assert_eq!(report.conflicts.to_string(), "a");
        assert_eq!(report.constraints.included.to_string(), "a");
        assert_eq!(report.constraints.excluded.to_string(), "b");
        assert_eq!(report.result.total, 0);
    }

    #[test]
    fn query_with_nothing_entered() {
        let dictionary = Dictionary::from_text("about").unwrap();
        let engine = Engine::with_default_cap(&dictionary);

        let report = run_query(&engine, &QueryRequest::default());
        assert_eq!(report.result.total, 0);
        assert!(report.constraints.is_empty());
    }
}
