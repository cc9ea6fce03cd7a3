//! Suggestion Scorer — ranks dictionary words by letter overlap with the current list.
//!
//! Algorithm:
//! 1. `used` = distinct letters across all current words
//! 2. drop dictionary words already in the list
//! 3. overlap = distinct candidate letters that are in `used`
//! 4. drop overlap == 0
//! 5. sort by overlap desc, then length desc (stable on further ties)
//! 6. keep the top `SUGGESTION_LIMIT`

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned.
pub const SUGGESTION_LIMIT: usize = 12;

/// A ranked dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    /// Distinct letters shared with the letters already in use.
    pub overlap: usize,
}

struct ScoredCandidate<'a> {
    word: &'a str,
    overlap: usize,
    len: usize,
}

/// Scores `dictionary` against `words`. Read-only; neither input is modified.
pub fn suggest(words: &[String], dictionary: &[String]) -> Vec<Suggestion> {
    let used: HashSet<char> = words.iter().flat_map(|w| w.chars()).collect();
    let existing: HashSet<&str> = words.iter().map(String::as_str).collect();

    let mut scored: Vec<ScoredCandidate<'_>> = dictionary
        .iter()
        .filter(|candidate| !existing.contains(candidate.as_str()))
        .map(|candidate| ScoredCandidate {
            word: candidate.as_str(),
            overlap: overlap(candidate, &used),
            len: candidate.chars().count(),
        })
        .filter(|c| c.overlap > 0)
        .collect();

    scored.sort_by(|a, b| b.overlap.cmp(&a.overlap).then(b.len.cmp(&a.len)));

    scored
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|c| Suggestion {
            word: c.word.to_string(),
            overlap: c.overlap,
        })
        .collect()
}

/// Number of distinct letters of `candidate` present in `used`.
pub fn overlap(candidate: &str, used: &HashSet<char>) -> usize {
    let distinct: HashSet<char> = candidate.chars().collect();
    distinct.iter().filter(|c| used.contains(*c)).count()
}
