//! Tile Reporter — letter frequency across the current word list.
//!
//! Works on the word list, not the grid: a word that was dropped from the
//! layout still contributes all of its letters.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Occurrences of a single letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCount {
    pub letter: char,
    pub count: usize,
}

/// Full tile report: per-letter counts in alphabetical order plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileReport {
    pub total: usize,
    pub entries: Vec<TileCount>,
}

/// Counts every letter of every word.
pub fn tile_stats(words: &[String]) -> TileReport {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for letter in words.iter().flat_map(|w| w.chars()) {
        *counts.entry(letter).or_insert(0) += 1;
    }

    let mut entries: Vec<TileCount> = counts
        .into_iter()
        .map(|(letter, count)| TileCount { letter, count })
        .collect();
    entries.sort_by_key(|e| collation_key(e.letter));

    let total = entries.iter().map(|e| e.count).sum();
    TileReport { total, entries }
}

/// Alphabetical sort key: an umlaut sorts directly after its base letter.
fn collation_key(letter: char) -> (char, u8, char) {
    match letter {
        'Ä' => ('A', 1, letter),
        'Ö' => ('O', 1, letter),
        'Ü' => ('U', 1, letter),
        _ => (letter, 0, letter),
    }
}

impl fmt::Display for TileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{}:{}", e.letter, e.count))
            .collect();
        write!(f, "{}", parts.join("  "))
    }
}
