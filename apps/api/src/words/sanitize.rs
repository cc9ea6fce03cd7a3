//! Word intake — turns raw user text into the clean word list the layout core expects.
//!
//! Rules:
//! - trim, uppercase, keep only `A–Z`, `Ä`, `Ö`, `Ü`
//! - pieces shorter than `MIN_WORD_LEN` letters are discarded
//! - duplicates collapse onto their first occurrence

use std::collections::HashSet;

use crate::errors::AppError;

/// Shortest word accepted into a list.
pub const MIN_WORD_LEN: usize = 2;

const SEPARATORS: &[char] = &['\n', ',', ';'];

fn is_accepted_letter(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ä' | 'Ö' | 'Ü')
}

/// Uppercases `raw` and strips every character outside the accepted alphabet.
pub fn sanitize_word(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|&c| is_accepted_letter(c))
        .collect()
}

fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LEN
}

/// Raw pieces of free text, split on newlines, commas and semicolons.
pub fn split_pieces(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(SEPARATORS)
}

/// Sanitizes, filters and de-duplicates already split pieces, keeping first-seen order.
pub fn normalize_list<I, S>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    pieces
        .into_iter()
        .map(|p| sanitize_word(p.as_ref()))
        .filter(|w| is_long_enough(w))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Appends `raw` to the list. Words that sanitize to fewer than two letters,
/// or that are already present, leave the list unchanged.
pub fn add_word(mut words: Vec<String>, raw: &str) -> Vec<String> {
    let word = sanitize_word(raw);
    if is_long_enough(&word) && !words.contains(&word) {
        words.push(word);
    }
    words
}

/// Removes the word at `index`.
pub fn remove_word(mut words: Vec<String>, index: usize) -> Result<Vec<String>, AppError> {
    if index >= words.len() {
        return Err(AppError::Validation(format!(
            "index {index} is out of range for a list of {} words",
            words.len()
        )));
    }
    words.remove(index);
    Ok(words)
}
