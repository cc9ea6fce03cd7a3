use serde::Deserialize;

use crate::errors::AppError;
use crate::words::sanitize::{normalize_list, split_pieces};

/// Word list as sent by clients: an explicit array, free text, or both.
///
/// `words` entries come first, then the pieces of `text`; the combined list is
/// sanitized and de-duplicated before it reaches the core.
#[derive(Debug, Default, Deserialize)]
pub struct WordListRequest {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl WordListRequest {
    /// Clean word list, rejected when it exceeds `max_words`.
    pub fn into_words(self, max_words: usize) -> Result<Vec<String>, AppError> {
        let text = self.text.unwrap_or_default();
        let words = normalize_list(
            self.words
                .iter()
                .map(String::as_str)
                .chain(split_pieces(&text)),
        );
        check_limit(words, max_words)
    }
}

/// Rejects lists longer than `max_words`.
pub fn check_limit(words: Vec<String>, max_words: usize) -> Result<Vec<String>, AppError> {
    if words.len() > max_words {
        return Err(AppError::Validation(format!(
            "word list has {} words, the limit is {max_words}",
            words.len()
        )));
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_then_text_deduplicated() {
        let request = WordListRequest {
            words: vec!["home".to_string(), "Love".to_string()],
            text: Some("dream, LOVE\nsmile".to_string()),
        };
        let words = request.into_words(10).unwrap();
        assert_eq!(words, vec!["HOME", "LOVE", "DREAM", "SMILE"]);
    }

    #[test]
    fn test_empty_request_is_empty_list() {
        let words = WordListRequest::default().into_words(10).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn test_limit_is_enforced_after_dedup() {
        let request = WordListRequest {
            words: vec!["AB".to_string(), "ab".to_string(), "CD".to_string()],
            text: None,
        };
        assert_eq!(request.into_words(2).unwrap().len(), 2);

        let request = WordListRequest {
            words: vec!["AB".to_string(), "CD".to_string(), "EF".to_string()],
            text: None,
        };
        assert!(matches!(request.into_words(2), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let request: WordListRequest = serde_json::from_str(r#"{"text": "a;bb"}"#).unwrap();
        assert_eq!(request.into_words(5).unwrap(), vec!["BB"]);
    }
}
