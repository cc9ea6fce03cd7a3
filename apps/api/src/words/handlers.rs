//! Axum route handlers for word-list editing and the reference dictionary.
//!
//! The service keeps no word list of its own: clients send the current list and
//! get the edited list back, then request a fresh layout.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::words::request::check_limit;
use crate::words::sanitize::{add_word, normalize_list, remove_word};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    #[serde(default)]
    pub words: Vec<String>,
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveWordRequest {
    #[serde(default)]
    pub words: Vec<String>,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct WordListResponse {
    pub words: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/words/add
///
/// Appends one word. Words that sanitize to fewer than two letters or that are
/// already listed leave the list as it was.
pub async fn handle_add_word(
    State(state): State<AppState>,
    Json(request): Json<AddWordRequest>,
) -> Result<Json<WordListResponse>, AppError> {
    let words = normalize_list(&request.words);
    let words = check_limit(add_word(words, &request.word), state.config.max_words)?;
    debug!(count = words.len(), "word added");
    Ok(Json(WordListResponse { words }))
}

/// POST /api/v1/words/remove
///
/// Removes the word at `index` of the sanitized list.
pub async fn handle_remove_word(
    Json(request): Json<RemoveWordRequest>,
) -> Result<Json<WordListResponse>, AppError> {
    let words = remove_word(normalize_list(&request.words), request.index)?;
    debug!(count = words.len(), "word removed");
    Ok(Json(WordListResponse { words }))
}

/// GET /api/v1/dictionary
pub async fn handle_get_dictionary(State(state): State<AppState>) -> Json<WordListResponse> {
    Json(WordListResponse {
        words: state.dictionary.words().to_vec(),
    })
}
