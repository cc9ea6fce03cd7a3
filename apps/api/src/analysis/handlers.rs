//! Axum route handlers for the tile report and word suggestions.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::analysis::suggestions::{suggest, Suggestion};
use crate::analysis::tiles::{tile_stats, TileReport};
use crate::errors::AppError;
use crate::state::AppState;
use crate::words::WordListRequest;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// POST /api/v1/tiles
pub async fn handle_tile_stats(
    State(state): State<AppState>,
    Json(request): Json<WordListRequest>,
) -> Result<Json<TileReport>, AppError> {
    let words = request.into_words(state.config.max_words)?;
    Ok(Json(tile_stats(&words)))
}

/// POST /api/v1/suggestions
///
/// Ranks the reference dictionary against the letters already in use.
/// Read-only: picking a suggestion is a separate `words/add` call.
pub async fn handle_suggestions(
    State(state): State<AppState>,
    Json(request): Json<WordListRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let words = request.into_words(state.config.max_words)?;
    let suggestions = suggest(&words, state.dictionary.words());
    debug!(
        words = words.len(),
        suggestions = suggestions.len(),
        "Suggestions scored"
    );
    Ok(Json(SuggestionsResponse { suggestions }))
}
