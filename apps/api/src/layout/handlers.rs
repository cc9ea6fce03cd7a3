//! Axum route handlers for the Layout API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::tiles::{tile_stats, TileReport};
use crate::errors::AppError;
use crate::layout::{build_layout, Grid};
use crate::state::AppState;
use crate::words::WordListRequest;

/// Word list shown when a client has nothing of its own yet.
pub const DEMO_WORDS: &[&str] = &["EXPLORE", "CREATE", "ADVENTURE", "RELAX", "HAPPY"];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Render-ready view of a grid: one string per row, `.` for empty cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridView {
    pub size: usize,
    pub filled: usize,
    pub rows: Vec<String>,
}

impl From<&Grid> for GridView {
    fn from(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            filled: grid.filled_count(),
            rows: grid.rows(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub words: Vec<String>,
    pub grid: GridView,
    pub stats: TileReport,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/layout
///
/// Sanitizes the word list, builds a fresh grid and the tile report.
pub async fn handle_build_layout(
    State(state): State<AppState>,
    Json(request): Json<WordListRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    let words = request.into_words(state.config.max_words)?;
    let response = layout_words(words, state.config.grid_size).await?;
    Ok(Json(response))
}

/// GET /api/v1/layout/demo
pub async fn handle_demo_layout(
    State(state): State<AppState>,
) -> Result<Json<LayoutResponse>, AppError> {
    let words = DEMO_WORDS.iter().map(|w| w.to_string()).collect();
    let response = layout_words(words, state.config.grid_size).await?;
    Ok(Json(response))
}

/// Builds the layout off the async executor; placement is CPU-bound.
async fn layout_words(words: Vec<String>, grid_size: usize) -> Result<LayoutResponse, AppError> {
    let response = tokio::task::spawn_blocking(move || {
        let grid = build_layout(&words, grid_size);
        let stats = tile_stats(&words);
        LayoutResponse {
            grid: GridView::from(&grid),
            words,
            stats,
        }
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout build: {e}")))?;

    info!(
        words = response.words.len(),
        filled = response.grid.filled,
        tiles = response.stats.total,
        distribution = %response.stats,
        "Layout built"
    );
    Ok(response)
}
