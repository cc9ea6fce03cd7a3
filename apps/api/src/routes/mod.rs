pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::layout::handlers as layout;
use crate::state::AppState;
use crate::words::handlers as words;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/api/v1/layout", post(layout::handle_build_layout))
        .route("/api/v1/layout/demo", get(layout::handle_demo_layout))
        // Reports
        .route("/api/v1/tiles", post(analysis::handle_tile_stats))
        .route("/api/v1/suggestions", post(analysis::handle_suggestions))
        // Word list editing
        .route("/api/v1/words/add", post(words::handle_add_word))
        .route("/api/v1/words/remove", post(words::handle_remove_word))
        .route("/api/v1/dictionary", get(words::handle_get_dictionary))
        .fallback(not_found)
        .with_state(state)
}
