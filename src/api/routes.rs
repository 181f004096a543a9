//! API route configuration.

use crate::api::handlers::{analyze_handler, clear_cache_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Sentiment and cache routes.
///
/// # Endpoints
///
/// - `POST /analyze`      - Classify text sentiment (cache-aside)
/// - `POST /cache/clear`  - Remove every cached analysis
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/cache/clear", post(clear_cache_handler))
}
