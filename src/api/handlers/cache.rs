//! Handler for cache administration.

use axum::{Json, extract::State};
use tracing::info;

use crate::api::dto::cache::ClearCacheResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Removes every cached analysis.
///
/// # Endpoint
///
/// `POST /cache/clear`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the cache backend fails.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearCacheResponse>, AppError> {
    let removed = state.analysis_service.clear_cache().await?;
    info!(removed, "Cache cleared via API");

    Ok(Json(ClearCacheResponse {
        message: "Cache cleared successfully".to_string(),
        removed,
    }))
}
