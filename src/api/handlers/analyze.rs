//! Handler for sentiment analysis endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use std::time::Instant;
use validator::Validate;

use crate::api::dto::analyze::{AnalysisResponse, AnalyzeRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Classifies the sentiment of a text, serving repeated inputs from cache.
///
/// # Endpoint
///
/// `POST /analyze`
///
/// # Request Body
///
/// ```json
/// {
///   "text": "I love this product!",
///   "model": "llama3"  // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "text": "I love this product!",
///   "sentiment": {
///     "label": "positive",
///     "confidence": 0.95,
///     "explanation": "Expresses strong affection for the product"
///   },
///   "cached": false,
///   "model_used": "llama3",
///   "processing_time_ms": 812.4,
///   "timestamp": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed JSON, empty or oversized text, invalid model name
/// - **500 Internal Server Error**: model backend unavailable or returned unusable output
/// - **504 Gateway Timeout**: model backend did not answer in time
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let started = Instant::now();

    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let analysis = state
        .analysis_service
        .analyze(&payload.text, payload.model.as_deref())
        .await?;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    Ok(Json(AnalysisResponse::new(analysis, elapsed_ms)))
}
