//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with dependency checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Cache**: Tests Redis PING (always ok when caching is disabled)
/// 2. **Inference**: Lists models on the Ollama server
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "Cache reachable" },
///     "inference": { "status": "ok", "message": "Model backend reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let (cache_ok, inference_ok) = tokio::join!(
        state.analysis_service.cache_healthy(),
        state.analysis_service.classifier_healthy()
    );

    let cache_check = if cache_ok {
        CheckStatus::ok("Cache reachable")
    } else {
        CheckStatus::error("Cache connection failed")
    };

    let inference_check = if inference_ok {
        CheckStatus::ok("Model backend reachable")
    } else {
        CheckStatus::error("Model backend unreachable")
    };

    let all_healthy = cache_check.is_ok() && inference_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: cache_check,
            inference: inference_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
