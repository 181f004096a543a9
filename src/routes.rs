//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`             - Endpoint index
//! - `GET  /health`       - Health check: cache and model backend
//! - `POST /analyze`      - Sentiment analysis
//! - `POST /cache/clear`  - Cache reset
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
///
/// Path normalization has to run before routing, so the routed application is
/// wrapped and mounted as the fallback of an outer router.
pub fn app_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    Router::new().fallback_service(NormalizePathLayer::trim_trailing_slash().layer(router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::AnalysisService;
    use crate::domain::MockSentimentClassifier;
    use crate::infrastructure::cache::NullCache;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(classifier: MockSentimentClassifier) -> AppState {
        let service =
            AnalysisService::new(Arc::new(classifier), Arc::new(NullCache::new()), "llama3", 60);
        AppState::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let mut classifier = MockSentimentClassifier::new();
        classifier.expect_health_check().returning(|| true);

        let response = app_router(state(classifier))
            .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let classifier = MockSentimentClassifier::new();

        let response = app_router(state(classifier))
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_analyze_requires_post() {
        let classifier = MockSentimentClassifier::new();

        let response = app_router(state(classifier))
            .oneshot(Request::get("/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
