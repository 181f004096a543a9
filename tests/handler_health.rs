mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{FailingCache, MemoryCache, StubClassifier};
use sentiment_service::infrastructure::cache::RedisCache;
use std::sync::Arc;

#[tokio::test]
async fn test_health_all_ok() {
    let state = common::create_test_state(
        Arc::new(StubClassifier::positive()),
        Arc::new(MemoryCache::default()),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["inference"]["status"], "ok");
}

#[tokio::test]
async fn test_health_cache_down() {
    let state = common::create_test_state(
        Arc::new(StubClassifier::positive()),
        Arc::new(FailingCache),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
    assert_eq!(json["checks"]["inference"]["status"], "ok");
}

#[tokio::test]
async fn test_health_inference_down() {
    let state = common::create_test_state(
        Arc::new(StubClassifier::positive().unhealthy()),
        Arc::new(MemoryCache::default()),
    );
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "ok");
    assert_eq!(json["checks"]["inference"]["status"], "error");
    assert!(json["checks"]["inference"]["message"].is_string());
}

#[tokio::test]
async fn test_health_redis_unreachable() {
    let cache = RedisCache::new(common::UNREACHABLE_REDIS_URL, common::TTL_SECONDS).unwrap();
    let state = common::create_test_state(Arc::new(StubClassifier::positive()), Arc::new(cache));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["cache"]["status"], "error");
}
