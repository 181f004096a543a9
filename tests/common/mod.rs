#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use sentiment_service::prelude::*;
use sentiment_service::routes::app_router;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DEFAULT_MODEL: &str = "llama3";
pub const TTL_SECONDS: u64 = 3600;

/// Loopback port that refuses connections, standing in for a Redis outage.
pub const UNREACHABLE_REDIS_URL: &str = "redis://127.0.0.1:1/0";

/// In-process cache recording every write and its TTL.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Option<u64>)>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn ttls(&self) -> Vec<Option<u64>> {
        self.entries
            .lock()
            .unwrap()
            .values()
            .map(|(_, ttl)| *ttl)
            .collect()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> CacheResult<u64> {
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.len() as u64;
        entries.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache whose backend is permanently unreachable.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn invalidate(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn clear(&self) -> CacheResult<u64> {
        Err(CacheError::ConnectionError("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// What [`StubClassifier`] answers with.
#[derive(Clone)]
pub enum StubOutcome {
    Sentiment(SentimentResult),
    Timeout,
    Unavailable,
    Malformed,
}

/// Classifier returning a fixed outcome and counting invocations.
pub struct StubClassifier {
    outcome: StubOutcome,
    healthy: bool,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn positive() -> Self {
        Self::new(StubOutcome::Sentiment(SentimentResult::new(
            SentimentLabel::Positive,
            0.95,
            Some("Great product!".to_string()),
        )))
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for StubClassifier {
    async fn classify(&self, _text: &str, _model: &str) -> Result<SentimentResult, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Sentiment(result) => Ok(result.clone()),
            StubOutcome::Timeout => Err(InferenceError::Timeout { seconds: 30 }),
            StubOutcome::Unavailable => {
                Err(InferenceError::Unavailable("LLM is down".to_string()))
            }
            StubOutcome::Malformed => Err(InferenceError::MalformedResponse(
                "no JSON object in model output".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

pub fn create_test_state(
    classifier: Arc<StubClassifier>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let service = AnalysisService::new(classifier, cache, DEFAULT_MODEL, TTL_SECONDS);
    AppState::new(Arc::new(service))
}

/// The production router, middleware included.
pub fn create_test_app(state: AppState) -> Router {
    app_router(state)
}
