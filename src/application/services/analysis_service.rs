//! Cache-aside sentiment analysis service.

use std::sync::Arc;

use crate::domain::SentimentClassifier;
use crate::domain::entities::{Analysis, CachedAnalysis};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::cache_key::cache_key;
use crate::utils::text_normalizer::normalize_text;
use serde_json::json;
use tracing::{debug, info, warn};

/// Maximum accepted input length, in characters.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Service that classifies text, serving repeated inputs from the cache.
///
/// # Request Flow
///
/// 1. Normalize the text (trim, collapse whitespace)
/// 2. Derive the cache key from model and normalized text
/// 3. Cache hit: return the stored analysis
/// 4. Cache miss: classify, store the result with the configured TTL, return it
///
/// The cache is fail-open: read errors and undecodable entries count as misses,
/// write errors are logged and ignored.
pub struct AnalysisService {
    classifier: Arc<dyn SentimentClassifier>,
    cache: Arc<dyn CacheService>,
    default_model: String,
    cache_ttl_seconds: u64,
}

impl AnalysisService {
    /// Creates a new analysis service.
    pub fn new(
        classifier: Arc<dyn SentimentClassifier>,
        cache: Arc<dyn CacheService>,
        default_model: impl Into<String>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            classifier,
            cache,
            default_model: default_model.into(),
            cache_ttl_seconds,
        }
    }

    /// Model used when a request does not name one.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Classifies `text`, consulting the cache first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty or oversized text.
    /// Returns [`AppError::InferenceTimeout`] or [`AppError::Inference`] when the
    /// model backend fails on a cache miss.
    pub async fn analyze(&self, text: &str, model: Option<&str>) -> Result<Analysis, AppError> {
        let normalized = normalize_text(text, MAX_TEXT_CHARS)?;
        let model = model.unwrap_or(&self.default_model);
        let key = cache_key(model, &normalized);

        if let Some(entry) = self.read_cached(&key).await {
            debug!(key = %key, "Serving analysis from cache");
            return Ok(Analysis::from_cache(entry));
        }

        let sentiment = self.classifier.classify(&normalized, model).await?;
        info!(
            model = %model,
            label = %sentiment.label,
            confidence = sentiment.confidence,
            "Text classified"
        );

        let entry = CachedAnalysis {
            text: normalized,
            sentiment,
            model_used: model.to_string(),
        };
        self.write_cached(&key, &entry).await;

        Ok(Analysis::computed(entry))
    }

    /// Returns the cached analysis for `text`, if any, without invoking the model.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty or oversized text.
    pub async fn lookup(
        &self,
        text: &str,
        model: Option<&str>,
    ) -> Result<Option<CachedAnalysis>, AppError> {
        let normalized = normalize_text(text, MAX_TEXT_CHARS)?;
        let model = model.unwrap_or(&self.default_model);
        Ok(self.read_cached(&cache_key(model, &normalized)).await)
    }

    /// Drops the cached analysis for `text`, so the next request re-runs the model.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for empty or oversized text and
    /// [`AppError::Internal`] if the cache backend fails.
    pub async fn forget(&self, text: &str, model: Option<&str>) -> Result<(), AppError> {
        let normalized = normalize_text(text, MAX_TEXT_CHARS)?;
        let model = model.unwrap_or(&self.default_model);

        self.cache
            .invalidate(&cache_key(model, &normalized))
            .await
            .map_err(|e| {
                warn!(error = %e, "Cache invalidation failed");
                AppError::internal(
                    "Failed to invalidate cache entry",
                    json!({ "reason": e.to_string() }),
                )
            })
    }

    /// Removes every cached analysis.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache backend fails.
    pub async fn clear_cache(&self) -> Result<u64, AppError> {
        self.cache.clear().await.map_err(|e| {
            warn!(error = %e, "Cache clear failed");
            AppError::internal("Failed to clear cache", json!({ "reason": e.to_string() }))
        })
    }

    /// Checks whether the cache backend answers.
    pub async fn cache_healthy(&self) -> bool {
        self.cache.health_check().await
    }

    /// Checks whether the model backend answers.
    pub async fn classifier_healthy(&self) -> bool {
        self.classifier.health_check().await
    }

    async fn read_cached(&self, key: &str) -> Option<CachedAnalysis> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "Cache read failed, falling back to inference");
                return None;
            }
        };

        match serde_json::from_str::<CachedAnalysis>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                if let Err(e) = self.cache.invalidate(key).await {
                    warn!(error = %e, "Failed to drop undecodable cache entry");
                }
                None
            }
        }
    }

    async fn write_cached(&self, key: &str, entry: &CachedAnalysis) {
        let payload = match serde_json::to_string(entry) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize analysis for cache");
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set(key, &payload, Some(self.cache_ttl_seconds))
            .await
        {
            warn!(error = %e, "Cache write failed");
        }
    }
}
