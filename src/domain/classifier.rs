//! Classifier trait for sentiment inference.

use crate::domain::entities::SentimentResult;
use async_trait::async_trait;

/// Errors raised while obtaining a classification from the model backend.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The backend did not answer within the configured timeout.
    #[error("Sentiment analysis request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// The backend could not be reached or answered with an error status.
    #[error("Inference backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered, but the reply is not a valid classification.
    #[error("Invalid response format from model: {0}")]
    MalformedResponse(String),
}

/// Interface to a model that assigns a sentiment label to text.
///
/// # Implementations
///
/// - [`crate::infrastructure::inference::OllamaClient`] - Ollama HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classifies `text` with the named model.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Timeout`] when the backend is too slow, and
    /// [`InferenceError::Unavailable`] or [`InferenceError::MalformedResponse`]
    /// when no valid label could be obtained.
    async fn classify(&self, text: &str, model: &str) -> Result<SentimentResult, InferenceError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
