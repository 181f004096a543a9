//! DTOs for the sentiment analysis endpoint.

use crate::domain::entities::{Analysis, SentimentResult};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for model name validation (e.g. `llama3`, `qwen2.5:7b`, `library/mistral`).
static MODEL_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._:/-]+$").unwrap());

/// Request to classify a piece of text.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Text to analyze. The upper length limit applies after whitespace
    /// normalization and is enforced by the analysis service.
    #[validate(length(min = 1))]
    pub text: String,

    /// Optional model override (otherwise uses `OLLAMA_MODEL`).
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = "*MODEL_NAME_REGEX"))]
    pub model: Option<String>,
}

/// Classification result returned to the client.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// Normalized text that was classified.
    pub text: String,
    pub sentiment: SentimentResult,
    /// `true` when served from the cache without invoking the model.
    pub cached: bool,
    pub model_used: String,
    pub processing_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

impl AnalysisResponse {
    pub fn new(analysis: Analysis, processing_time_ms: f64) -> Self {
        Self {
            text: analysis.text,
            sentiment: analysis.sentiment,
            cached: analysis.cached,
            model_used: analysis.model_used,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }
}
