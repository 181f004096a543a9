//! Ollama-backed sentiment classifier.

use crate::domain::entities::{SentimentLabel, SentimentResult};
use crate::domain::{InferenceError, SentimentClassifier};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, warn};

/// Instruction sent ahead of the user text. `{text}` is substituted verbatim.
const PROMPT_TEMPLATE: &str = r#"You are an expert sentiment analysis assistant. Analyze the sentiment of the provided text and return a strict JSON object with the following fields:

- "label": one of "positive", "negative", "neutral", or "mixed"
- "confidence": a float between 0 and 1 indicating your confidence level
- "explanation": a concise explanation of why you chose this label (max 20 words)

Rules:
1. Respond ONLY with a single valid JSON object.
2. Do NOT include any text outside the JSON.
3. If you cannot determine the sentiment, return {"label": "neutral", "confidence": 0.0, "explanation": "Unable to determine sentiment"}.

Text to analyze:
{text}"#;

/// Sentiment classifier talking to Ollama's `/api/generate` endpoint.
///
/// A single `reqwest::Client` is shared across requests; the configured
/// timeout bounds every call, including health checks.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    timeout_secs: u64,
    client: Client,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'static str,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// Shape the model is asked to produce.
#[derive(Deserialize)]
struct RawSentiment {
    label: String,
    confidence: f64,
    #[serde(default)]
    explanation: Option<String>,
}

impl OllamaClient {
    /// Creates a client for the Ollama server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`InferenceError::Unavailable`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| InferenceError::Unavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            error!(timeout_secs = self.timeout_secs, "Sentiment analysis timeout");
            InferenceError::Timeout {
                seconds: self.timeout_secs,
            }
        } else if e.is_connect() {
            error!(error = %e, base_url = %self.base_url, "Failed to connect to Ollama");
            InferenceError::Unavailable(format!("Ollama server not reachable at {}", self.base_url))
        } else {
            error!(error = %e, "Ollama request failed");
            InferenceError::Unavailable(format!("Network error: {}", e))
        }
    }

    /// Body read failures are transport problems; decode failures are malformed replies.
    fn map_response_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_decode() {
            InferenceError::MalformedResponse(format!("Unexpected Ollama response body: {}", e))
        } else {
            self.map_transport_error(e)
        }
    }
}

/// Renders the classification prompt for `text`.
pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text)
}

/// Parses the model's textual reply into a [`SentimentResult`].
///
/// Accepts a bare JSON object or one embedded in surrounding prose or a
/// Markdown code fence. The label must be one of the known labels (any case)
/// and the confidence must lie in `0.0..=1.0`.
///
/// # Errors
///
/// Returns [`InferenceError::MalformedResponse`] when no valid object can be
/// extracted.
pub fn parse_sentiment(raw: &str) -> Result<SentimentResult, InferenceError> {
    let json = extract_json_object(raw).ok_or_else(|| {
        InferenceError::MalformedResponse("no JSON object in model output".to_string())
    })?;

    let parsed: RawSentiment = serde_json::from_str(json)
        .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

    let label = parsed
        .label
        .parse::<SentimentLabel>()
        .map_err(|e| InferenceError::MalformedResponse(e.to_string()))?;

    if !(0.0..=1.0).contains(&parsed.confidence) {
        return Err(InferenceError::MalformedResponse(format!(
            "confidence {} outside 0..=1",
            parsed.confidence
        )));
    }

    let explanation = parsed
        .explanation
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    Ok(SentimentResult::new(label, parsed.confidence, explanation))
}

/// Returns the slice between the first `{` and the last `}`, inclusive.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

#[async_trait]
impl SentimentClassifier for OllamaClient {
    async fn classify(&self, text: &str, model: &str) -> Result<SentimentResult, InferenceError> {
        debug!(model = %model, text_len = text.len(), "Requesting sentiment from Ollama");

        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model,
            prompt: build_prompt(text),
            stream: false,
            format: "json",
            options: GenerateOptions { temperature: 0.0 },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Ollama API returned error status");

            let message = serde_json::from_str::<OllamaErrorBody>(&error_text)
                .map(|b| b.error)
                .unwrap_or(error_text);

            return Err(InferenceError::Unavailable(format!(
                "Ollama API error ({}): {}",
                status, message
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| self.map_response_error(e))?;

        parse_sentiment(&generated.response).inspect_err(|e| {
            warn!(error = %e, output = %generated.response, "Could not parse model output");
        })
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                debug!(error = %e, "Ollama health check failed");
                false
            }
        }
    }
}
