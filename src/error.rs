//! HTTP-facing error type.
//!
//! Every failure a handler can return is mapped to a status code and a JSON
//! body of the form:
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::InferenceError;
use crate::utils::text_normalizer::TextNormalizationError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Invalid client input (400).
    Validation { message: String, details: Value },
    /// The model backend did not answer in time (504).
    InferenceTimeout { message: String, details: Value },
    /// The model backend failed or produced unusable output (500).
    Inference { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn inference_timeout(message: impl Into<String>, details: Value) -> Self {
        Self::InferenceTimeout {
            message: message.into(),
            details,
        }
    }
    pub fn inference(message: impl Into<String>, details: Value) -> Self {
        Self::Inference {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InferenceTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::Inference { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::InferenceTimeout { message, details } => {
                ("inference_timeout", message, details)
            }
            AppError::Inference { message, details } => ("inference_error", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let info = self.to_error_info();
        write!(f, "{}: {}", info.code, info.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<TextNormalizationError> for AppError {
    fn from(e: TextNormalizationError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": "text" }))
    }
}

impl From<InferenceError> for AppError {
    fn from(e: InferenceError) -> Self {
        match e {
            InferenceError::Timeout { seconds } => AppError::inference_timeout(
                "Analysis timeout",
                json!({ "reason": e.to_string(), "timeout_secs": seconds }),
            ),
            InferenceError::Unavailable(_) | InferenceError::MalformedResponse(_) => {
                AppError::inference(
                    "Sentiment analysis failed",
                    json!({ "reason": e.to_string() }),
                )
            }
        }
    }
}
