//! Sentiment classification result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Polarity assigned to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    /// All labels the classifier is allowed to produce.
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sentiment label: {0}")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLabel(trimmed.to_string()))
    }
}

/// Outcome of a single model invocation.
///
/// Produced once per cache key and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Model confidence in `0.0..=1.0`.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl SentimentResult {
    pub fn new(label: SentimentLabel, confidence: f64, explanation: Option<String>) -> Self {
        Self {
            label,
            confidence,
            explanation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        assert_eq!(
            "Positive".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            " NEGATIVE ".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Negative
        );
        assert_eq!(
            "mixed".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Mixed
        );
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "ecstatic".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err, UnknownLabel("ecstatic".to_string()));
    }

    #[test]
    fn test_label_serializes_lowercase() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "\"neutral\"");
    }

    #[test]
    fn test_result_omits_missing_explanation() {
        let result = SentimentResult::new(SentimentLabel::Positive, 0.9, None);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["label"], "positive");
        assert_eq!(json["confidence"], 0.9);
        assert!(json.get("explanation").is_none());
    }
}
