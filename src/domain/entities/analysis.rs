//! Analysis records stored in and served from the cache.

use super::sentiment::SentimentResult;
use serde::{Deserialize, Serialize};

/// A completed analysis as persisted in the cache.
///
/// Only written after the classifier returned successfully, so any value read
/// back for a key was computed for the same normalized text and model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedAnalysis {
    /// Normalized input text.
    pub text: String,
    pub sentiment: SentimentResult,
    pub model_used: String,
}

/// Result of the cache-aside flow returned to the HTTP layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub text: String,
    pub sentiment: SentimentResult,
    pub model_used: String,
    /// `true` when the result was served from the cache.
    pub cached: bool,
}

impl Analysis {
    pub fn from_cache(entry: CachedAnalysis) -> Self {
        Self {
            text: entry.text,
            sentiment: entry.sentiment,
            model_used: entry.model_used,
            cached: true,
        }
    }

    pub fn computed(entry: CachedAnalysis) -> Self {
        Self {
            text: entry.text,
            sentiment: entry.sentiment,
            model_used: entry.model_used,
            cached: false,
        }
    }
}
