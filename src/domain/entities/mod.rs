//! Core domain entities representing the sentiment data model.
//!
//! # Entity Types
//!
//! - [`SentimentLabel`] - Fixed set of polarity labels
//! - [`SentimentResult`] - A single classification produced by the model
//! - [`CachedAnalysis`] - The value persisted in the cache for a key
//! - [`Analysis`] - A cached or freshly computed result, with its cache-hit flag

pub mod analysis;
pub mod sentiment;

pub use analysis::{Analysis, CachedAnalysis};
pub use sentiment::{SentimentLabel, SentimentResult, UnknownLabel};
