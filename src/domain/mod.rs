//! Domain layer containing sentiment entities and the classifier contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (labels, results, cached analyses)
//! - [`classifier`] - Trait implemented by model backends
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Concrete backends live in [`crate::infrastructure`], and the
//! cache-aside orchestration lives in [`crate::application::services`].

pub mod classifier;
pub mod entities;

pub use classifier::{InferenceError, SentimentClassifier};

#[cfg(test)]
pub use classifier::MockSentimentClassifier;
