//! Application layer services implementing business logic.
//!
//! This layer orchestrates the cache and the classifier. Services consume the
//! [`crate::infrastructure::cache::CacheService`] and
//! [`crate::domain::SentimentClassifier`] traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::analysis_service::AnalysisService`] - Cache-aside sentiment analysis

pub mod services;
