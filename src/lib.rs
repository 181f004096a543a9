//! # Sentiment Service
//!
//! Sentiment analysis over a locally hosted LLM (Ollama), with results cached
//! in Redis so repeated inputs never reach the model twice within the TTL.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Sentiment entities and the classifier trait
//! - **Application Layer** ([`application`]) - Cache-aside orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache and Ollama client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Request Flow
//!
//! `POST /analyze` → validate → normalize text → cache lookup →
//! hit: return stored result / miss: classify, store with TTL, return.
//!
//! The cache is fail-open: if Redis is down, requests still succeed by calling
//! the model directly.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! export OLLAMA_BASE_URL="http://localhost:11434"
//! export OLLAMA_MODEL="llama3"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::AnalysisService;
    pub use crate::domain::entities::{Analysis, CachedAnalysis, SentimentLabel, SentimentResult};
    pub use crate::domain::{InferenceError, SentimentClassifier};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheError, CacheResult, CacheService};
    pub use crate::state::AppState;
}
