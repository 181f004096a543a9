//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain and application
//! layers, providing concrete clients for the external services.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`inference`] - Model-serving clients (Ollama)

pub mod cache;
pub mod inference;
