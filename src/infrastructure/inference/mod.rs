//! Model inference backends.
//!
//! - [`OllamaClient`] - Classifies text through a locally hosted Ollama server

mod ollama_client;

pub use ollama_client::{OllamaClient, build_prompt, parse_sentiment};
