//! Utility functions for input processing.
//!
//! - [`text_normalizer`] - Whitespace normalization and length checks
//! - [`cache_key`] - Hash-based cache key derivation

pub mod cache_key;
pub mod text_normalizer;
