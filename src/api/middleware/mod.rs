//! HTTP middleware for request processing.
//!
//! Provides request/response tracing.

pub mod tracing;
